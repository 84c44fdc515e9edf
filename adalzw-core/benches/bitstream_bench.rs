//! Benchmarks for the MSB-first bit channel and the prefix trie
//!
//! This benchmark suite evaluates:
//! - Codeword write/read throughput at the widths the codec uses (9-16 bits)
//! - Longest-prefix lookup cost on a populated trie

use adalzw_core::{MsbBitReader, MsbBitWriter, PrefixTrie};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Number of codewords per iteration
const CODEWORDS: usize = 64 * 1024;

/// Pseudo-random codeword values, reproducible across runs
fn codewords(width: u8) -> Vec<u32> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..CODEWORDS)
        .map(|_| {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((seed >> 32) as u32) & ((1u32 << width) - 1)
        })
        .collect()
}

fn bench_write_codewords(c: &mut Criterion) {
    let mut group = c.benchmark_group("msb_write");

    for width in [9u8, 12, 16] {
        let values = codewords(width);
        group.throughput(Throughput::Elements(CODEWORDS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &values, |b, values| {
            b.iter(|| {
                let mut writer = MsbBitWriter::new(Vec::with_capacity(CODEWORDS * 2));
                for &v in values {
                    writer.write_bits(black_box(v), width).unwrap();
                }
                writer.finish().unwrap()
            });
        });
    }

    group.finish();
}

fn bench_read_codewords(c: &mut Criterion) {
    let mut group = c.benchmark_group("msb_read");

    for width in [9u8, 12, 16] {
        let mut writer = MsbBitWriter::new(Vec::new());
        for v in codewords(width) {
            writer.write_bits(v, width).unwrap();
        }
        let data = writer.finish().unwrap();

        group.throughput(Throughput::Elements(CODEWORDS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &data, |b, data| {
            b.iter(|| {
                let mut reader = MsbBitReader::new(&data[..]);
                let mut sum = 0u64;
                for _ in 0..CODEWORDS {
                    sum += reader.read_bits(width).unwrap() as u64;
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_longest_prefix(c: &mut Criterion) {
    let text = b"The quick brown fox jumps over the lazy dog. ".repeat(64);

    // Populate the trie the way the encoder would.
    let mut trie = PrefixTrie::with_alphabet();
    let mut code = 257u32;
    let mut pos = 0;
    while pos < text.len() {
        let len = trie.longest_prefix_of(&text[pos..]).len();
        if pos + len < text.len() {
            trie.put(&text[pos..=pos + len], code);
            code += 1;
        }
        pos += len;
    }

    c.bench_function("trie_longest_prefix", |b| {
        b.iter(|| {
            let mut pos = 0;
            while pos < text.len() {
                pos += black_box(trie.longest_prefix_of(&text[pos..])).len();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_write_codewords,
    bench_read_codewords,
    bench_longest_prefix
);
criterion_main!(benches);
