//! Compression ratio report per policy

use adalzw::{ResetPolicy, compress};

fn generate_uniform(size: usize) -> Vec<u8> {
    vec![0xAA; size]
}

fn generate_random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. \
                 How vexingly quick daft zebras jump! ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        let chunk_size = remaining.min(text.len());
        data.extend_from_slice(&text[..chunk_size]);
    }
    data
}

/// Redundant first half, random second half.
fn generate_shift(size: usize) -> Vec<u8> {
    let mut data = generate_text(size / 2);
    data.extend(generate_random(size - size / 2));
    data
}

#[test]
fn calculate_compression_ratios() {
    let sizes = [("small_64KB", 64 * 1024), ("medium_256KB", 256 * 1024)];

    println!("\n=== COMPRESSION RATIOS ===\n");
    println!("| Pattern | Size | Policy | Original | Compressed | Ratio |");
    println!("|---------|------|--------|----------|------------|-------|");

    for (size_name, size) in sizes {
        let patterns = [
            ("uniform", generate_uniform(size)),
            ("random", generate_random(size)),
            ("text", generate_text(size)),
            ("shift", generate_shift(size)),
        ];

        for (pattern_name, data) in patterns {
            for policy in ResetPolicy::ALL {
                let compressed = compress(&data, policy).expect("compression failed");
                let ratio = data.len() as f64 / compressed.len() as f64;

                println!(
                    "| {:<7} | {:<12} | {:<9} | {:>8} | {:>10} | {:>5.2}x |",
                    pattern_name,
                    size_name,
                    policy,
                    data.len(),
                    compressed.len(),
                    ratio,
                );

                if matches!(pattern_name, "uniform" | "text") {
                    assert!(ratio > 1.0, "{pattern_name} should compress under {policy}");
                }
            }
        }
    }
}
