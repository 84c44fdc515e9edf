//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary from the codeword stream
//! alone. It learns each string one codeword late: the entry the encoder
//! added while emitting codeword `n` is only known once the first byte of
//! codeword `n + 1` is available. When codeword `n + 1` refers to that very
//! entry, its value must be the previous string plus its own first byte.

use crate::config::{ALPHABET_SIZE, EOF_CODE};
use crate::error::{LzwError, Result};
use crate::policy::{CeilingSample, PolicyState, ResetDecision, ResetPolicy};
use crate::stats::LzwStats;
use crate::table::CodeTable;
use crate::width::WidthController;
use adalzw_core::MsbBitReader;
use std::io::{BufReader, Read};
use tracing::debug;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Code to string table.
    table: CodeTable,
    /// Codeword width and next free slot.
    width: WidthController,
    /// Policy read from the last stream header.
    policy: Option<ResetPolicy>,
    /// Counters for the last stream.
    stats: LzwStats,
}

/// `prefix` followed by `byte`.
fn extend(prefix: &[u8], byte: u8) -> Vec<u8> {
    let mut entry = Vec::with_capacity(prefix.len() + 1);
    entry.extend_from_slice(prefix);
    entry.push(byte);
    entry
}

impl LzwDecoder {
    /// Create a new LZW decoder.
    pub fn new() -> Self {
        Self {
            table: CodeTable::new(),
            width: WidthController::for_decoder(),
            policy: None,
            stats: LzwStats::default(),
        }
    }

    /// The policy named by the most recently decoded stream header.
    pub fn policy(&self) -> Option<ResetPolicy> {
        self.policy
    }

    /// Counters for the most recent decode call.
    pub fn stats(&self) -> LzwStats {
        self.stats
    }

    /// Decode a complete compressed stream held in memory.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode_bits(MsbBitReader::new(input))
    }

    /// Decode a complete compressed stream from `reader`.
    ///
    /// Decoding stops at the EOF codeword; trailing padding bits are
    /// ignored. A stream that ends before EOF is [`LzwError::Truncated`],
    /// and a codeword the table cannot resolve is
    /// [`LzwError::CorruptStream`]. No partial output is returned on error.
    ///
    /// Input is buffered internally; the bit reader pulls one byte at a
    /// time, which would otherwise cost one `read` call per byte.
    pub fn decode_from<R: Read>(&mut self, reader: R) -> Result<Vec<u8>> {
        self.decode_bits(MsbBitReader::new(BufReader::new(reader)))
    }

    fn decode_bits<R: Read>(&mut self, mut reader: MsbBitReader<R>) -> Result<Vec<u8>> {
        self.reset();

        let policy = ResetPolicy::from_tag(reader.read_byte()?)?;
        self.policy = Some(policy);
        let mut state = PolicyState::new(policy);
        let mut output = Vec::new();

        let Some(mut val) = self.read_first(&mut reader)? else {
            self.finish_stats(policy, &output);
            return Ok(output);
        };

        loop {
            output.extend_from_slice(&val);

            let code = self.read_code(&mut reader)?;
            if code == EOF_CODE {
                break;
            }
            let s = self.resolve(code, &val, reader.bits_read())?;

            if self.width.can_assign() {
                self.width.assign()?;
                self.table.push(extend(&val, s[0]));
            }

            if self.width.should_grow() {
                let slot = self.width.grow();
                self.table.push(extend(&val, s[0]));
                self.stats.promotions += 1;
                debug!(width = self.width.width(), boundary = slot, "width promoted");
            }

            val = s;

            if self.width.at_ceiling() {
                let sample = CeilingSample {
                    matched_len: val.len(),
                    width: self.width.width(),
                };
                if state.on_ceiling(sample) == ResetDecision::Reinitialize {
                    self.reinitialize(&output);
                    output.extend_from_slice(&val);
                    match self.read_first(&mut reader)? {
                        Some(first) => val = first,
                        None => break,
                    }
                }
            }
        }

        self.finish_stats(policy, &output);
        Ok(output)
    }

    /// Read the first codeword of a generation, which must be a literal or
    /// EOF. Returns `None` on EOF.
    fn read_first<R: Read>(&mut self, reader: &mut MsbBitReader<R>) -> Result<Option<Vec<u8>>> {
        let code = self.read_code(reader)?;
        if code == EOF_CODE {
            return Ok(None);
        }
        if code >= ALPHABET_SIZE {
            return Err(LzwError::CorruptStream {
                code,
                next: self.width.next_code(),
                position: reader.bits_read(),
            });
        }
        Ok(Some(vec![code as u8]))
    }

    /// Read one codeword at the current width.
    fn read_code<R: Read>(&mut self, reader: &mut MsbBitReader<R>) -> Result<u32> {
        let code = reader.read_bits(self.width.width())?;
        if code != EOF_CODE {
            self.stats.codewords += 1;
        }
        Ok(code)
    }

    /// The string for `code`, given the previously decoded string `prev`.
    fn resolve(&self, code: u32, prev: &[u8], position: u64) -> Result<Vec<u8>> {
        let next = self.width.next_code();
        if code < next {
            if let Some(entry) = self.table.get(code) {
                return Ok(entry.to_vec());
            }
        } else if code == next {
            // The encoder used this code right after creating it.
            return Ok(extend(prev, prev[0]));
        }
        Err(LzwError::CorruptStream {
            code,
            next,
            position,
        })
    }

    /// Discard every learned string and return to 9-bit codewords.
    fn reinitialize(&mut self, output: &[u8]) {
        self.table.reset();
        self.width.reset();
        self.stats.resets += 1;
        debug!(
            offset = output.len(),
            resets = self.stats.resets,
            "dictionary reinitialized"
        );
    }

    fn finish_stats(&mut self, policy: ResetPolicy, output: &[u8]) {
        self.stats.final_width = self.width.width();
        self.stats.next_code = self.width.next_code();
        debug!(
            policy = %policy,
            output_bytes = output.len(),
            codewords = self.stats.codewords,
            resets = self.stats.resets,
            "stream decoded"
        );
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.table.reset();
        self.width.reset();
        self.policy = None;
        self.stats = LzwStats::default();
    }
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;
    use adalzw_core::MsbBitWriter;

    /// Build a stream by hand: tag byte followed by (code, width) pairs.
    fn stream(tag: u8, codes: &[(u32, u8)]) -> Vec<u8> {
        let mut writer = MsbBitWriter::new(Vec::new());
        writer.write_byte(tag).unwrap();
        for &(code, width) in codes {
            writer.write_bits(code, width).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_decode_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = LzwEncoder::new(ResetPolicy::Saturate)
            .encode(original)
            .unwrap();

        let mut decoder = LzwDecoder::new();
        assert_eq!(decoder.decode(&compressed).unwrap(), original);
        assert_eq!(decoder.policy(), Some(ResetPolicy::Saturate));
    }

    #[test]
    fn test_decode_empty_stream() {
        for tag in [b'n', b'r', b'm'] {
            let data = stream(tag, &[(EOF_CODE, 9)]);
            let mut decoder = LzwDecoder::new();
            assert!(decoder.decode(&data).unwrap().is_empty());
            assert_eq!(decoder.stats().codewords, 0);
        }
    }

    #[test]
    fn test_decode_self_reference() {
        // "ABABABA": A, B, AB(257), ABA(259) where 259 is used as soon as
        // it is created.
        let data = stream(
            b'r',
            &[(65, 9), (66, 9), (257, 9), (259, 9), (EOF_CODE, 9)],
        );
        let mut decoder = LzwDecoder::new();
        assert_eq!(decoder.decode(&data).unwrap(), b"ABABABA");
    }

    #[test]
    fn test_decode_repeated_byte() {
        let data = stream(
            b'n',
            &[(65, 9), (257, 9), (258, 9), (259, 9), (EOF_CODE, 9)],
        );
        let mut decoder = LzwDecoder::new();
        assert_eq!(decoder.decode(&data).unwrap(), vec![b'A'; 10]);
    }

    #[test]
    fn test_decode_code_beyond_table() {
        let data = stream(b'r', &[(65, 9), (300, 9), (EOF_CODE, 9)]);
        let mut decoder = LzwDecoder::new();
        let err = decoder.decode(&data).unwrap_err();
        assert!(matches!(
            err,
            LzwError::CorruptStream {
                code: 300,
                next: 257,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_first_code_not_literal() {
        let data = stream(b'm', &[(257, 9), (EOF_CODE, 9)]);
        let mut decoder = LzwDecoder::new();
        assert!(matches!(
            decoder.decode(&data),
            Err(LzwError::CorruptStream { code: 257, .. })
        ));
    }

    #[test]
    fn test_decode_unknown_mode() {
        let data = stream(b'z', &[(EOF_CODE, 9)]);
        let mut decoder = LzwDecoder::new();
        assert!(matches!(
            decoder.decode(&data),
            Err(LzwError::UnknownMode(b'z'))
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let mut decoder = LzwDecoder::new();
        assert!(matches!(
            decoder.decode(b""),
            Err(LzwError::Truncated { position: 0 })
        ));

        // Tag plus one literal, no EOF.
        let data = stream(b'r', &[(65, 9)]);
        assert!(matches!(
            decoder.decode(&data),
            Err(LzwError::Truncated { .. })
        ));
    }

    #[test]
    fn test_decoder_reuse() {
        let mut decoder = LzwDecoder::new();
        for (policy, text) in [
            (ResetPolicy::Frozen, &b"ABABABABABABABAB"[..]),
            (ResetPolicy::Monitored, &b"This is a test of compression! "[..]),
        ] {
            let compressed = LzwEncoder::new(policy).encode(text).unwrap();
            assert_eq!(decoder.decode(&compressed).unwrap(), text);
            assert_eq!(decoder.policy(), Some(policy));
        }
    }

    /// Reader that counts how often it is asked for data.
    struct CountingReader<'a> {
        data: &'a [u8],
        reads: usize,
    }

    impl Read for CountingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.reads += 1;
            self.data.read(buf)
        }
    }

    #[test]
    fn test_decode_from_buffers_reads() {
        let original = b"The quick brown fox jumps over the lazy dog. ".repeat(500);
        let compressed = LzwEncoder::new(ResetPolicy::Frozen)
            .encode(&original)
            .unwrap();
        assert!(compressed.len() > 1000);

        let mut source = CountingReader {
            data: &compressed,
            reads: 0,
        };
        let mut decoder = LzwDecoder::new();
        assert_eq!(decoder.decode_from(&mut source).unwrap(), original);
        assert!(source.reads < 10, "{} reads", source.reads);
    }
}
