//! LZW encoder (compression).

use crate::config::EOF_CODE;
use crate::error::{LzwError, Result};
use crate::policy::{CeilingSample, PolicyState, ResetDecision, ResetPolicy};
use crate::stats::LzwStats;
use crate::width::WidthController;
use adalzw_core::{MsbBitWriter, PrefixTrie};
use std::io::{BufWriter, Write};
use tracing::debug;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Reset policy written into the stream header.
    policy: ResetPolicy,
    /// String to code dictionary.
    dict: PrefixTrie,
    /// Codeword width and next free code.
    width: WidthController,
    /// Counters for the last stream.
    stats: LzwStats,
}

impl LzwEncoder {
    /// Create a new encoder using `policy` at the ceiling.
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            policy,
            dict: PrefixTrie::with_alphabet(),
            width: WidthController::for_encoder(),
            stats: LzwStats::default(),
        }
    }

    /// Counters for the most recent [`encode`](Self::encode) call.
    pub fn stats(&self) -> LzwStats {
        self.stats
    }

    /// Encode `input` into a new buffer.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode_into(input, Vec::with_capacity(input.len() / 2 + 4))
    }

    /// Encode `input` into `writer` and return the writer once the stream
    /// is complete. Output is buffered internally, so `writer` may be an
    /// unbuffered file or socket.
    pub fn encode_to<W: Write>(&mut self, input: &[u8], writer: W) -> Result<W> {
        let buffered = self.encode_into(input, BufWriter::new(writer))?;
        buffered.into_inner().map_err(|e| e.into_error().into())
    }

    /// Write the complete stream for `input` to `writer`.
    ///
    /// # Algorithm
    ///
    /// 1. Write the mode tag byte
    /// 2. Find the longest dictionary string prefixing the remaining input
    /// 3. Emit its code at the current width
    /// 4. Learn that string plus the next input byte, if there is room
    /// 5. On reaching the top of the code space, widen codewords and learn
    ///    the same string again in the boundary slot
    /// 6. At the 16-bit ceiling, let the reset policy decide whether to
    ///    start over with a fresh dictionary
    /// 7. After the input is consumed, emit the EOF code
    fn encode_into<W: Write>(&mut self, input: &[u8], writer: W) -> Result<W> {
        self.reset();
        let mut writer = MsbBitWriter::new(writer);
        let mut policy = PolicyState::new(self.policy);

        writer.write_byte(self.policy.tag())?;

        let mut pos = 0;
        while pos < input.len() {
            let rest = &input[pos..];
            let matched = self.dict.longest_prefix_of(rest);
            let code = self
                .dict
                .get(matched)
                .ok_or(LzwError::DictionaryMiss { offset: pos })?;
            let t = matched.len();

            writer.write_bits(code, self.width.width())?;
            self.stats.codewords += 1;

            let learns = t < rest.len();
            if learns && self.width.can_assign() {
                let code = self.width.assign()?;
                self.dict.put(&rest[..=t], code);
            }

            if learns && self.width.should_grow() {
                let code = self.width.grow();
                self.dict.put(&rest[..=t], code);
                self.stats.promotions += 1;
                debug!(width = self.width.width(), boundary = code, "width promoted");
            }

            if self.width.at_ceiling() {
                let sample = CeilingSample {
                    matched_len: t,
                    width: self.width.width(),
                };
                if policy.on_ceiling(sample) == ResetDecision::Reinitialize {
                    self.reinitialize(pos);
                }
            }

            pos += t;
        }

        writer.write_bits(EOF_CODE, self.width.width())?;
        self.stats.final_width = self.width.width();
        self.stats.next_code = self.width.next_code();

        debug!(
            policy = %self.policy,
            input_bytes = input.len(),
            output_bits = writer.bits_written(),
            codewords = self.stats.codewords,
            resets = self.stats.resets,
            "stream encoded"
        );

        Ok(writer.finish()?)
    }

    /// Discard the dictionary and return to 9-bit codewords.
    fn reinitialize(&mut self, pos: usize) {
        self.dict.reset_to_alphabet();
        self.width.reset();
        self.stats.resets += 1;
        debug!(offset = pos, resets = self.stats.resets, "dictionary reinitialized");
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.reset_to_alphabet();
        self.width.reset();
        self.stats = LzwStats::default();
    }
}
