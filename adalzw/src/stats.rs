//! Per-stream counters.

use crate::config::{FIRST_CODE, MIN_BITS};

/// Counters collected while encoding or decoding one stream.
///
/// Encoder and decoder count the same events, so after a successful round
/// trip both sides report equal statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwStats {
    /// Data codewords, excluding the terminating EOF.
    pub codewords: u64,
    /// Width promotions, summed over all generations.
    pub promotions: u32,
    /// Dictionary reinitialisations.
    pub resets: u32,
    /// Codeword width in effect when the stream ended.
    pub final_width: u8,
    /// Next free code (encoder) or table slot (decoder) at the end.
    pub next_code: u32,
}

impl Default for LzwStats {
    fn default() -> Self {
        Self {
            codewords: 0,
            promotions: 0,
            resets: 0,
            final_width: MIN_BITS,
            next_code: FIRST_CODE,
        }
    }
}
