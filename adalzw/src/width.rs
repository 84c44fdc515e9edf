//! Codeword width and code counter state.
//!
//! Encoder and decoder each own one [`WidthController`]. The decoder learns
//! every string one codeword after the encoder does, so its table index
//! trails the encoder's code counter by exactly one at every corresponding
//! check. The controller folds that lag into its comparisons; callers on
//! both sides then ask the same questions in the same order:
//!
//! 1. [`can_assign`](WidthController::can_assign) /
//!    [`assign`](WidthController::assign) for the ordinary new entry,
//! 2. [`should_grow`](WidthController::should_grow) /
//!    [`grow`](WidthController::grow) for the width promotion, which
//!    consumes one extra boundary slot,
//! 3. [`at_ceiling`](WidthController::at_ceiling) for the reset policy.

use crate::config::{FIRST_CODE, MAX_BITS, MAX_CODES, MIN_BITS};
use crate::error::{LzwError, Result};

/// Tracks the current codeword width and the next free code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthController {
    /// Current codeword width in bits.
    width: u8,
    /// Next code (encoder) or table slot (decoder) to hand out.
    next: u32,
    /// How far this side's counter trails the encoder's.
    lag: u32,
}

impl WidthController {
    /// Controller for the encoder's code counter.
    pub fn for_encoder() -> Self {
        Self::with_lag(0)
    }

    /// Controller for the decoder's table index.
    pub fn for_decoder() -> Self {
        Self::with_lag(1)
    }

    fn with_lag(lag: u32) -> Self {
        Self {
            width: MIN_BITS,
            next: FIRST_CODE,
            lag,
        }
    }

    /// Current codeword width.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Size of the code space at the current width (`2^width`).
    pub fn limit(&self) -> u32 {
        1 << self.width
    }

    /// Next code or slot to be handed out.
    pub fn next_code(&self) -> u32 {
        self.next
    }

    /// The counter expressed in encoder terms. Equal on both sides at
    /// corresponding points of the stream.
    pub fn sync_code(&self) -> u32 {
        self.next + self.lag
    }

    /// Whether an ordinary entry fits in the current code space.
    pub fn can_assign(&self) -> bool {
        self.next < self.limit()
    }

    /// Hand out the next code for an ordinary entry.
    pub fn assign(&mut self) -> Result<u32> {
        if !self.can_assign() {
            return Err(LzwError::WidthOverflow {
                next_code: self.next,
                limit: self.limit(),
            });
        }
        let code = self.next;
        self.next += 1;
        Ok(code)
    }

    /// Whether the counter has reached the top of a non-final code space.
    pub fn should_grow(&self) -> bool {
        self.width < MAX_BITS && self.sync_code() == self.limit()
    }

    /// Widen codewords by one bit. Returns the boundary slot consumed by
    /// the promotion; the caller fills it with a copy of the entry it just
    /// added.
    pub fn grow(&mut self) -> u32 {
        debug_assert!(self.should_grow(), "grow called off the boundary");
        let slot = self.next;
        self.next += 1;
        self.width += 1;
        slot
    }

    /// Whether the whole 16-bit code space is spoken for.
    pub fn at_ceiling(&self) -> bool {
        self.sync_code() >= MAX_CODES
    }

    /// Return to the initial width and counter.
    pub fn reset(&mut self) {
        self.width = MIN_BITS;
        self.next = FIRST_CODE;
    }
}
