//! Fixed codec parameters.
//!
//! Nothing here is negotiated on the wire: encoder and decoder derive every
//! width and counter from these constants plus the one-byte mode tag.

/// Number of single-byte codes (`0..=255`).
pub const ALPHABET_SIZE: u32 = 256;

/// Codeword that terminates a stream. Never assigned to data.
pub const EOF_CODE: u32 = ALPHABET_SIZE;

/// First code handed out to a learned string.
pub const FIRST_CODE: u32 = ALPHABET_SIZE + 1;

/// Codeword width at the start of every generation.
pub const MIN_BITS: u8 = 9;

/// Widest codeword the codec will emit.
pub const MAX_BITS: u8 = 16;

/// Size of the code space at maximum width.
pub const MAX_CODES: u32 = 1 << MAX_BITS;

/// Baseline/current ratio above which the monitored policy resets.
pub const DEGRADATION_THRESHOLD: f64 = 1.1;

/// Mode tag for [`ResetPolicy::Frozen`](crate::ResetPolicy::Frozen).
pub const TAG_FROZEN: u8 = b'n';

/// Mode tag for [`ResetPolicy::Saturate`](crate::ResetPolicy::Saturate).
pub const TAG_SATURATE: u8 = b'r';

/// Mode tag for [`ResetPolicy::Monitored`](crate::ResetPolicy::Monitored).
pub const TAG_MONITORED: u8 = b'm';
