//! # adalzw: Adaptive-Width LZW Compression
//!
//! This crate provides an LZW (Lempel-Ziv-Welch) encoder and decoder whose
//! codewords widen from 9 to 16 bits as the dictionary fills, and which can
//! react to a full dictionary in one of three ways.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Variable width**: 9-16 bit codewords, MSB-first
//! - **Self-describing**: a one-byte mode tag selects the reset policy
//! - **Symmetric**: the decoder rebuilds every dictionary state from the
//!   codewords alone
//!
//! ## Stream Format
//!
//! ```text
//! +----------+---------------------------------------+-----------+---------+
//! | mode tag | codewords (9..=16 bits, MSB-first)    | EOF (256) | padding |
//! | 1 byte   |                                       |           | 0-7 bits|
//! +----------+---------------------------------------+-----------+---------+
//! ```
//!
//! The mode tag is `b'n'` ([`ResetPolicy::Frozen`]), `b'r'`
//! ([`ResetPolicy::Saturate`]) or `b'm'` ([`ResetPolicy::Monitored`]).
//! Codes `0..=255` are the single bytes, code 256 ends the stream and
//! learned strings start at 257. When the code counter reaches `2^W` the
//! width grows by one bit; the slot at the boundary receives a second copy
//! of the string just learned and the lower copy is never emitted.
//!
//! ## Reset Policies
//!
//! Once all 65536 codes are taken at 16 bits (the *ceiling*):
//!
//! - **Frozen** keeps the dictionary and stops learning.
//! - **Saturate** discards the dictionary and restarts at 9 bits.
//! - **Monitored** tracks the compression ratio of codewords emitted at the
//!   ceiling and restarts once it falls more than 10% below the first
//!   measurement.
//!
//! ## Example
//!
//! ```rust
//! use adalzw::{compress, decompress, ResetPolicy};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original, ResetPolicy::Saturate).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
mod decoder;
mod encoder;
mod error;
mod policy;
mod stats;
mod table;
mod width;

pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use policy::{CeilingSample, PolicyState, RatioMonitor, ResetDecision, ResetPolicy};
pub use stats::LzwStats;
pub use table::CodeTable;
pub use width::WidthController;

/// Compress `data` using `policy` at the dictionary ceiling.
///
/// # Example
///
/// ```rust
/// use adalzw::{compress, ResetPolicy};
///
/// let compressed = compress(b"", ResetPolicy::Frozen).unwrap();
/// // mode tag, then the EOF code in 9 bits
/// assert_eq!(compressed, vec![b'n', 0x80, 0x00]);
/// ```
pub fn compress(data: &[u8], policy: ResetPolicy) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(policy);
    encoder.encode(data)
}

/// Decompress a complete stream. The reset policy is taken from the
/// stream's mode tag.
///
/// # Example
///
/// ```rust
/// use adalzw::{compress, decompress, ResetPolicy};
///
/// let original = b"This is a test of compression! ".repeat(10);
/// let compressed = compress(&original, ResetPolicy::Monitored).unwrap();
/// assert_eq!(decompress(&compressed).unwrap(), original);
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new();
    decoder.decode(data)
}

/// Read the reset policy from a stream's mode tag without decoding it.
///
/// ```rust
/// use adalzw::{compress, peek_policy, ResetPolicy};
///
/// let compressed = compress(b"abc", ResetPolicy::Saturate).unwrap();
/// assert_eq!(peek_policy(&compressed).unwrap(), ResetPolicy::Saturate);
/// ```
pub fn peek_policy(data: &[u8]) -> Result<ResetPolicy> {
    match data.first() {
        Some(&tag) => ResetPolicy::from_tag(tag),
        None => Err(LzwError::Truncated { position: 0 }),
    }
}
