//! Codec error types.

use adalzw_core::CoreError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A caller-supplied argument (policy name, mode flag) was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The stream starts with a byte that is not a known mode tag.
    #[error("Unknown mode tag: {0:#04x}")]
    UnknownMode(u8),

    /// A codeword refers to a slot the decoder cannot resolve.
    #[error("Corrupt stream: code {code} with next free slot {next} at bit position {position}")]
    CorruptStream {
        /// The offending codeword.
        code: u32,
        /// The decoder's next free table slot at that point.
        next: u32,
        /// Bit position just after the codeword.
        position: u64,
    },

    /// A code counter ran past the current code space without a width
    /// change or reset.
    #[error("Width overflow: code {next_code} does not fit code space of {limit}")]
    WidthOverflow {
        /// Counter value that failed to fit.
        next_code: u32,
        /// Size of the code space at the current width.
        limit: u32,
    },

    /// The encoder dictionary has no entry for the input at this offset.
    #[error("Dictionary has no entry prefixing input at offset {offset}")]
    DictionaryMiss {
        /// Byte offset into the input.
        offset: usize,
    },

    /// The stream ended before the EOF codeword.
    #[error("Truncated stream at bit position {position}")]
    Truncated {
        /// Bit position where input ran out.
        position: u64,
    },

    /// Bit channel error.
    #[error(transparent)]
    Core(CoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for LzwError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnexpectedEof { position } => Self::Truncated { position },
            CoreError::Io(e) => Self::Io(e),
            other => Self::Core(other),
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
