//! Error types for the bit channel and prefix trie.

use std::io;
use thiserror::Error;

/// Errors raised by the collaborators the codec builds on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The underlying reader ran out of bytes in the middle of a read.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ended.
        position: u64,
    },

    /// A bit count outside the supported range was requested.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::unexpected_eof(42);
        assert!(err.to_string().contains("bit position 42"));
        assert!(matches!(err, CoreError::UnexpectedEof { position: 42 }));

        let err = CoreError::InvalidBitWidth(40);
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
