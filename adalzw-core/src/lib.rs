//! # adalzw-core
//!
//! Core components shared by the adalzw codec and CLI.
//!
//! - [`bitstream`]: MSB-first bit channel for variable-width codewords
//! - [`trie`]: prefix trie used as the encoder's string dictionary
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     argument parsing, stdio/file plumbing, logging      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec (adalzw)                                          │
//! │     width control, reset policies, encoder, decoder     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     MsbBitReader/MsbBitWriter, PrefixTrie               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use adalzw_core::{MsbBitReader, MsbBitWriter, PrefixTrie};
//!
//! let mut trie = PrefixTrie::with_alphabet();
//! trie.put(b"AB", 257);
//! assert_eq!(trie.longest_prefix_of(b"ABC"), b"AB");
//!
//! let mut writer = MsbBitWriter::new(Vec::new());
//! writer.write_bits(257, 9).unwrap();
//! let data = writer.finish().unwrap();
//! let mut reader = MsbBitReader::new(&data[..]);
//! assert_eq!(reader.read_bits(9).unwrap(), 257);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod trie;

pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{CoreError, Result};
pub use trie::PrefixTrie;
