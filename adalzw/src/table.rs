//! Decode-side code table.

use crate::config::ALPHABET_SIZE;

/// Code table mapping codes to byte strings.
///
/// Slots `0..=255` hold the single bytes, slot 256 is an empty placeholder
/// for the EOF code, and learned strings are appended from slot 257 on.
/// Entries are never removed individually; [`reset`](Self::reset) drops
/// every learned string at once.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<Vec<u8>>,
}

impl CodeTable {
    /// Create a table holding only the single-byte strings.
    pub fn new() -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(1 << 12),
        };
        table.reset();
        table
    }

    /// Drop every learned string.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries
            .extend((0..ALPHABET_SIZE).map(|byte| vec![byte as u8]));
        self.entries.push(Vec::new());
    }

    /// The string stored at `code`, if that slot has been filled.
    pub fn get(&self, code: u32) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// Append `entry` at the next free slot and return that slot.
    pub fn push(&mut self, entry: Vec<u8>) -> u32 {
        let slot = self.entries.len() as u32;
        self.entries.push(entry);
        slot
    }

    /// Number of filled slots, including the EOF placeholder.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the alphabet is present from construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}
