//! Prefix trie mapping byte strings to integer codes.
//!
//! This is the encode-side dictionary: the encoder asks for the longest key
//! that prefixes the remaining input, emits that key's value, and inserts
//! the key extended by one byte.

use std::collections::HashMap;

/// Index of the root node.
const ROOT: u32 = 0;

/// Byte-string to `u32` map with longest-prefix lookup.
///
/// Nodes live in a flat vector; edges are keyed by `(parent, byte)`.
/// Interior nodes created on the way to a deeper key carry no value.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    /// Value stored at each node, if the node terminates a key.
    values: Vec<Option<u32>>,
    /// Child edges: (parent node, byte) -> child node.
    edges: HashMap<(u32, u8), u32>,
    /// Number of keys with a value.
    len: usize,
}

impl PrefixTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            values: vec![None],
            edges: HashMap::new(),
            len: 0,
        }
    }

    /// Create a trie holding every single-byte string, each mapped to its
    /// own byte value.
    pub fn with_alphabet() -> Self {
        let mut trie = Self::new();
        trie.seed_alphabet();
        trie
    }

    fn seed_alphabet(&mut self) {
        for byte in 0..=u8::MAX {
            self.put(&[byte], byte as u32);
        }
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.values.clear();
        self.values.push(None);
        self.edges.clear();
        self.len = 0;
    }

    /// Remove every key, then re-insert the single-byte alphabet.
    pub fn reset_to_alphabet(&mut self) {
        self.clear();
        self.seed_alphabet();
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `key` with `value`, overwriting the value of an existing key.
    pub fn put(&mut self, key: &[u8], value: u32) {
        let mut node = ROOT;
        for &byte in key {
            node = match self.edges.get(&(node, byte)) {
                Some(&child) => child,
                None => {
                    let child = self.values.len() as u32;
                    self.values.push(None);
                    self.edges.insert((node, byte), child);
                    child
                }
            };
        }
        if self.values[node as usize].replace(value).is_none() {
            self.len += 1;
        }
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &[u8]) -> Option<u32> {
        let mut node = ROOT;
        for &byte in key {
            node = *self.edges.get(&(node, byte))?;
        }
        self.values[node as usize]
    }

    /// Longest key that is a prefix of `input` (empty if there is none).
    pub fn longest_prefix_of<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        let mut node = ROOT;
        let mut best = 0;
        for (depth, &byte) in input.iter().enumerate() {
            match self.edges.get(&(node, byte)) {
                Some(&child) => node = child,
                None => break,
            }
            if self.values[node as usize].is_some() {
                best = depth + 1;
            }
        }
        &input[..best]
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet() {
        let trie = PrefixTrie::with_alphabet();
        assert_eq!(trie.len(), 256);
        for byte in 0..=255u8 {
            assert_eq!(trie.get(&[byte]), Some(byte as u32));
        }
        assert_eq!(trie.get(b""), None);
        assert_eq!(trie.get(b"AB"), None);
    }

    #[test]
    fn test_longest_prefix() {
        let mut trie = PrefixTrie::with_alphabet();
        trie.put(b"AB", 257);
        trie.put(b"ABCD", 258);

        assert_eq!(trie.longest_prefix_of(b"ABCDE"), b"ABCD");
        // "ABC" is only an interior node
        assert_eq!(trie.longest_prefix_of(b"ABCX"), b"AB");
        assert_eq!(trie.longest_prefix_of(b"AX"), b"A");
        assert_eq!(trie.longest_prefix_of(b""), b"");
        assert_eq!(trie.get(b"ABC"), None);
    }

    #[test]
    fn test_put_overwrites() {
        let mut trie = PrefixTrie::with_alphabet();
        trie.put(b"AA", 511);
        trie.put(b"AA", 512);
        assert_eq!(trie.get(b"AA"), Some(512));
        assert_eq!(trie.len(), 257);
    }

    #[test]
    fn test_empty_trie() {
        let trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.longest_prefix_of(b"abc"), b"");
    }

    #[test]
    fn test_reset_to_alphabet() {
        let mut trie = PrefixTrie::with_alphabet();
        trie.put(b"XYZ", 300);
        trie.reset_to_alphabet();
        assert_eq!(trie.len(), 256);
        assert_eq!(trie.get(b"XYZ"), None);
        assert_eq!(trie.longest_prefix_of(b"XYZ"), b"X");
    }
}
