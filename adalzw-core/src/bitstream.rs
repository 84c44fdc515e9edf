//! MSB-first bit channel.
//!
//! This module provides [`MsbBitReader`] and [`MsbBitWriter`], which read and
//! write values of arbitrary width (1-32 bits) over any `Read`/`Write`
//! implementation. Codewords are packed most significant bit first, so a
//! 9-bit codeword followed by a 10-bit codeword occupy 19 consecutive bits
//! with no padding between them. Only the final byte of a stream is padded
//! (with zero bits) when the writer is finished.
//!
//! # Example
//!
//! ```
//! use adalzw_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new(Vec::new());
//! writer.write_byte(b'r').unwrap();
//! writer.write_bits(0x41, 9).unwrap();
//! writer.write_bits(256, 9).unwrap();
//! let data = writer.finish().unwrap();
//!
//! let mut reader = MsbBitReader::new(&data[..]);
//! assert_eq!(reader.read_byte().unwrap(), b'r');
//! assert_eq!(reader.read_bits(9).unwrap(), 0x41);
//! assert_eq!(reader.read_bits(9).unwrap(), 256);
//! ```

use crate::error::{CoreError, Result};
use std::io::{self, Read, Write};

/// Largest value count accepted by a single read or write.
const MAX_BITS_PER_OP: u8 = 32;

#[inline]
fn check_width(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BITS_PER_OP {
        return Err(CoreError::InvalidBitWidth(count));
    }
    Ok(())
}

#[inline]
fn mask(count: u8) -> u64 {
    (1u64 << count) - 1
}

/// MSB-first bit reader over any `Read` implementation.
#[derive(Debug)]
pub struct MsbBitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> MsbBitReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull whole bytes until at least `count` bits are buffered.
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(CoreError::unexpected_eof(self.total_bits_read)),
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | byte[0] as u64;
                    self.bits_in_buffer += 8;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Read `count` bits (1-32), most significant bit first.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        check_width(count)?;
        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & mask(count);

        self.bits_in_buffer -= count;
        self.buffer &= mask(self.bits_in_buffer);
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read eight bits as a byte. The read does not need to be aligned.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }
}

/// MSB-first bit writer over any `Write` implementation.
///
/// Call [`finish`](Self::finish) when done: it pads the final partial byte
/// with zero bits and hands back the underlying writer.
#[derive(Debug)]
pub struct MsbBitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of pending bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> MsbBitWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Total number of bits written so far, excluding final padding.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write complete bytes from the MSB side of the buffer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= mask(self.bits_in_buffer);
        Ok(())
    }

    /// Write the low `count` bits (1-32) of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        check_width(count)?;

        self.buffer = (self.buffer << count) | (value as u64 & mask(count));
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single byte as eight bits.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Write a run of bytes, eight bits each.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        if self.bits_in_buffer == 0 {
            self.writer.write_all(bytes)?;
            self.total_bits_written += bytes.len() as u64 * 8;
            return Ok(());
        }
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Pad to a byte boundary, flush, and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer = 8;
            self.flush_bytes()?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}
