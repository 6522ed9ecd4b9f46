//! Bounds-checked reading over an in-memory byte buffer.
//!
//! Every GIF structure is parsed through [`ByteCursor`]. A read that would
//! cross the end of the buffer fails with [`GifError::TruncatedStream`]
//! and leaves the position untouched.
//!
//! # Example
//!
//! ```
//! use oxigif_core::ByteCursor;
//!
//! let mut cursor = ByteCursor::new(&[0x2C, 0x10, 0x00]);
//! assert_eq!(cursor.read_u8().unwrap(), 0x2C);
//! assert_eq!(cursor.read_u16_le().unwrap(), 16);
//! assert!(cursor.is_at_end());
//! assert!(cursor.read_u8().is_err());
//! ```

use crate::error::{GifError, Result};

/// Immutable source buffer plus a monotonically advancing read position.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read one byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or_else(|| GifError::truncated(self.pos, 1))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian 16-bit value.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read `len` bytes as a slice borrowed from the source buffer.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(GifError::truncated(self.pos, len));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }
}
