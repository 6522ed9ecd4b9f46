//! LSB-first code reader for GIF LZW.
//!
//! GIF packs codes starting from the least significant bit of each byte,
//! and the packed bytes are themselves split across length-prefixed
//! sub-blocks. This reader hides both layers and yields one code at a time.

use oxigif_core::{ByteCursor, Result, SubBlockReader};

/// Variable-width code reader over a sub-block chain.
#[derive(Debug)]
pub struct LsbCodeReader<'c, 'a> {
    /// Underlying sub-block chain.
    blocks: SubBlockReader<'c, 'a>,
    /// Bit accumulator (LSB-first).
    datum: u32,
    /// Number of valid bits in `datum`.
    bits: u8,
    /// Total bits consumed (for diagnostics).
    total_bits_read: u64,
}

impl<'c, 'a> LsbCodeReader<'c, 'a> {
    /// Start reading codes from the sub-block chain at the cursor.
    pub fn new(cursor: &'c mut ByteCursor<'a>) -> Self {
        Self {
            blocks: SubBlockReader::new(cursor),
            datum: 0,
            bits: 0,
            total_bits_read: 0,
        }
    }

    /// Read one code of `width` bits (1-12).
    ///
    /// Returns `None` when the chain's terminator is reached before enough
    /// bits are available.
    #[inline]
    pub fn read_code(&mut self, width: u8) -> Result<Option<u16>> {
        debug_assert!((1..=12).contains(&width), "GIF codes are 1-12 bits");

        while self.bits < width {
            match self.blocks.read_byte()? {
                Some(byte) => {
                    self.datum |= (byte as u32) << self.bits;
                    self.bits += 8;
                }
                None => return Ok(None),
            }
        }

        let code = (self.datum & ((1u32 << width) - 1)) as u16;
        self.datum >>= width;
        self.bits -= width;
        self.total_bits_read += width as u64;
        Ok(Some(code))
    }

    /// Get total bits consumed as codes.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Skip whatever is left of the chain, including its terminator.
    pub fn finish(self) -> Result<()> {
        self.blocks.finish()
    }
}
