//! Image descriptor following the `,` separator.

use oxigif_core::{ByteCursor, Result};

/// Image descriptor flag bits.
pub mod flags {
    /// Local color table present.
    pub const LOCAL_TABLE: u8 = 0x80;
    /// Rows are stored in interlaced order.
    pub const INTERLACED: u8 = 0x40;
    /// Local color table sorted.
    pub const SORTED: u8 = 0x20;
    /// Local color table size field (bits 0-2).
    pub const TABLE_SIZE: u8 = 0x07;
}

/// Position, size and table flags of one image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageDescriptor {
    /// Left offset on the logical screen.
    pub left: u16,
    /// Top offset on the logical screen.
    pub top: u16,
    /// Image width.
    pub width: u16,
    /// Image height.
    pub height: u16,
    /// Local color table follows the descriptor.
    pub local_table: bool,
    /// Rows are interlaced.
    pub interlaced: bool,
    /// Local color table sorted.
    pub sorted: bool,
    /// Local color table size field.
    pub table_size_field: u8,
}

impl ImageDescriptor {
    /// Read the 9-byte descriptor that follows the image separator.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let left = cursor.read_u16_le()?;
        let top = cursor.read_u16_le()?;
        let width = cursor.read_u16_le()?;
        let height = cursor.read_u16_le()?;
        let packed = cursor.read_u8()?;

        Ok(Self {
            left,
            top,
            width,
            height,
            local_table: packed & flags::LOCAL_TABLE != 0,
            interlaced: packed & flags::INTERLACED != 0,
            sorted: packed & flags::SORTED != 0,
            table_size_field: packed & flags::TABLE_SIZE,
        })
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
