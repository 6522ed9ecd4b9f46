//! GIF signature check and logical screen descriptor.

use oxigif_core::{ByteCursor, Result};
use std::fmt;

/// GIF87a signature prefix.
pub const GIF87_SIGNATURE: &[u8; 5] = b"GIF87";

/// GIF89a signature prefix.
pub const GIF89_SIGNATURE: &[u8; 5] = b"GIF89";

/// Offset of the logical screen descriptor.
pub const SCREEN_DESCRIPTOR_OFFSET: usize = 6;

/// Size of signature plus logical screen descriptor.
pub const HEADER_SIZE: usize = 13;

/// Whether `data` starts with a recognized GIF signature.
///
/// Only the first five bytes are checked. A match says the buffer is
/// meant to be a GIF, not that it will decode.
pub fn has_valid_header(data: &[u8]) -> bool {
    data.len() >= 5 && (data.starts_with(GIF87_SIGNATURE) || data.starts_with(GIF89_SIGNATURE))
}

/// GIF format revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GifVersion {
    /// GIF87a.
    Gif87a,
    /// GIF89a.
    Gif89a,
}

impl GifVersion {
    /// Version from the signature's fifth byte.
    pub fn from_signature(signature: &[u8]) -> Option<Self> {
        if signature.starts_with(GIF87_SIGNATURE) {
            Some(Self::Gif87a)
        } else if signature.starts_with(GIF89_SIGNATURE) {
            Some(Self::Gif89a)
        } else {
            None
        }
    }

    /// Get the version name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gif87a => "GIF87a",
            Self::Gif89a => "GIF89a",
        }
    }
}

impl fmt::Display for GifVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical screen descriptor flag bits.
pub mod flags {
    /// Global color table present.
    pub const GLOBAL_TABLE: u8 = 0x80;
    /// Color resolution field (bits 4-6).
    pub const COLOR_RESOLUTION: u8 = 0x70;
    /// Global color table sorted.
    pub const SORTED: u8 = 0x08;
    /// Global color table size field (bits 0-2).
    pub const TABLE_SIZE: u8 = 0x07;
}

/// GIF logical screen descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenDescriptor {
    /// Canvas width.
    pub width: u16,
    /// Canvas height.
    pub height: u16,
    /// Global color table follows the descriptor.
    pub global_table: bool,
    /// Bits per primary color, 1-8.
    pub color_resolution: u8,
    /// Global color table is sorted by importance.
    pub sorted: bool,
    /// Global color table size field (`1 << (field + 1)` entries).
    pub table_size_field: u8,
    /// Background color index.
    pub background_index: u8,
    /// Pixel aspect ratio byte.
    pub aspect_ratio: u8,
}

impl ScreenDescriptor {
    /// Read the 7-byte descriptor at the cursor.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let width = cursor.read_u16_le()?;
        let height = cursor.read_u16_le()?;
        let [packed, background_index, aspect_ratio] = cursor.read_array()?;

        Ok(Self {
            width,
            height,
            global_table: packed & flags::GLOBAL_TABLE != 0,
            color_resolution: ((packed & flags::COLOR_RESOLUTION) >> 4) + 1,
            sorted: packed & flags::SORTED != 0,
            table_size_field: packed & flags::TABLE_SIZE,
            background_index,
            aspect_ratio,
        })
    }
}

/// Read signature and screen descriptor, leaving the cursor at offset 13.
///
/// The signature must already have been validated with
/// [`has_valid_header`]; a short buffer yields a truncation error.
pub fn read_header(cursor: &mut ByteCursor<'_>) -> Result<(GifVersion, ScreenDescriptor)> {
    let signature: [u8; SCREEN_DESCRIPTOR_OFFSET] = cursor.read_array()?;
    let version = GifVersion::from_signature(&signature).unwrap_or(GifVersion::Gif89a);
    let screen = ScreenDescriptor::read(cursor)?;
    Ok((version, screen))
}
