//! LZW configuration for GIF image data.

use oxigif_core::{GifError, Result};

/// Smallest minimum code size a GIF image may declare.
pub const MIN_CODE_SIZE: u8 = 2;

/// Largest minimum code size a GIF image may declare.
pub const MAX_MIN_CODE_SIZE: u8 = 8;

/// Widest code the decoder will ever read.
pub const MAX_CODE_SIZE: u8 = 12;

/// LZW configuration parameters derived from the image's minimum code size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Minimum code size in bits (`data_size`), 2-8.
    pub min_code_size: u8,
}

impl LzwConfig {
    /// Configuration for 8-bit palettes (256 literal codes).
    pub const GIF_8BIT: Self = Self { min_code_size: 8 };

    /// Configuration for 2-bit palettes, the smallest GIF allows.
    pub const GIF_2BIT: Self = Self { min_code_size: 2 };

    /// Create a configuration, validating the minimum code size.
    pub fn new(min_code_size: u8) -> Result<Self> {
        if !(MIN_CODE_SIZE..=MAX_MIN_CODE_SIZE).contains(&min_code_size) {
            return Err(GifError::InvalidCodeSize(min_code_size));
        }
        Ok(Self { min_code_size })
    }

    /// Get the clear code value (`1 << min_code_size`).
    pub fn clear_code(&self) -> u16 {
        1 << self.min_code_size
    }

    /// Get the end-of-information code value (clear_code + 1).
    pub fn eoi_code(&self) -> u16 {
        self.clear_code() + 1
    }

    /// Get the first available code for dictionary entries.
    pub fn first_code(&self) -> u16 {
        self.eoi_code() + 1
    }

    /// Code width in bits right after a reset.
    pub fn initial_code_size(&self) -> u8 {
        self.min_code_size + 1
    }
}
