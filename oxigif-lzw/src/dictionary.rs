//! LZW dictionary (code table) management.

use crate::config::{LzwConfig, MAX_CODE_SIZE};
use oxigif_core::{GifError, Result};

/// Capacity of the code table, and of the unwind stack.
pub const MAX_CODES: usize = 1 << MAX_CODE_SIZE;

/// Prefix/suffix code table for GIF LZW decoding.
///
/// Every code maps to a predecessor code (`prefix`) and the last color
/// index of its string (`suffix`). Literal codes below the clear code map
/// to themselves. Both tables are allocated once at full capacity, and an
/// insertion past [`MAX_CODES`] fails instead of growing them.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code -> predecessor code.
    prefix: Vec<u16>,
    /// Code -> terminal color index.
    suffix: Vec<u8>,
    /// Configuration.
    config: LzwConfig,
    /// Next free slot.
    available: u16,
    /// Current code bit width.
    code_size: u8,
    /// `(1 << code_size) - 1`.
    code_mask: u16,
}

impl LzwDictionary {
    /// Create a dictionary in its post-clear state.
    pub fn new(config: LzwConfig) -> Self {
        let mut dict = Self {
            prefix: vec![0; MAX_CODES],
            suffix: vec![0; MAX_CODES],
            config,
            available: 0,
            code_size: 0,
            code_mask: 0,
        };

        for code in 0..config.clear_code() {
            dict.suffix[code as usize] = code as u8;
        }
        dict.reset();
        dict
    }

    /// Reset code width and free slot to their initial values.
    ///
    /// Entries at or above the first free slot are left stale; they are
    /// unreachable until overwritten because codes above `available` are
    /// rejected by the decoder.
    pub fn reset(&mut self) {
        self.available = self.config.first_code();
        self.code_size = self.config.initial_code_size();
        self.code_mask = (1 << self.code_size) - 1;
    }

    /// Add the string `prefix` + `suffix` at the next free slot.
    ///
    /// Widens the code size once the current code space is filled.
    pub fn add(&mut self, prefix: u16, suffix: u8) -> Result<()> {
        let slot = self.available as usize;
        if slot >= MAX_CODES {
            return Err(GifError::dictionary_overflow(MAX_CODES));
        }

        self.prefix[slot] = prefix;
        self.suffix[slot] = suffix;
        self.available += 1;

        if self.available & self.code_mask == 0 && (self.available as usize) < MAX_CODES {
            self.code_size += 1;
            self.code_mask = (1 << self.code_size) - 1;
        }
        Ok(())
    }

    /// Predecessor of `code`.
    #[inline]
    pub fn prefix(&self, code: u16) -> u16 {
        self.prefix[code as usize]
    }

    /// Terminal color index of `code`.
    #[inline]
    pub fn suffix(&self, code: u16) -> u8 {
        self.suffix[code as usize]
    }

    /// Next free slot.
    pub fn available(&self) -> u16 {
        self.available
    }

    /// Get the current code bit width.
    pub fn code_size(&self) -> u8 {
        self.code_size
    }

    /// Get the clear code.
    pub fn clear_code(&self) -> u16 {
        self.config.clear_code()
    }

    /// Get the end-of-information code.
    pub fn eoi_code(&self) -> u16 {
        self.config.eoi_code()
    }
}
