//! Error types for OxiGIF operations.
//!
//! A single error enum covers every failure a decode call can surface:
//! signature problems, reads past the end of the buffer, malformed LZW
//! code streams, and the empty-result condition.

use thiserror::Error;

/// The main error type for OxiGIF operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GifError {
    /// The buffer does not start with `GIF87` or `GIF89`.
    #[error("Invalid GIF header: found {found:02x?}")]
    InvalidHeader {
        /// Leading bytes actually found (at most five).
        found: Vec<u8>,
    },

    /// A read would cross the end of the buffer.
    #[error("Truncated stream at offset {offset}: need {needed} more bytes")]
    TruncatedStream {
        /// Byte offset at which the read was attempted.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// An LZW code that cannot occur at this point in the stream.
    #[error("Corrupt LZW code {code} (next free slot {available})")]
    CorruptCode {
        /// The offending code.
        code: u16,
        /// Next free dictionary slot when the code was read.
        available: u16,
    },

    /// The LZW dictionary would grow past its fixed capacity.
    #[error("LZW dictionary overflow (max {max_codes} codes)")]
    DictionaryOverflow {
        /// Dictionary capacity.
        max_codes: usize,
    },

    /// LZW minimum code size outside `2..=8`.
    #[error("Invalid LZW minimum code size: {0} (must be 2-8)")]
    InvalidCodeSize(u8),

    /// Image dimensions exceed the configured pixel limit.
    #[error("Frame too large: {width}x{height} exceeds {limit} pixels")]
    FrameTooLarge {
        /// Image width.
        width: u16,
        /// Image height.
        height: u16,
        /// Configured pixel limit.
        limit: usize,
    },

    /// Frames decoded so far plus the next one exceed the total pixel limit.
    #[error("Pixel budget exceeded: {total} pixels across frames exceeds {limit}")]
    PixelBudgetExceeded {
        /// Pixels of every kept frame including the rejected one.
        total: usize,
        /// Configured total pixel limit.
        limit: usize,
    },

    /// No image block was found before the trailer or end of buffer.
    #[error("No frames found in GIF")]
    EmptyResult,
}

/// Result type alias for OxiGIF operations.
pub type Result<T> = std::result::Result<T, GifError>;

impl GifError {
    /// Create an invalid header error from the leading bytes of a buffer.
    pub fn invalid_header(data: &[u8]) -> Self {
        Self::InvalidHeader {
            found: data[..data.len().min(5)].to_vec(),
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(offset: usize, needed: usize) -> Self {
        Self::TruncatedStream { offset, needed }
    }

    /// Create a corrupt code error.
    pub fn corrupt_code(code: u16, available: u16) -> Self {
        Self::CorruptCode { code, available }
    }

    /// Create a dictionary overflow error.
    pub fn dictionary_overflow(max_codes: usize) -> Self {
        Self::DictionaryOverflow { max_codes }
    }

    /// Create a frame too large error.
    pub fn frame_too_large(width: u16, height: u16, limit: usize) -> Self {
        Self::FrameTooLarge {
            width,
            height,
            limit,
        }
    }

    /// Create a pixel budget error.
    pub fn pixel_budget_exceeded(total: usize, limit: usize) -> Self {
        Self::PixelBudgetExceeded { total, limit }
    }

    /// Whether this error is confined to a single image's code stream.
    ///
    /// These are the conditions a decoder may recover from by keeping or
    /// dropping the current frame and moving on to the next block.
    pub fn is_image_anomaly(&self) -> bool {
        matches!(
            self,
            Self::CorruptCode { .. } | Self::DictionaryOverflow { .. } | Self::InvalidCodeSize(_)
        )
    }
}
