//! # OxiGIF-LZW: Pure Rust GIF LZW Decompression
//!
//! This crate decodes the LZW-compressed image data found inside GIF image
//! blocks into a stream of color indices.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **GIF LZW**: LSB-first bit order, 2-8 bit minimum code size, 12-bit cap
//! - **Sub-block aware**: Reads straight from the length-prefixed chain
//! - **Bounded**: Fixed 4096-entry tables, no unchecked growth
//!
//! ## GIF LZW Specification
//!
//! - **Clear code**: `1 << min_code_size`, resets the table
//! - **End of information**: clear code + 1
//! - **Code width**: starts at `min_code_size + 1`, grows by one bit each
//!   time the current code space fills, never beyond 12 bits
//! - **Truncation**: a zero-length sub-block may end the data early
//!
//! ## Example
//!
//! ```rust
//! use oxigif_core::ByteCursor;
//! use oxigif_lzw::{StreamStatus, decode_image_data};
//!
//! // min code size 2, one sub-block holding: clear, 0, 1, 1, 0, eoi
//! let data = [0x02, 0x03, 0x44, 0x02, 0x05, 0x00];
//! let mut cursor = ByteCursor::new(&data);
//!
//! let decoded = decode_image_data(&mut cursor, 4).unwrap();
//! assert_eq!(decoded.indices, vec![0, 1, 1, 0]);
//! assert_eq!(decoded.status, StreamStatus::Complete);
//! assert!(cursor.is_at_end());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_lsb;
mod config;
mod decoder;
mod dictionary;

pub use bitstream_lsb::LsbCodeReader;
pub use config::{LzwConfig, MAX_CODE_SIZE, MAX_MIN_CODE_SIZE, MIN_CODE_SIZE};
pub use decoder::{DecodedIndices, LzwDecoder, StreamStatus};
pub use dictionary::{LzwDictionary, MAX_CODES};

use oxigif_core::{ByteCursor, Result, skip_sub_blocks};

/// Decode one image's LZW data starting at the cursor.
///
/// Reads the minimum code size byte, decodes up to `pixel_count` indices
/// from the sub-block chain that follows, then skips whatever remains of
/// the chain so the cursor ends just past its terminator.
///
/// A minimum code size outside 2-8 is reported as an anomaly in the
/// returned status, with no indices produced.
///
/// # Errors
///
/// Returns [`oxigif_core::GifError::TruncatedStream`] if the chain runs
/// past the end of the buffer.
pub fn decode_image_data(
    cursor: &mut ByteCursor<'_>,
    pixel_count: usize,
) -> Result<DecodedIndices> {
    let min_code_size = cursor.read_u8()?;

    let config = match LzwConfig::new(min_code_size) {
        Ok(config) => config,
        Err(err) => {
            skip_sub_blocks(cursor)?;
            return Ok(DecodedIndices {
                indices: Vec::new(),
                status: StreamStatus::Anomaly(err),
            });
        }
    };

    let mut reader = LsbCodeReader::new(cursor);
    let decoded = LzwDecoder::new(config).decode(&mut reader, pixel_count)?;
    reader.finish()?;
    Ok(decoded)
}
