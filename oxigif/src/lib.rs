//! # OxiGIF
//!
//! GIF container decoding for OxiGIF.
//!
//! This crate turns a complete GIF87a/GIF89a buffer into RGBA frames:
//!
//! - **Header**: signature check, version, logical screen descriptor
//! - **Color tables**: global and per-image local tables
//! - **Extensions**: graphic control (transparency, delay, disposal);
//!   comment, application and plain text blocks are skipped
//! - **Images**: LZW decoding via `oxigif-lzw`, interlace placement,
//!   palette lookup into row-major RGBA
//!
//! ## Example
//!
//! ```rust
//! // 1x1 image, 2-color global table, pixel index 1
//! let gif = [
//!     b'G', b'I', b'F', b'8', b'9', b'a', 1, 0, 1, 0, 0x80, 0, 0,
//!     0, 0, 0, 255, 255, 255,
//!     b',', 0, 0, 0, 0, 1, 0, 1, 0, 0,
//!     2, 2, 0x4C, 0x01, 0,
//!     b';',
//! ];
//!
//! assert!(oxigif::identify(&gif));
//!
//! let frames = oxigif::decode(&gif).unwrap();
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames.first().rgba(), &[255, 255, 255, 255]);
//! ```
//!
//! ## Malformed input
//!
//! Reads past the end of the buffer fail with
//! [`GifError::TruncatedStream`]. A malformed LZW stream inside one image
//! is handled by [`AnomalyPolicy`]: keep the partial frame (default), drop
//! it, or fail the decode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod decoder;
pub mod descriptor;
pub mod extension;
pub mod frame;
pub mod header;
pub mod options;
pub mod palette;
pub mod raster;

// Re-exports
pub use decoder::{DecodedGif, GifDecoder};
pub use descriptor::ImageDescriptor;
pub use extension::{DisposalMethod, GraphicControl};
pub use frame::{Frame, FrameSequence, FrameSequenceBuilder};
pub use header::{GifVersion, ScreenDescriptor};
pub use options::{AnomalyPolicy, DecodeOptions, TransparencyMode};
pub use oxigif_core::{GifError, Result};
pub use palette::ColorTable;

/// Whether `data` begins with a GIF87 or GIF89 signature.
///
/// Only the signature is checked; a `true` result does not mean the rest
/// of the buffer decodes.
pub fn identify(data: &[u8]) -> bool {
    header::has_valid_header(data)
}

/// Decode every frame with [`DecodeOptions::DEFAULT`].
pub fn decode(data: &[u8]) -> Result<FrameSequence> {
    decode_with(data, DecodeOptions::DEFAULT)
}

/// Decode every frame with the given options.
pub fn decode_with(data: &[u8], options: DecodeOptions) -> Result<FrameSequence> {
    GifDecoder::new(options).decode(data).map(|gif| gif.frames)
}
