//! # OxiGIF Core
//!
//! Core components for the OxiGIF decoder.
//!
//! - [`cursor`]: Bounds-checked byte cursor over the input buffer
//! - [`subblock`]: Length-prefixed sub-block chains
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiGIF is layered the same way as a protocol stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     detect, info, extract, test                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Container                                           │
//! │     header, color tables, block stream, frames          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     GIF LZW (LSB-first, variable code width)            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bytes (this crate)                                  │
//! │     ByteCursor, SubBlockReader, GifError                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxigif_core::{ByteCursor, SubBlockReader};
//!
//! let data = [3u8, b'a', b'b', b'c', 0];
//! let mut cursor = ByteCursor::new(&data);
//! let mut blocks = SubBlockReader::new(&mut cursor);
//! assert_eq!(blocks.next_block().unwrap(), Some(&b"abc"[..]));
//! assert_eq!(blocks.next_block().unwrap(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod subblock;

pub use cursor::ByteCursor;
pub use error::{GifError, Result};
pub use subblock::{SubBlockReader, skip_sub_blocks};
