//! Row placement and color lookup for decoded indices.
//!
//! Indices arrive in stream order. Non-interlaced images fill rows top to
//! bottom; interlaced images fill them in four passes:
//!
//! ```text
//! pass 0: rows 0, 8, 16, ...
//! pass 1: rows 4, 12, 20, ...
//! pass 2: rows 2, 6, 10, ...
//! pass 3: rows 1, 3, 5, ...
//! ```

use crate::options::TransparencyMode;
use crate::palette::{ColorTable, UNMAPPED_PIXEL};

/// First row of each interlace pass.
pub const INTERLACE_START: [usize; 4] = [0, 4, 2, 1];

/// Row stride of each interlace pass.
pub const INTERLACE_STRIDE: [usize; 4] = [8, 8, 4, 2];

/// Display rows in the order the code stream fills them.
#[derive(Debug, Clone)]
pub struct RowSchedule {
    height: usize,
    interlaced: bool,
    pass: usize,
    row: usize,
}

impl RowSchedule {
    /// Schedule for an image of `height` rows.
    pub fn new(height: usize, interlaced: bool) -> Self {
        Self {
            height,
            interlaced,
            pass: 0,
            row: 0,
        }
    }
}

impl Iterator for RowSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.interlaced {
            if self.row >= self.height {
                return None;
            }
            self.row += 1;
            return Some(self.row - 1);
        }

        // Passes starting at or below the last row are skipped entirely
        while self.pass < INTERLACE_START.len() {
            if self.row < self.height {
                let row = self.row;
                self.row += INTERLACE_STRIDE[self.pass];
                return Some(row);
            }
            self.pass += 1;
            if let Some(&start) = INTERLACE_START.get(self.pass) {
                self.row = start;
            }
        }
        None
    }
}

/// Expand stream-order indices into a row-major RGBA buffer.
///
/// The buffer always holds `width * height * 4` bytes; pixels the stream
/// did not reach stay `[0, 0, 0, 0]`.
pub fn rasterize(
    indices: &[u8],
    width: usize,
    height: usize,
    interlaced: bool,
    table: Option<&ColorTable>,
    transparent: Option<u8>,
    mode: TransparencyMode,
) -> Vec<u8> {
    let mut rgba = vec![0u8; width * height * 4];
    if width == 0 {
        return rgba;
    }

    let rows = RowSchedule::new(height, interlaced);
    for (row, stream_row) in rows.zip(indices.chunks(width)) {
        let start = row * width * 4;
        let out = &mut rgba[start..start + stream_row.len() * 4];
        for (pixel, &index) in out.chunks_exact_mut(4).zip(stream_row) {
            let color = match table {
                Some(table) => table.rgba(index, transparent, mode),
                None => UNMAPPED_PIXEL,
            };
            pixel.copy_from_slice(&color);
        }
    }
    rgba
}
