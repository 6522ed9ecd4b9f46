//! Global and local color tables.

use crate::descriptor::ImageDescriptor;
use crate::header::ScreenDescriptor;
use crate::options::TransparencyMode;
use oxigif_core::{ByteCursor, Result};
use std::borrow::Cow;

/// Pixel emitted for indices the applicable table does not cover.
pub const UNMAPPED_PIXEL: [u8; 4] = [0, 0, 0, 0];

/// Ordered RGB triplets indexed by decoded color indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<[u8; 3]>,
}

impl ColorTable {
    /// Number of entries encoded by a 3-bit size field.
    pub fn size_for_field(field: u8) -> usize {
        1 << ((field & 0x07) + 1)
    }

    /// Build a table from RGB triplets.
    pub fn from_colors(colors: Vec<[u8; 3]>) -> Self {
        Self { colors }
    }

    /// Read a table of `1 << (field + 1)` entries at the cursor.
    pub fn read(cursor: &mut ByteCursor<'_>, field: u8) -> Result<Self> {
        let len = Self::size_for_field(field);
        let bytes = cursor.read_bytes(len * 3)?;
        let colors = bytes
            .chunks_exact(3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
            .collect();
        Ok(Self { colors })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGB triplet at `index`.
    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(index as usize).copied()
    }

    /// All entries.
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// RGBA pixel for `index`.
    ///
    /// The pending transparent index gets alpha 0 under
    /// [`TransparencyMode::Alpha`]; every other mapped index is opaque.
    #[inline]
    pub fn rgba(&self, index: u8, transparent: Option<u8>, mode: TransparencyMode) -> [u8; 4] {
        let Some([r, g, b]) = self.get(index) else {
            return UNMAPPED_PIXEL;
        };
        let alpha = match (mode, transparent) {
            (TransparencyMode::Alpha, Some(t)) if t == index => 0,
            _ => 0xFF,
        };
        [r, g, b, alpha]
    }
}

/// Read the global color table if the screen descriptor flags one.
pub fn read_global_table(
    cursor: &mut ByteCursor<'_>,
    screen: &ScreenDescriptor,
) -> Result<Option<ColorTable>> {
    if !screen.global_table {
        return Ok(None);
    }
    let table = ColorTable::read(cursor, screen.table_size_field)?;
    tracing::debug!(entries = table.len(), "global color table");
    Ok(Some(table))
}

/// Select the table for an image block.
///
/// Reads the local table when the descriptor flags one, otherwise falls
/// back to the global table, which may also be absent.
pub fn resolve_table<'g>(
    cursor: &mut ByteCursor<'_>,
    descriptor: &ImageDescriptor,
    global: Option<&'g ColorTable>,
) -> Result<Option<Cow<'g, ColorTable>>> {
    if descriptor.local_table {
        let table = ColorTable::read(cursor, descriptor.table_size_field)?;
        tracing::debug!(entries = table.len(), "local color table");
        return Ok(Some(Cow::Owned(table)));
    }
    Ok(global.map(Cow::Borrowed))
}
