//! GIF byte-stream builder shared by the integration tests.

#![allow(dead_code)]

use weezl::BitOrder;
use weezl::encode::Encoder as WeezlEncoder;

/// Split `payload` into a sub-block chain with its terminator.
pub fn sub_blocks(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + payload.len() / 255 + 2);
    for chunk in payload.chunks(255) {
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    out.push(0);
    out
}

/// Compress `indices` with weezl and lay them out as image data.
pub fn lzw_data(min_code_size: u8, indices: &[u8]) -> Vec<u8> {
    let compressed = WeezlEncoder::new(BitOrder::Lsb, min_code_size)
        .encode(indices)
        .expect("weezl compression failed");
    let mut out = vec![min_code_size];
    out.extend(sub_blocks(&compressed));
    out
}

/// Pack explicit `(code, width)` pairs LSB-first into image data.
pub fn packed_codes(min_code_size: u8, codes: &[(u16, u8)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut acc = 0u32;
    let mut nbits = 0u8;
    for &(code, width) in codes {
        acc |= (code as u32) << nbits;
        nbits += width;
        while nbits >= 8 {
            bytes.push(acc as u8);
            acc >>= 8;
            nbits -= 8;
        }
    }
    if nbits > 0 {
        bytes.push(acc as u8);
    }
    let mut out = vec![min_code_size];
    out.extend(sub_blocks(&bytes));
    out
}

/// Size field for a table of `len` entries (a power of two, 2-256).
pub fn table_field(len: usize) -> u8 {
    assert!(len.is_power_of_two() && (2..=256).contains(&len));
    (len.trailing_zeros() - 1) as u8
}

/// Grayscale-ish table where entry `i` is `[i, 255 - i, i / 2]`.
pub fn ramp_table(len: usize) -> Vec<[u8; 3]> {
    (0..len)
        .map(|i| [i as u8, 255 - i as u8, (i / 2) as u8])
        .collect()
}

/// One image block.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub interlaced: bool,
    pub local_table: Option<Vec<[u8; 3]>>,
    /// Image data: minimum code size byte followed by the sub-block chain.
    pub data: Vec<u8>,
}

impl Image {
    /// Image whose indices are compressed with weezl.
    pub fn encoded(width: u16, height: u16, min_code_size: u8, indices: &[u8]) -> Self {
        Self {
            width,
            height,
            data: lzw_data(min_code_size, indices),
            ..Self::default()
        }
    }

    /// Image with hand-written image data.
    pub fn raw(width: u16, height: u16, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
            ..Self::default()
        }
    }

    pub fn interlaced(mut self) -> Self {
        self.interlaced = true;
        self
    }

    pub fn at(mut self, left: u16, top: u16) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn with_local_table(mut self, table: Vec<[u8; 3]>) -> Self {
        self.local_table = Some(table);
        self
    }
}

/// Incremental GIF writer.
#[derive(Debug, Clone)]
pub struct GifBuilder {
    bytes: Vec<u8>,
}

impl GifBuilder {
    /// GIF89a header with an optional global table.
    pub fn new(width: u16, height: u16, global: Option<&[[u8; 3]]>) -> Self {
        Self::with_signature(b"GIF89a", width, height, global)
    }

    pub fn with_signature(
        signature: &[u8; 6],
        width: u16,
        height: u16,
        global: Option<&[[u8; 3]]>,
    ) -> Self {
        let mut bytes = signature.to_vec();
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        let packed = match global {
            Some(table) => 0x80 | 0x70 | table_field(table.len()),
            None => 0x70,
        };
        bytes.extend_from_slice(&[packed, 0, 0]);
        if let Some(table) = global {
            bytes.extend(table.iter().flatten());
        }
        Self { bytes }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Graphic control extension.
    pub fn graphic_control(mut self, disposal: u8, delay: u16, transparent: Option<u8>) -> Self {
        let flags = (disposal << 2) | u8::from(transparent.is_some());
        let [lo, hi] = delay.to_le_bytes();
        self.bytes.extend_from_slice(&[b'!', 0xF9, 4, flags, lo, hi]);
        self.bytes.push(transparent.unwrap_or(0));
        self.bytes.push(0);
        self
    }

    /// Arbitrary extension with the given sub-block payload.
    pub fn extension(mut self, label: u8, payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(&[b'!', label]);
        self.bytes.extend(sub_blocks(payload));
        self
    }

    pub fn image(mut self, image: &Image) -> Self {
        self.bytes.push(b',');
        self.bytes.extend_from_slice(&image.left.to_le_bytes());
        self.bytes.extend_from_slice(&image.top.to_le_bytes());
        self.bytes.extend_from_slice(&image.width.to_le_bytes());
        self.bytes.extend_from_slice(&image.height.to_le_bytes());
        let mut packed = 0u8;
        if image.interlaced {
            packed |= 0x40;
        }
        if let Some(table) = &image.local_table {
            packed |= 0x80 | table_field(table.len());
        }
        self.bytes.push(packed);
        if let Some(table) = &image.local_table {
            self.bytes.extend(table.iter().flatten());
        }
        self.bytes.extend_from_slice(&image.data);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Append the trailer.
    pub fn finish(mut self) -> Vec<u8> {
        self.bytes.push(b';');
        self.bytes
    }

    /// Bytes without a trailer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Expected RGBA for `indices` through `table`, all opaque.
pub fn expected_rgba(table: &[[u8; 3]], indices: &[u8]) -> Vec<u8> {
    indices
        .iter()
        .flat_map(|&i| {
            let [r, g, b] = table[i as usize];
            [r, g, b, 255]
        })
        .collect()
}
