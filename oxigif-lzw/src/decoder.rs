//! GIF LZW decoder (decompression).
//!
//! Codes are unwound through a prefix/suffix table onto a bounded LIFO
//! stack, and one color index is popped per output pixel. Decoding stops
//! as soon as the requested number of pixels has been produced, so the
//! trailing end-of-information code is never required.

use crate::bitstream_lsb::LsbCodeReader;
use crate::config::LzwConfig;
use crate::dictionary::{LzwDictionary, MAX_CODES};
use oxigif_core::{GifError, Result};

/// Upper bound on the index buffer allocated before any code is read.
const INITIAL_INDEX_CAPACITY: usize = 1 << 16;

/// Why pixel production stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamStatus {
    /// Every requested pixel was produced.
    Complete,
    /// The sub-block chain ended before every pixel was produced.
    EndOfData,
    /// An end-of-information code arrived before every pixel was produced.
    EndOfInformation,
    /// The code stream was malformed; the error is an image anomaly.
    Anomaly(GifError),
}

impl StreamStatus {
    /// Whether every requested pixel was produced.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Color indices recovered from one image's code stream, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIndices {
    /// One index per produced pixel; never longer than requested.
    pub indices: Vec<u8>,
    /// Why production stopped.
    pub status: StreamStatus,
}

/// Outcome of handling a single code.
enum Step {
    Continue,
    EndOfInformation,
}

/// LZW decoder for GIF image data.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Code table.
    dict: LzwDictionary,
    /// Unwind stack, popped once per pixel.
    stack: Vec<u8>,
    /// Previous code, `None` right after start or a clear code.
    old_code: Option<u16>,
    /// First color index of the most recently unwound string.
    first: u8,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self {
            dict: LzwDictionary::new(config),
            stack: Vec::with_capacity(MAX_CODES),
            old_code: None,
            first: 0,
        }
    }

    /// Decode up to `pixel_count` color indices from `reader`.
    ///
    /// Reads past the end of the input buffer are returned as errors.
    /// Malformed codes stop production and are reported through
    /// [`StreamStatus::Anomaly`] together with the indices produced so far.
    pub fn decode(
        &mut self,
        reader: &mut LsbCodeReader<'_, '_>,
        pixel_count: usize,
    ) -> Result<DecodedIndices> {
        // Declared dimensions are untrusted; grow with the decoded data
        let mut indices = Vec::with_capacity(pixel_count.min(INITIAL_INDEX_CAPACITY));

        let status = loop {
            if indices.len() == pixel_count {
                break StreamStatus::Complete;
            }

            if let Some(index) = self.stack.pop() {
                indices.push(index);
                continue;
            }

            let Some(code) = reader.read_code(self.dict.code_size())? else {
                break StreamStatus::EndOfData;
            };

            match self.step(code) {
                Ok(Step::Continue) => {}
                Ok(Step::EndOfInformation) => break StreamStatus::EndOfInformation,
                Err(err) if err.is_image_anomaly() => {
                    tracing::debug!(
                        bit_position = reader.bits_read(),
                        produced = indices.len(),
                        "lzw stream aborted: {err}"
                    );
                    break StreamStatus::Anomaly(err);
                }
                Err(err) => return Err(err),
            }
        };

        self.stack.clear();
        Ok(DecodedIndices { indices, status })
    }

    /// Handle one code, pushing its string onto the unwind stack.
    fn step(&mut self, code: u16) -> Result<Step> {
        let available = self.dict.available();
        let clear = self.dict.clear_code();

        if code > available {
            return Err(GifError::corrupt_code(code, available));
        }
        if code == self.dict.eoi_code() {
            return Ok(Step::EndOfInformation);
        }
        if code == clear {
            self.dict.reset();
            self.old_code = None;
            return Ok(Step::Continue);
        }

        let Some(old_code) = self.old_code else {
            // First code after a reset must be a literal
            if code > clear {
                return Err(GifError::corrupt_code(code, available));
            }
            self.push(code as u8, code)?;
            self.old_code = Some(code);
            self.first = code as u8;
            return Ok(Step::Continue);
        };

        let in_code = code;
        let mut code = code;
        if code == available {
            self.push(self.first, in_code)?;
            code = old_code;
        }
        while code > clear {
            self.push(self.dict.suffix(code), in_code)?;
            code = self.dict.prefix(code);
        }
        self.first = self.dict.suffix(code);

        self.dict.add(old_code, self.first)?;
        self.push(self.first, in_code)?;
        self.old_code = Some(in_code);
        Ok(Step::Continue)
    }

    #[inline]
    fn push(&mut self, index: u8, code: u16) -> Result<()> {
        if self.stack.len() >= MAX_CODES {
            return Err(GifError::corrupt_code(code, self.dict.available()));
        }
        self.stack.push(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigif_core::ByteCursor;

    /// Pack `(code, width)` pairs LSB-first into a sub-block chain.
    fn pack(codes: &[(u16, u8)]) -> Vec<u8> {
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
        let mut out = Vec::new();
        for chunk in bytes.chunks(255) {
            out.push(chunk.len() as u8);
            out.extend_from_slice(chunk);
        }
        out.push(0);
        out
    }

    fn run(config: LzwConfig, codes: &[(u16, u8)], pixel_count: usize) -> DecodedIndices {
        let data = pack(codes);
        let mut cursor = ByteCursor::new(&data);
        let mut reader = LsbCodeReader::new(&mut cursor);
        LzwDecoder::new(config)
            .decode(&mut reader, pixel_count)
            .unwrap()
    }

    #[test]
    fn test_decode_literals_and_entries() {
        // 0, 1, 1, 0 using codes: clear, 0, 1, 1, 0 (4 bits after growth), eoi
        let result = run(
            LzwConfig::GIF_2BIT,
            &[(4, 3), (0, 3), (1, 3), (1, 3), (0, 4), (5, 4)],
            4,
        );
        assert_eq!(result.indices, vec![0, 1, 1, 0]);
        assert_eq!(result.status, StreamStatus::Complete);
    }

    #[test]
    fn test_decode_code_equal_to_available() {
        // 0, then code 6 before it is defined: yields "0 0"
        let result = run(LzwConfig::GIF_2BIT, &[(4, 3), (0, 3), (6, 3), (5, 3)], 3);
        assert_eq!(result.indices, vec![0, 0, 0]);
        assert!(result.status.is_complete());
    }

    #[test]
    fn test_clear_code_resets_table() {
        // Entry 6 is "0 1" before the clear and "1 0" after it. The clear
        // itself is read at 4 bits because the table grew to 8 entries.
        let result = run(
            LzwConfig::GIF_2BIT,
            &[
                (4, 3),
                (0, 3),
                (1, 3),
                (6, 3),
                (4, 4),
                (1, 3),
                (0, 3),
                (6, 3),
                (5, 4),
            ],
            8,
        );
        assert_eq!(result.indices, vec![0, 1, 0, 1, 1, 0, 1, 0]);
        assert!(result.status.is_complete());
    }

    #[test]
    fn test_early_end_of_information() {
        let result = run(LzwConfig::GIF_2BIT, &[(4, 3), (2, 3), (5, 3)], 4);
        assert_eq!(result.indices, vec![2]);
        assert_eq!(result.status, StreamStatus::EndOfInformation);
    }

    #[test]
    fn test_early_end_of_data() {
        let result = run(LzwConfig::GIF_2BIT, &[(4, 3), (3, 3)], 4);
        assert_eq!(result.indices, vec![3]);
        assert_eq!(result.status, StreamStatus::EndOfData);
    }

    #[test]
    fn test_code_beyond_available_is_corrupt() {
        let result = run(LzwConfig::GIF_2BIT, &[(4, 3), (1, 3), (7, 3)], 4);
        assert_eq!(result.indices, vec![1]);
        assert_eq!(
            result.status,
            StreamStatus::Anomaly(GifError::corrupt_code(7, 6))
        );
    }

    #[test]
    fn test_first_code_must_be_literal() {
        let result = run(LzwConfig::GIF_2BIT, &[(4, 3), (6, 3)], 4);
        assert!(result.indices.is_empty());
        assert_eq!(
            result.status,
            StreamStatus::Anomaly(GifError::corrupt_code(6, 6))
        );
    }

    #[test]
    fn test_empty_chain_does_not_reserve_declared_size() {
        let data = [0u8];
        let mut cursor = ByteCursor::new(&data);
        let mut reader = LsbCodeReader::new(&mut cursor);
        let result = LzwDecoder::new(LzwConfig::GIF_2BIT)
            .decode(&mut reader, 8000 * 8000)
            .unwrap();

        assert!(result.indices.is_empty());
        assert_eq!(result.status, StreamStatus::EndOfData);
        assert!(result.indices.capacity() <= INITIAL_INDEX_CAPACITY);
    }

    #[test]
    fn test_dictionary_overflow_without_clear() {
        // Literal 0 repeated: each code after the first adds one entry.
        // Widths follow the decoder: 3 bits until 8 entries, then 4, 5, ...
        let config = LzwConfig::GIF_2BIT;
        let mut codes = vec![(4u16, 3u8), (0, 3)];
        let mut available = 6u32;
        let mut width = 3u8;
        while available <= 4096 {
            codes.push((0, width));
            available += 1;
            if available & ((1 << width) - 1) == 0 && available < 4096 {
                width += 1;
            }
        }
        let result = run(config, &codes, 10_000);
        assert_eq!(
            result.status,
            StreamStatus::Anomaly(GifError::dictionary_overflow(4096))
        );
        assert_eq!(result.indices.len(), 1 + (4096 - 6));
    }
}
