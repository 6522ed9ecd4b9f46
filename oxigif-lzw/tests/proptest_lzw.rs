//! Property-based tests for the GIF LZW decoder.
//!
//! Uses proptest with weezl as the reference encoder.

use oxigif_core::ByteCursor;
use oxigif_lzw::{StreamStatus, decode_image_data};
use proptest::prelude::*;
use weezl::BitOrder;
use weezl::encode::Encoder as WeezlEncoder;

fn encode_gif_data(min_code_size: u8, indices: &[u8]) -> Vec<u8> {
    let compressed = WeezlEncoder::new(BitOrder::Lsb, min_code_size)
        .encode(indices)
        .expect("weezl compression failed");

    let mut out = vec![min_code_size];
    for chunk in compressed.chunks(255) {
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    out.push(0);
    out
}

proptest! {
    /// Any index stream weezl can compress decodes back to itself.
    #[test]
    fn decodes_reference_streams(
        min_code_size in 2u8..=8,
        raw in prop::collection::vec(any::<u8>(), 1..3000),
    ) {
        let mask = ((1u16 << min_code_size) - 1) as u8;
        let original: Vec<u8> = raw.into_iter().map(|b| b & mask).collect();
        let data = encode_gif_data(min_code_size, &original);

        let mut cursor = ByteCursor::new(&data);
        let decoded = decode_image_data(&mut cursor, original.len()).unwrap();

        prop_assert_eq!(decoded.status, StreamStatus::Complete);
        prop_assert_eq!(decoded.indices, original);
        prop_assert!(cursor.is_at_end());
    }

    /// Arbitrary bytes never panic and never produce more than requested.
    #[test]
    fn arbitrary_bytes_are_bounded(
        data in prop::collection::vec(any::<u8>(), 0..600),
        pixel_count in 0usize..2000,
    ) {
        let mut cursor = ByteCursor::new(&data);
        if let Ok(decoded) = decode_image_data(&mut cursor, pixel_count) {
            prop_assert!(decoded.indices.len() <= pixel_count);
            if decoded.status == StreamStatus::Complete {
                prop_assert_eq!(decoded.indices.len(), pixel_count);
            }
        }
    }
}
