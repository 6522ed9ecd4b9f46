//! Block stream parser.
//!
//! Walks the bytes after the header, dispatching on each block tag:
//!
//! ```text
//! '!' label sub-blocks...  extension (graphic control tracked, others skipped)
//! ',' descriptor [table] lzw  image block, one frame
//! ';'                      trailer, stop
//! ```
//!
//! Any other byte between blocks is ignored. Running out of bytes between
//! blocks ends the stream like a trailer would.

use crate::descriptor::ImageDescriptor;
use crate::extension::{self, GRAPHIC_CONTROL_LABEL, GraphicControl};
use crate::frame::{Frame, FrameSequence, FrameSequenceBuilder};
use crate::header::{self, GifVersion, ScreenDescriptor};
use crate::options::{AnomalyPolicy, DecodeOptions};
use crate::palette::{self, ColorTable};
use crate::raster;
use oxigif_core::{ByteCursor, GifError, Result};
use oxigif_lzw::{StreamStatus, decode_image_data};

/// Extension introducer.
pub const EXTENSION_INTRODUCER: u8 = b'!';

/// Image separator.
pub const IMAGE_SEPARATOR: u8 = b',';

/// Trailer.
pub const TRAILER: u8 = b';';

/// Everything recovered from a GIF buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedGif {
    /// Format revision.
    pub version: GifVersion,
    /// Logical screen descriptor.
    pub screen: ScreenDescriptor,
    /// Global color table, if present.
    pub global_table: Option<ColorTable>,
    /// Frames in encounter order.
    pub frames: FrameSequence,
}

/// GIF decoder.
#[derive(Debug, Clone, Default)]
pub struct GifDecoder {
    options: DecodeOptions,
}

impl GifDecoder {
    /// Create a decoder with the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a complete GIF buffer.
    ///
    /// # Errors
    ///
    /// - [`GifError::InvalidHeader`] if the signature is missing
    /// - [`GifError::TruncatedStream`] if a block runs past the buffer end
    /// - [`GifError::FrameTooLarge`] if an image exceeds the pixel limit
    /// - [`GifError::PixelBudgetExceeded`] if the kept frames together
    ///   exceed the total pixel limit
    /// - [`GifError::EmptyResult`] if no image block was decoded
    /// - a code stream anomaly under [`AnomalyPolicy::Abort`]
    pub fn decode(&self, data: &[u8]) -> Result<DecodedGif> {
        if !header::has_valid_header(data) {
            return Err(GifError::invalid_header(data));
        }

        let mut cursor = ByteCursor::new(data);
        let (version, screen) = header::read_header(&mut cursor)?;
        let global_table = palette::read_global_table(&mut cursor, &screen)?;
        tracing::debug!(
            %version,
            width = screen.width,
            height = screen.height,
            global_table = screen.global_table,
            "gif header"
        );

        let mut frames = FrameSequenceBuilder::new();
        let mut pending: Option<GraphicControl> = None;
        let mut total_pixels = 0usize;

        while !cursor.is_at_end() {
            let offset = cursor.position();
            match cursor.read_u8()? {
                TRAILER => {
                    tracing::trace!(offset, "trailer");
                    break;
                }
                EXTENSION_INTRODUCER => {
                    let label = cursor.read_u8()?;
                    if label == GRAPHIC_CONTROL_LABEL {
                        // An empty block still replaces what was pending
                        pending = extension::read_graphic_control(&mut cursor)?;
                        tracing::trace!(control = ?pending, offset, "graphic control");
                    } else {
                        extension::skip_extension(&mut cursor, label)?;
                    }
                }
                IMAGE_SEPARATOR => {
                    let control = pending.take().unwrap_or_default();
                    if let Some(frame) = self.decode_image(
                        &mut cursor,
                        global_table.as_ref(),
                        control,
                        total_pixels,
                    )? {
                        total_pixels += frame.pixel_count();
                        frames.push(frame);
                    }
                }
                tag => tracing::trace!(tag, offset, "ignoring stray byte between blocks"),
            }
        }

        let frames = frames.finish()?;
        tracing::debug!(frames = frames.len(), "gif decoded");
        Ok(DecodedGif {
            version,
            screen,
            global_table,
            frames,
        })
    }

    /// Decode one image block after its separator.
    ///
    /// `kept_pixels` is the pixel count of the frames kept so far.
    /// Returns `None` when the frame is dropped under
    /// [`AnomalyPolicy::DiscardFrame`].
    fn decode_image(
        &self,
        cursor: &mut ByteCursor<'_>,
        global: Option<&ColorTable>,
        control: GraphicControl,
        kept_pixels: usize,
    ) -> Result<Option<Frame>> {
        let offset = cursor.position();
        let descriptor = ImageDescriptor::read(cursor)?;
        let table = palette::resolve_table(cursor, &descriptor, global)?;

        let pixel_count = descriptor.pixel_count();
        if pixel_count > self.options.max_frame_pixels {
            return Err(GifError::frame_too_large(
                descriptor.width,
                descriptor.height,
                self.options.max_frame_pixels,
            ));
        }
        let total = kept_pixels.saturating_add(pixel_count);
        if total > self.options.max_total_pixels {
            return Err(GifError::pixel_budget_exceeded(
                total,
                self.options.max_total_pixels,
            ));
        }

        let decoded = decode_image_data(cursor, pixel_count)?;
        let complete = match decoded.status {
            StreamStatus::Complete => true,
            status @ (StreamStatus::EndOfData | StreamStatus::EndOfInformation) => {
                tracing::debug!(
                    offset,
                    produced = decoded.indices.len(),
                    expected = pixel_count,
                    ?status,
                    "image data ended early"
                );
                false
            }
            StreamStatus::Anomaly(err) => match self.options.anomalies {
                AnomalyPolicy::Abort => return Err(err),
                AnomalyPolicy::DiscardFrame => {
                    tracing::warn!(offset, "discarding frame: {err}");
                    return Ok(None);
                }
                AnomalyPolicy::KeepPartial => {
                    tracing::warn!(
                        offset,
                        produced = decoded.indices.len(),
                        expected = pixel_count,
                        "keeping partial frame: {err}"
                    );
                    false
                }
            },
        };

        let rgba = raster::rasterize(
            &decoded.indices,
            descriptor.width as usize,
            descriptor.height as usize,
            descriptor.interlaced,
            table.as_deref(),
            control.transparent_index,
            self.options.transparency,
        );

        tracing::debug!(
            offset,
            width = descriptor.width,
            height = descriptor.height,
            interlaced = descriptor.interlaced,
            local_table = descriptor.local_table,
            complete,
            "frame decoded"
        );

        let mut frame = Frame::new(descriptor.width, descriptor.height, rgba);
        frame.left = descriptor.left;
        frame.top = descriptor.top;
        frame.delay = control.delay;
        frame.disposal = control.disposal;
        frame.transparent_index = control.transparent_index;
        frame.interlaced = descriptor.interlaced;
        frame.complete = complete;
        Ok(Some(frame))
    }
}
