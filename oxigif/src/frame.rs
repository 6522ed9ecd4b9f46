//! Decoded frames and the ordered sequence returned to callers.

use crate::extension::DisposalMethod;
use oxigif_core::{GifError, Result};

/// One decoded image block as row-major RGBA in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Image width.
    pub width: u16,
    /// Image height.
    pub height: u16,
    /// Left offset on the logical screen.
    pub left: u16,
    /// Top offset on the logical screen.
    pub top: u16,
    /// Delay in centiseconds, 0 without a graphic control block.
    pub delay: u16,
    /// Disposal method from the graphic control block.
    pub disposal: DisposalMethod,
    /// Transparent index that applied to this image.
    pub transparent_index: Option<u8>,
    /// Rows were stored interlaced.
    pub interlaced: bool,
    /// Every pixel was produced by the code stream.
    pub complete: bool,
    rgba: Vec<u8>,
}

impl Frame {
    /// Create a frame from its RGBA buffer.
    ///
    /// # Panics
    ///
    /// Debug builds assert that `rgba` holds `width * height * 4` bytes.
    pub fn new(width: u16, height: u16, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            left: 0,
            top: 0,
            delay: 0,
            disposal: DisposalMethod::None,
            transparent_index: None,
            interlaced: false,
            complete: true,
            rgba,
        }
    }

    /// RGBA bytes, `width * height * 4` long.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Take the RGBA buffer.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Non-empty, ordered list of frames in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Number of frames (at least one).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// First frame.
    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    /// Frame at `index`.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Iterate in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Whether exactly one frame was decoded.
    pub fn is_single(&self) -> bool {
        self.frames.len() == 1
    }

    /// The only frame, or the whole sequence back when there are several.
    pub fn into_single(mut self) -> std::result::Result<Frame, FrameSequence> {
        if self.frames.len() == 1 {
            if let Some(frame) = self.frames.pop() {
                return Ok(frame);
            }
        }
        Err(self)
    }

    /// Take the frames.
    pub fn into_vec(self) -> Vec<Frame> {
        self.frames
    }
}

impl IntoIterator for FrameSequence {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Accumulates frames as image blocks are decoded.
#[derive(Debug, Default)]
pub struct FrameSequenceBuilder {
    frames: Vec<Frame>,
}

impl FrameSequenceBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Number of frames so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been added.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Finish the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GifError::EmptyResult`] if no frame was added.
    pub fn finish(self) -> Result<FrameSequence> {
        if self.frames.is_empty() {
            return Err(GifError::EmptyResult);
        }
        Ok(FrameSequence {
            frames: self.frames,
        })
    }
}
