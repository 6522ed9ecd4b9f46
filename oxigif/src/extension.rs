//! Extension blocks introduced by `!`.
//!
//! Only the graphic control extension is interpreted. Every other label is
//! skipped as an opaque sub-block chain.

use oxigif_core::{ByteCursor, Result, SubBlockReader, skip_sub_blocks};

/// Graphic control extension label.
pub const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;
/// Comment extension label.
pub const COMMENT_LABEL: u8 = 0xFE;
/// Application extension label.
pub const APPLICATION_LABEL: u8 = 0xFF;
/// Plain text extension label.
pub const PLAIN_TEXT_LABEL: u8 = 0x01;

/// Size of the graphic control payload.
const GRAPHIC_CONTROL_SIZE: usize = 4;

/// GIF frame disposal method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisposalMethod {
    /// No disposal specified.
    #[default]
    None,
    /// Leave the frame in place.
    Keep,
    /// Restore to background color.
    RestoreBackground,
    /// Restore to previous frame.
    RestorePrevious,
}

impl DisposalMethod {
    /// Parse disposal method from the packed flags byte.
    pub fn from_flags(flags: u8) -> Self {
        match (flags >> 2) & 0x07 {
            1 => Self::Keep,
            2 => Self::RestoreBackground,
            3 => Self::RestorePrevious,
            _ => Self::None,
        }
    }

    /// Get the method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Keep => "keep",
            Self::RestoreBackground => "restore-background",
            Self::RestorePrevious => "restore-previous",
        }
    }
}

/// Graphic control state pending for the next image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphicControl {
    /// Disposal method.
    pub disposal: DisposalMethod,
    /// Wait for user input before continuing.
    pub user_input: bool,
    /// Delay in centiseconds.
    pub delay: u16,
    /// Transparent color index, when the transparency flag is set.
    pub transparent_index: Option<u8>,
}

impl GraphicControl {
    /// Parse the 4-byte payload: flags, delay (LE), transparent index.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let &[flags, delay_lo, delay_hi, index] = payload.get(..GRAPHIC_CONTROL_SIZE)? else {
            return None;
        };
        Some(Self {
            disposal: DisposalMethod::from_flags(flags),
            user_input: flags & 0x02 != 0,
            delay: u16::from_le_bytes([delay_lo, delay_hi]),
            transparent_index: (flags & 0x01 != 0).then_some(index),
        })
    }
}

/// Read a graphic control extension body (after its label).
///
/// The payload is taken from the first sub-block long enough to hold it;
/// the rest of the chain is skipped. Returns `None` when no sub-block
/// carries a payload.
pub fn read_graphic_control(cursor: &mut ByteCursor<'_>) -> Result<Option<GraphicControl>> {
    let mut blocks = SubBlockReader::new(cursor);
    let mut control = None;
    while let Some(block) = blocks.next_block()? {
        if control.is_none() {
            control = GraphicControl::from_payload(block);
        }
    }
    Ok(control)
}

/// Skip an extension body with any label.
pub fn skip_extension(cursor: &mut ByteCursor<'_>, label: u8) -> Result<()> {
    tracing::trace!(
        label,
        name = label_name(label),
        offset = cursor.position(),
        "skipping extension"
    );
    skip_sub_blocks(cursor)
}

/// Human-readable extension name.
pub fn label_name(label: u8) -> &'static str {
    match label {
        GRAPHIC_CONTROL_LABEL => "graphic-control",
        COMMENT_LABEL => "comment",
        APPLICATION_LABEL => "application",
        PLAIN_TEXT_LABEL => "plain-text",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposal_method() {
        assert_eq!(DisposalMethod::from_flags(0x00), DisposalMethod::None);
        assert_eq!(DisposalMethod::from_flags(0x04), DisposalMethod::Keep);
        assert_eq!(DisposalMethod::from_flags(0x08), DisposalMethod::RestoreBackground);
        assert_eq!(DisposalMethod::from_flags(0x0C), DisposalMethod::RestorePrevious);
        assert_eq!(DisposalMethod::from_flags(0x1C), DisposalMethod::None);
    }

    #[test]
    fn test_read_graphic_control() {
        let data = [0x04, 0x09, 0x0A, 0x00, 0x07, 0x00, 0x2C];
        let mut cursor = ByteCursor::new(&data);
        let control = read_graphic_control(&mut cursor).unwrap().unwrap();

        assert_eq!(control.disposal, DisposalMethod::RestoreBackground);
        assert!(!control.user_input);
        assert_eq!(control.delay, 10);
        assert_eq!(control.transparent_index, Some(7));
        assert_eq!(cursor.read_u8().unwrap(), 0x2C);
    }

    #[test]
    fn test_transparency_flag_clear() {
        let data = [0x04, 0x00, 0x00, 0x00, 0x07, 0x00];
        let mut cursor = ByteCursor::new(&data);
        let control = read_graphic_control(&mut cursor).unwrap().unwrap();
        assert_eq!(control.transparent_index, None);
    }

    #[test]
    fn test_payload_in_later_sub_block() {
        let data = [0x02, 0xAA, 0xBB, 0x04, 0x01, 0x00, 0x00, 0x03, 0x00];
        let mut cursor = ByteCursor::new(&data);
        let control = read_graphic_control(&mut cursor).unwrap().unwrap();
        assert_eq!(control.transparent_index, Some(3));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_empty_graphic_control() {
        let data = [0x00, 0x3B];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(read_graphic_control(&mut cursor).unwrap(), None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_skip_application_extension() {
        let mut data = vec![0x0B];
        data.extend_from_slice(b"NETSCAPE2.0");
        data.extend_from_slice(&[0x03, 0x01, 0x00, 0x00, 0x00, 0x2C]);
        let mut cursor = ByteCursor::new(&data);
        skip_extension(&mut cursor, APPLICATION_LABEL).unwrap();
        assert_eq!(cursor.read_u8().unwrap(), 0x2C);
    }
}
