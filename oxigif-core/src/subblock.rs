//! Length-prefixed sub-block chains.
//!
//! Extension payloads and LZW image data are split into sub-blocks of at
//! most 255 bytes, each preceded by its length. A zero-length sub-block
//! ends the chain.
//!
//! ```text
//! ┌─────┬──────────────┬─────┬──────────────┬─────┐
//! │ len │ len bytes... │ len │ len bytes... │  0  │
//! └─────┴──────────────┴─────┴──────────────┴─────┘
//! ```

use crate::cursor::ByteCursor;
use crate::error::Result;

/// Reader over a sub-block chain starting at the cursor's position.
///
/// Whole sub-blocks are pulled from the cursor as soon as their length
/// byte is read, so a length that claims more bytes than the buffer holds
/// fails immediately with a truncation error.
#[derive(Debug)]
pub struct SubBlockReader<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    current: &'a [u8],
    terminated: bool,
}

impl<'c, 'a> SubBlockReader<'c, 'a> {
    /// Start reading the chain at the cursor's current position.
    pub fn new(cursor: &'c mut ByteCursor<'a>) -> Self {
        Self {
            cursor,
            current: &[],
            terminated: false,
        }
    }

    /// Whether the zero-length terminator has been consumed.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Read the next whole sub-block, or `None` once the chain has ended.
    pub fn next_block(&mut self) -> Result<Option<&'a [u8]>> {
        if self.terminated {
            return Ok(None);
        }
        let len = self.cursor.read_u8()? as usize;
        if len == 0 {
            self.terminated = true;
            return Ok(None);
        }
        self.cursor.read_bytes(len).map(Some)
    }

    /// Read the next data byte, crossing sub-block boundaries.
    ///
    /// Returns `None` once the zero-length terminator is reached.
    #[inline]
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        while self.current.is_empty() {
            match self.next_block()? {
                Some(block) => self.current = block,
                None => return Ok(None),
            }
        }
        let byte = self.current[0];
        self.current = &self.current[1..];
        Ok(Some(byte))
    }

    /// Discard the rest of the chain, leaving the cursor just past the
    /// terminator.
    pub fn finish(mut self) -> Result<()> {
        self.current = &[];
        while self.next_block()?.is_some() {}
        Ok(())
    }
}

/// Skip an entire sub-block chain at the cursor's position.
pub fn skip_sub_blocks(cursor: &mut ByteCursor<'_>) -> Result<()> {
    SubBlockReader::new(cursor).finish()
}
