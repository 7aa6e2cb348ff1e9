//! Unbiased index sampling over an entropy buffer.
//!
//! `byte % range` is biased whenever `range` does not divide 256. Bytes in the
//! remainder zone `[floor(256 / range) * range, 256)` are rejected instead, so
//! every accepted byte maps to each index in `[0, range)` equally often.

use crate::error::{OracleError, OracleResult};

/// Map one byte to a uniform index in `[0, range)`, or `None` to reject it.
///
/// `range` must be in `1..=256`.
pub fn sample_unbiased(byte: u8, range: usize) -> Option<usize> {
    debug_assert!((1..=256).contains(&range), "range {range} out of 1..=256");
    let limit = (256 / range) * range;
    let byte = byte as usize;
    if byte >= limit {
        return None;
    }
    Some(byte % range)
}

/// Single left-to-right read cursor over an entropy buffer.
///
/// Each byte is handed out at most once. The optional cap limits how many
/// bytes a single selection may consume, which bounds the rejection loop even
/// on a huge or pathological buffer.
#[derive(Debug, Clone)]
pub struct EntropyCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    limit: usize,
}

impl<'a> EntropyCursor<'a> {
    /// Cursor over the whole buffer.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            limit: bytes.len(),
        }
    }

    /// Cursor that refuses to read more than `cap` bytes.
    pub fn with_cap(bytes: &'a [u8], cap: usize) -> Self {
        Self {
            bytes,
            pos: 0,
            limit: bytes.len().min(cap),
        }
    }

    /// Cursor starting at an absolute offset into the buffer.
    pub fn at(bytes: &'a [u8], start: usize) -> Self {
        Self {
            bytes,
            pos: start.min(bytes.len()),
            limit: bytes.len(),
        }
    }

    /// Bytes consumed so far (absolute position in the buffer).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still readable before the cursor runs dry.
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Consume the next byte.
    pub fn next_byte(&mut self) -> OracleResult<u8> {
        if self.pos >= self.limit {
            return Err(OracleError::InsufficientEntropy {
                consumed: self.pos,
                available: self.limit,
            });
        }
        let byte = self.bytes[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Consume bytes until one maps to an index in `[0, range)`.
    ///
    /// Rejected bytes are consumed too.
    pub fn next_index(&mut self, range: usize) -> OracleResult<usize> {
        loop {
            let byte = self.next_byte()?;
            if let Some(index) = sample_unbiased(byte, range) {
                return Ok(index);
            }
        }
    }
}
