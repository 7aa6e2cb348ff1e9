//! Hexagram casting from an entropy buffer.
//!
//! Every hexagram consumes exactly six bytes, bottom line first. Multi-hexagram
//! spreads read consecutive, non-overlapping six-byte windows.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};
use crate::sampler::EntropyCursor;
use crate::sizing::BYTES_PER_HEXAGRAM;

use super::hexagrams::{Hexagram, hexagram_by_lines, hexagram_by_number, line_pattern};
use super::lines::{CastLine, LineType, line_from_byte};

/// Upper bound on hexagrams per request.
pub const MAX_HEXAGRAMS: usize = 64;

/// Six cast lines and the hexagrams they name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramCast {
    /// Bottom line first.
    pub lines: [CastLine; 6],
    pub hexagram_number: u8,
    /// Present only when at least one line is changing.
    pub transformed_hexagram_number: Option<u8>,
    pub has_changing_lines: bool,
}

impl HexagramCast {
    pub fn hexagram(&self) -> Option<&'static Hexagram> {
        hexagram_by_number(self.hexagram_number)
    }

    pub fn transformed_hexagram(&self) -> Option<&'static Hexagram> {
        self.transformed_hexagram_number.and_then(hexagram_by_number)
    }

    /// 1-based positions of the changing lines, bottom first.
    pub fn changing_line_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// One cast plus where the next one starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCast {
    pub cast: HexagramCast,
    pub next_index: usize,
}

/// All casts of a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramSelection {
    pub casts: Vec<HexagramCast>,
    pub bytes_used: usize,
}

fn lookup(lines: [LineType; 6]) -> OracleResult<&'static Hexagram> {
    hexagram_by_lines(lines).ok_or(OracleError::MissingHexagram(line_pattern(&lines)))
}

/// Cast one hexagram from the six bytes at `start_index`.
pub fn cast_hexagram(entropy: &[u8], start_index: usize) -> OracleResult<SingleCast> {
    let mut cursor = EntropyCursor::at(entropy, start_index);
    if cursor.remaining() < BYTES_PER_HEXAGRAM {
        return Err(OracleError::InsufficientEntropy {
            consumed: start_index.min(entropy.len()),
            available: entropy.len(),
        });
    }

    let mut lines = [CastLine::from(line_from_byte(0)); 6];
    for line in &mut lines {
        *line = CastLine::from(line_from_byte(cursor.next_byte()?));
    }

    let primary = lookup(lines.map(|l| l.line_type()))?;
    let has_changing_lines = lines.iter().any(|l| l.is_changing);
    let transformed_hexagram_number = if has_changing_lines {
        Some(lookup(lines.map(|l| l.transformed_type()))?.number)
    } else {
        None
    };

    Ok(SingleCast {
        cast: HexagramCast {
            lines,
            hexagram_number: primary.number,
            transformed_hexagram_number,
            has_changing_lines,
        },
        next_index: cursor.position(),
    })
}

/// Cast `hexagram_count` hexagrams from consecutive six-byte windows.
pub fn cast_hexagrams(entropy: &[u8], hexagram_count: usize) -> OracleResult<HexagramSelection> {
    if hexagram_count == 0 || hexagram_count > MAX_HEXAGRAMS {
        return Err(OracleError::InvalidCount {
            what: "hexagram",
            count: hexagram_count,
            max: MAX_HEXAGRAMS,
        });
    }

    let mut casts = Vec::with_capacity(hexagram_count);
    let mut index = 0;
    for _ in 0..hexagram_count {
        let single = cast_hexagram(entropy, index)?;
        casts.push(single.cast);
        index = single.next_index;
    }

    log::debug!("cast {hexagram_count} hexagrams using {index} entropy bytes");
    Ok(HexagramSelection {
        casts,
        bytes_used: index,
    })
}
