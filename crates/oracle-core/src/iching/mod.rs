//! I Ching casting: three-coin lines, the hexagram table, and hexagram casts.

pub mod cast;
pub mod hexagrams;
pub mod lines;

pub use cast::{
    HexagramCast, HexagramSelection, MAX_HEXAGRAMS, SingleCast, cast_hexagram, cast_hexagrams,
};
pub use hexagrams::{
    HEXAGRAMS, Hexagram, TRIGRAMS, Trigram, hexagram_by_lines, hexagram_by_number,
    transformed_hexagram, trigram_from_lines,
};
pub use lines::{CastLine, LineType, LineValue, line_from_byte};
