//! How many entropy bytes to request before a draw.
//!
//! These are estimates. Rejection sampling has no hard upper bound, so a tarot
//! draw can still come back with [`InsufficientEntropy`](crate::OracleError::InsufficientEntropy).

/// Bytes requested per tarot card: selection plus rejection slack plus one
/// reversal byte.
pub const TAROT_BYTES_PER_CARD: usize = 3;

/// Bytes requested per hexagram: six lines plus two spare.
pub const ICHING_BYTES_PER_HEXAGRAM: usize = 8;

/// Bytes consumed per hexagram. The line generator never rejects.
pub const BYTES_PER_HEXAGRAM: usize = 6;

/// Entropy to request for a tarot draw of `card_count` cards.
pub fn tarot_bytes_needed(card_count: usize) -> usize {
    card_count * TAROT_BYTES_PER_CARD
}

/// Entropy to request for `hexagram_count` hexagram casts.
pub fn iching_bytes_needed(hexagram_count: usize) -> usize {
    hexagram_count * ICHING_BYTES_PER_HEXAGRAM
}
