//! Partial Fisher–Yates draw of unique cards.
//!
//! Step `i` picks an offset in `[0, 78 - i)` with the unbiased sampler, swaps
//! `deck[i]` with `deck[i + offset]` and takes `deck[i]`. Uniqueness holds by
//! construction. One more byte per card decides reversal.

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::sampler::EntropyCursor;
use crate::sizing::TAROT_BYTES_PER_CARD;

use super::deck::{CARDS, Card, DECK_SIZE};

/// Bytes at or above this value draw the card reversed (a 50/50 split).
pub const REVERSAL_THRESHOLD: u8 = 128;

/// Multiple of the minimum byte count a draw may consume before giving up.
pub const REJECTION_BUDGET_FACTOR: usize = 10;

/// Largest accepted `tarot_bytes_per_card`.
pub const MAX_TAROT_BYTES_PER_CARD: usize = 64;

/// Largest accepted `rejection_budget_factor`.
pub const MAX_REJECTION_BUDGET_FACTOR: usize = 1000;

/// Tunables for tarot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionParams {
    /// Reversal byte threshold.
    pub reversal_threshold: u8,
    /// Bytes requested per card (see [`crate::sizing`]).
    pub tarot_bytes_per_card: usize,
    /// Cap on consumption as a multiple of the two-bytes-per-card minimum.
    pub rejection_budget_factor: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            reversal_threshold: REVERSAL_THRESHOLD,
            tarot_bytes_per_card: TAROT_BYTES_PER_CARD,
            rejection_budget_factor: REJECTION_BUDGET_FACTOR,
        }
    }
}

impl SelectionParams {
    /// Entropy to request for `card_count` cards under these parameters.
    pub fn bytes_needed(&self, card_count: usize) -> usize {
        card_count.saturating_mul(self.tarot_bytes_per_card)
    }

    /// Most bytes a draw of `card_count` cards may consume.
    pub fn consumption_cap(&self, card_count: usize) -> usize {
        self.rejection_budget_factor
            .max(1)
            .saturating_mul(2)
            .saturating_mul(card_count)
    }
}

/// Result of a tarot draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSelection {
    /// Deck indices in spread-position order, pairwise distinct.
    pub indices: Vec<usize>,
    /// Reversal flag for each position.
    pub reversals: Vec<bool>,
    /// Bytes consumed, rejected ones included.
    pub bytes_used: usize,
}

/// A card placed in a spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card: &'static Card,
    /// Zero-based spread position.
    pub position: usize,
    pub reversed: bool,
}

impl DrawnCard {
    /// Card name with a `(Reversed)` suffix when reversed.
    pub fn display_name(&self) -> String {
        self.card.display_name(self.reversed)
    }
}

impl CardSelection {
    /// Number of cards drawn.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve indices against the deck.
    pub fn drawn_cards(&self) -> Vec<DrawnCard> {
        self.indices
            .iter()
            .zip(&self.reversals)
            .enumerate()
            .map(|(position, (&index, &reversed))| DrawnCard {
                card: &CARDS[index],
                position,
                reversed,
            })
            .collect()
    }
}

/// Draw `card_count` unique cards with default parameters.
pub fn select_cards(entropy: &[u8], card_count: usize) -> OracleResult<CardSelection> {
    select_cards_with(entropy, card_count, &SelectionParams::default())
}

/// Draw `card_count` unique cards.
///
/// Fails with [`OracleError::InvalidCount`] unless `card_count` is in
/// `1..=78`, and with [`OracleError::InsufficientEntropy`] if the buffer (or
/// the consumption cap) runs out first.
pub fn select_cards_with(
    entropy: &[u8],
    card_count: usize,
    params: &SelectionParams,
) -> OracleResult<CardSelection> {
    if card_count == 0 || card_count > DECK_SIZE {
        return Err(OracleError::InvalidCount {
            what: "card",
            count: card_count,
            max: DECK_SIZE,
        });
    }

    let mut deck: [usize; DECK_SIZE] = std::array::from_fn(|i| i);
    let mut cursor = EntropyCursor::with_cap(entropy, params.consumption_cap(card_count));
    let mut indices = Vec::with_capacity(card_count);
    let mut reversals = Vec::with_capacity(card_count);

    for i in 0..card_count {
        let offset = cursor.next_index(DECK_SIZE - i)?;
        deck.swap(i, i + offset);
        indices.push(deck[i]);

        let reversal = cursor.next_byte()?;
        reversals.push(reversal >= params.reversal_threshold);
    }

    log::debug!(
        "drew {card_count} cards using {} of {} entropy bytes",
        cursor.position(),
        entropy.len()
    );

    Ok(CardSelection {
        indices,
        reversals,
        bytes_used: cursor.position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_buffer(rng: &mut StdRng, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        rng.fill(&mut buf[..]);
        buf
    }

    // -----------------------------------------------------------------------
    // Basic behaviour
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_card_no_rejection() {
        // 5 % 78 = 5, 200 >= 128 -> reversed
        let sel = select_cards(&[5, 200], 1).unwrap();
        assert_eq!(sel.indices, vec![5]);
        assert_eq!(sel.reversals, vec![true]);
        assert_eq!(sel.bytes_used, 2);
    }

    #[test]
    fn test_swap_moves_taken_card_out_of_range() {
        // Step 0: offset 0 takes card 0. Step 1: range 77, offset 0 -> deck[1] = 1.
        let sel = select_cards(&[0, 0, 0, 127], 2).unwrap();
        assert_eq!(sel.indices, vec![0, 1]);
        assert_eq!(sel.reversals, vec![false, false]);

        // Step 0: offset 3 swaps 0 and 3. Step 1: offset 2 -> deck[3] which now holds 0.
        let sel = select_cards(&[3, 0, 2, 0], 2).unwrap();
        assert_eq!(sel.indices, vec![3, 0]);
    }

    #[test]
    fn test_rejected_bytes_are_counted() {
        // 240 and 250 are rejected for range 78.
        let sel = select_cards(&[240, 250, 10, 128], 1).unwrap();
        assert_eq!(sel.indices, vec![10]);
        assert_eq!(sel.reversals, vec![true]);
        assert_eq!(sel.bytes_used, 4);
    }

    #[test]
    fn test_reversal_threshold_is_configurable() {
        let params = SelectionParams {
            reversal_threshold: 200,
            ..SelectionParams::default()
        };
        let sel = select_cards_with(&[1, 150], 1, &params).unwrap();
        assert_eq!(sel.reversals, vec![false]);
        let sel = select_cards_with(&[1, 200], 1, &params).unwrap();
        assert_eq!(sel.reversals, vec![true]);
    }

    #[test]
    fn test_drawn_cards_resolve_names() {
        let sel = select_cards(&[0, 255, 0, 0], 2).unwrap();
        let drawn = sel.drawn_cards();
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].card.name, "The Fool");
        assert_eq!(drawn[0].display_name(), "The Fool (Reversed)");
        assert_eq!(drawn[1].position, 1);
        assert_eq!(drawn[1].display_name(), "The Magician");
    }

    // -----------------------------------------------------------------------
    // Failure modes
    // -----------------------------------------------------------------------

    #[test]
    fn test_empty_buffer_is_insufficient() {
        for count in [1, 3, 10, 78] {
            assert!(matches!(
                select_cards(&[], count),
                Err(OracleError::InsufficientEntropy { .. })
            ));
        }
    }

    #[test]
    fn test_missing_reversal_byte_is_insufficient() {
        assert!(matches!(
            select_cards(&[5], 1),
            Err(OracleError::InsufficientEntropy {
                consumed: 1,
                available: 1
            })
        ));
    }

    #[test]
    fn test_all_rejected_is_insufficient() {
        assert!(matches!(
            select_cards(&[255; 3], 1),
            Err(OracleError::InsufficientEntropy { .. })
        ));
    }

    #[test]
    fn test_invalid_counts() {
        assert!(matches!(
            select_cards(&[0; 16], 0),
            Err(OracleError::InvalidCount { count: 0, .. })
        ));
        assert!(matches!(
            select_cards(&[0; 1024], 79),
            Err(OracleError::InvalidCount { count: 79, max: 78, .. })
        ));
    }

    #[test]
    fn test_consumption_cap_bounds_rejection_loop() {
        // One card may consume at most 10 * 2 = 20 bytes, however long the buffer.
        let mut buf = vec![255u8; 1000];
        buf.extend_from_slice(&[1, 1]);
        assert!(matches!(
            select_cards(&buf, 1),
            Err(OracleError::InsufficientEntropy {
                consumed: 20,
                available: 20
            })
        ));
    }

    #[test]
    fn test_oversized_params_saturate() {
        let params = SelectionParams {
            tarot_bytes_per_card: usize::MAX,
            rejection_budget_factor: usize::MAX,
            ..SelectionParams::default()
        };
        assert_eq!(params.bytes_needed(3), usize::MAX);
        assert_eq!(params.consumption_cap(1), usize::MAX);
        let sel = select_cards_with(&[1; 64], 1, &params).unwrap();
        assert_eq!(sel.indices, vec![1]);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn test_uniqueness_for_every_card_count() {
        let mut rng = StdRng::seed_from_u64(0x7a407);
        for count in 1..=DECK_SIZE {
            for _ in 0..20 {
                let buf = random_buffer(&mut rng, count * 4 + 64);
                let sel = select_cards(&buf, count).unwrap();
                assert_eq!(sel.len(), count);
                assert_eq!(sel.reversals.len(), count);
                let mut seen = [false; DECK_SIZE];
                for &i in &sel.indices {
                    assert!(i < DECK_SIZE);
                    assert!(!seen[i], "duplicate card {i} in draw of {count}");
                    seen[i] = true;
                }
                assert!(sel.bytes_used >= 2 * count);
                assert!(sel.bytes_used <= buf.len());
            }
        }
    }

    #[test]
    fn test_full_deck_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(78);
        let buf = random_buffer(&mut rng, 600);
        let sel = select_cards(&buf, DECK_SIZE).unwrap();
        let mut sorted = sel.indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..DECK_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn test_deterministic_for_same_buffer() {
        let mut rng = StdRng::seed_from_u64(42);
        let buf = random_buffer(&mut rng, 64);
        let a = select_cards(&buf, 10).unwrap();
        let b = select_cards(&buf, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_stability() {
        // Drawing fewer cards from the same buffer yields a prefix of the larger draw.
        let mut rng = StdRng::seed_from_u64(7);
        let buf = random_buffer(&mut rng, 128);
        let big = select_cards(&buf, 11).unwrap();
        let small = select_cards(&buf, 5).unwrap();
        assert_eq!(&big.indices[..5], &small.indices[..]);
        assert_eq!(&big.reversals[..5], &small.reversals[..]);
    }

    #[test]
    fn test_first_card_distribution_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; DECK_SIZE];
        let trials = 78 * 400;
        for _ in 0..trials {
            let buf = random_buffer(&mut rng, 16);
            let sel = select_cards(&buf, 1).unwrap();
            counts[sel.indices[0]] += 1;
        }
        // Expected 400 per card; allow a wide band.
        assert!(
            counts.iter().all(|&c| (250..=550).contains(&c)),
            "first-card counts out of band: {counts:?}"
        );
    }

    #[test]
    fn test_reversal_rate_is_roughly_half() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut reversed = 0usize;
        let mut total = 0usize;
        for _ in 0..500 {
            let buf = random_buffer(&mut rng, 64);
            let sel = select_cards(&buf, 10).unwrap();
            reversed += sel.reversals.iter().filter(|&&r| r).count();
            total += sel.len();
        }
        let rate = reversed as f64 / total as f64;
        assert!((0.45..0.55).contains(&rate), "reversal rate {rate}");
    }

    #[test]
    fn test_three_bytes_per_card_is_usually_enough() {
        // Observed spreads use 1..=11 cards. The x3 multiplier fails only when
        // rejections eat the slack; for a single card that is two rejections in
        // a row (about 0.7%).
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let params = SelectionParams::default();
        for count in 1..=11 {
            let trials = 2000;
            let failures = (0..trials)
                .filter(|_| {
                    let buf = random_buffer(&mut rng, params.bytes_needed(count));
                    select_cards_with(&buf, count, &params).is_err()
                })
                .count();
            assert!(
                failures * 50 < trials,
                "{count} cards: {failures}/{trials} draws ran out of entropy"
            );
        }
    }
}
