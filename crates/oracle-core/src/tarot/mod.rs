//! Tarot deck metadata and unbiased card selection.

pub mod deck;
pub mod select;

pub use deck::{Arcana, CARDS, Card, DECK_SIZE, Suit, card_by_id};
pub use select::{
    CardSelection, DrawnCard, REJECTION_BUDGET_FACTOR, REVERSAL_THRESHOLD, SelectionParams,
    select_cards, select_cards_with,
};
