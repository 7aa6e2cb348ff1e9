//! # oracle-core
//!
//! **Tarot draws and I Ching casts from quantum entropy.**
//!
//! `oracle-core` turns bytes from a quantum or quantum-physical entropy
//! source into a divination result without introducing bias on the way.
//! There is no pseudo-random fallback: if no source can deliver, the reading
//! fails and the caller is told to try again.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oracle_core::{EntropyService, OracleConfig, SelectionParams, draw_tarot, spread_by_id};
//!
//! let config = OracleConfig::default();
//! let service = EntropyService::from_config(&config);
//! let spread = spread_by_id("three-card").unwrap();
//!
//! let reading = draw_tarot(&service, spread, Some("What should I focus on?"), &config.selection)
//!     .unwrap();
//! println!("{}", reading.to_markdown());
//! ```
//!
//! ## Architecture
//!
//! Providers → Service (first healthy provider wins) → Selection → Reading
//!
//! - **Tarot**: a partial Fisher–Yates shuffle driven by rejection sampling,
//!   so every ordered draw of distinct cards is equally likely. One extra
//!   byte per card decides reversal.
//! - **I Ching**: the three-coin method, one byte per line, six bytes per
//!   hexagram, resolved against the King Wen sequence.
//!
//! The selection functions ([`select_cards`], [`cast_hexagrams`]) are pure
//! and deterministic over their input buffer, so they can be tested and
//! audited without any network access.

pub mod config;
pub mod error;
pub mod iching;
pub mod provider;
pub mod providers;
pub mod reading;
pub mod sampler;
pub mod service;
pub mod sizing;
pub mod spread;
pub mod tarot;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{OracleConfig, ProviderKind};
pub use error::{OracleError, OracleResult, ProviderError};
pub use iching::{
    HEXAGRAMS, Hexagram, HexagramCast, HexagramSelection, LineType, LineValue, cast_hexagram,
    cast_hexagrams, hexagram_by_lines, hexagram_by_number,
};
pub use provider::{EntropyKind, EntropyProvider, ProviderInfo};
pub use providers::{AnuProvider, CameraProvider, LfdProvider};
pub use reading::{IChingReading, ReadingCard, ReadingCast, TarotReading, cast_iching, draw_tarot};
pub use sampler::{EntropyCursor, sample_unbiased};
pub use service::{EntropyResult, EntropyService, HealthReport, ProviderHealth};
pub use sizing::{iching_bytes_needed, tarot_bytes_needed};
pub use spread::{
    DEFAULT_ICHING_SPREAD_ID, DEFAULT_SPREAD_ID, ICHING_SPREADS, IChingSpread, SPREADS, Spread,
    SpreadPosition, iching_spread_by_id, spread_by_id,
};
pub use tarot::{CARDS, Card, CardSelection, DECK_SIZE, DrawnCard, SelectionParams, select_cards};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
