//! Static spread catalogue.
//!
//! A spread names how many cards or hexagrams a reading needs and what each
//! position means. Spreads are never mutated.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};

/// One position in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadPosition {
    pub name: &'static str,
    pub description: &'static str,
}

const fn pos(name: &'static str, description: &'static str) -> SpreadPosition {
    SpreadPosition { name, description }
}

/// Tarot spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spread {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub positions: &'static [SpreadPosition],
}

impl Spread {
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}

/// I Ching spread: one hexagram cast per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IChingSpread {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub positions: &'static [SpreadPosition],
}

impl IChingSpread {
    pub fn hexagram_count(&self) -> usize {
        self.positions.len()
    }
}

const CELTIC_CROSS: [SpreadPosition; 10] = [
    pos("Present", "Your current situation"),
    pos("Challenge", "What crosses you"),
    pos("Foundation", "The root of the matter"),
    pos("Past", "Recent influences"),
    pos("Crown", "Best possible outcome"),
    pos("Future", "What lies ahead"),
    pos("Self", "Your attitude"),
    pos("Environment", "External influences"),
    pos("Hopes & Fears", "Your inner landscape"),
    pos("Outcome", "The likely result"),
];

const CELTIC_CROSS_PLUS: [SpreadPosition; 11] = {
    let mut positions = [pos("Clarifier", "Additional insight"); 11];
    let mut i = 0;
    while i < CELTIC_CROSS.len() {
        positions[i] = CELTIC_CROSS[i];
        i += 1;
    }
    positions
};

pub static SPREADS: [Spread; 7] = [
    Spread {
        id: "single",
        name: "Single Card",
        description: "Daily check-in, quick yes/no energy, or a theme to meditate on",
        positions: &[pos("The Card", "Your message from the quantum void")],
    },
    Spread {
        id: "three-card",
        name: "Three Card",
        description: "Simple situation overview: how did I get here, where am I, where is this going?",
        positions: &[
            pos("Past", "What has led to this moment"),
            pos("Present", "Your current situation"),
            pos("Future", "Where things are heading"),
        ],
    },
    Spread {
        id: "five-card",
        name: "Five Card Cross",
        description: "Focused question with context: \"Should I take this job?\" \"Is this relationship right?\"",
        positions: &[
            pos("Present", "Your current situation"),
            pos("Challenge", "What you face"),
            pos("Past", "What brought you here"),
            pos("Future", "What lies ahead"),
            pos("Outcome", "Potential resolution"),
        ],
    },
    Spread {
        id: "celtic-cross",
        name: "Celtic Cross",
        description: "Deep dive into a complex situation: life transitions, major decisions, recurring patterns",
        positions: &CELTIC_CROSS,
    },
    Spread {
        id: "celtic-cross-plus",
        name: "Celtic Cross + Clarifier",
        description: "When the outcome needs more context, or when one card feels especially cryptic",
        positions: &CELTIC_CROSS_PLUS,
    },
    Spread {
        id: "relationship-reflection",
        name: "Relationship Reflection",
        description: "Understanding any significant relationship: what each person brings, hidden dynamics, what it teaches",
        positions: &[
            pos("What I Bring", "What you contribute to this relationship"),
            pos("What They Bring", "What the other person contributes"),
            pos("The Dynamic", "What you create together"),
            pos("My Blind Spot", "What you don't see about yourself here"),
            pos("Their Experience", "How they experience you / the relationship"),
            pos("The Unspoken", "What remains unsaid between you"),
            pos("The Lesson", "What this relationship is teaching you"),
        ],
    },
    Spread {
        id: "right-hand-of-eris",
        name: "Right Hand of Eris",
        description: "Decision-making spread: understand your question, what helps and hinders, and choose between two possible outcomes",
        positions: &[
            pos("Your Question", "The heart of what you're asking about"),
            pos("What May Help", "Forces, resources, or attitudes working in your favor"),
            pos("What May Hinder", "Obstacles, resistances, or blind spots to watch for"),
            pos("Outcome One", "One possible path forward"),
            pos("Outcome Two", "Another possible path forward"),
        ],
    },
];

pub static ICHING_SPREADS: [IChingSpread; 3] = [
    IChingSpread {
        id: "single-hexagram",
        name: "Single Hexagram",
        description: "Cast one hexagram with changing lines to reveal present situation and its transformation",
        positions: &[pos("Situation", "The present situation and how it is changing")],
    },
    IChingSpread {
        id: "past-future",
        name: "Past & Future",
        description: "Two separate castings: one for where you have been, one for where you are going",
        positions: &[
            pos("Past", "The energies that shaped this moment"),
            pos("Future", "The energies that are emerging"),
        ],
    },
    IChingSpread {
        id: "three-coins",
        name: "Three Questions",
        description: "Three separate castings for three related aspects of a situation",
        positions: &[
            pos("Situation", "The situation as it currently stands"),
            pos("Challenge", "The challenge or obstacle"),
            pos("Guidance", "The guidance or way forward"),
        ],
    },
];

pub const DEFAULT_SPREAD_ID: &str = "celtic-cross";
pub const DEFAULT_ICHING_SPREAD_ID: &str = "single-hexagram";

pub fn spread_by_id(id: &str) -> OracleResult<&'static Spread> {
    SPREADS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| OracleError::UnknownSpread(id.to_string()))
}

pub fn iching_spread_by_id(id: &str) -> OracleResult<&'static IChingSpread> {
    ICHING_SPREADS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| OracleError::UnknownSpread(id.to_string()))
}
