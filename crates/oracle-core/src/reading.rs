//! Complete readings: fetch entropy, select, and assemble per spread position.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};
use crate::iching::{Hexagram, HexagramCast, cast_hexagrams, hexagram_by_number};
use crate::provider::EntropyKind;
use crate::service::EntropyService;
use crate::sizing::iching_bytes_needed;
use crate::spread::{IChingSpread, Spread, SpreadPosition};
use crate::tarot::{Card, SelectionParams, select_cards_with};

fn normalize_intention(intention: Option<&str>) -> Option<String> {
    intention
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tarot
// ---------------------------------------------------------------------------

/// A card laid in a spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingCard {
    pub position: SpreadPosition,
    pub card: &'static Card,
    pub reversed: bool,
}

impl ReadingCard {
    pub fn display_name(&self) -> String {
        self.card.display_name(self.reversed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TarotReading {
    pub spread_id: &'static str,
    pub spread_name: &'static str,
    pub intention: Option<String>,
    pub cards: Vec<ReadingCard>,
    /// Label of the provider that supplied the entropy.
    pub source: &'static str,
    pub entropy_kind: EntropyKind,
    pub bytes_used: usize,
}

impl TarotReading {
    /// Markdown summary: spread, optional question, and a table of cards.
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![format!("**Spread:** {}\n", self.spread_name)];
        if let Some(intention) = &self.intention {
            lines.push(format!("**Question:** {intention}\n"));
        }
        lines.push("| Position | Meaning | Card |".to_string());
        lines.push("|----------|---------|------|".to_string());
        for (i, c) in self.cards.iter().enumerate() {
            lines.push(format!(
                "| {} | {} / {} | {} |",
                i + 1,
                c.position.name,
                c.position.description,
                c.display_name()
            ));
        }
        lines.join("\n")
    }
}

/// Fetch entropy and draw one card per position of `spread`.
pub fn draw_tarot(
    service: &EntropyService,
    spread: &'static Spread,
    intention: Option<&str>,
    params: &SelectionParams,
) -> OracleResult<TarotReading> {
    let card_count = spread.card_count();
    let entropy = service.get_entropy(params.bytes_needed(card_count))?;
    let selection = select_cards_with(&entropy.values, card_count, params)?;

    let cards = selection
        .drawn_cards()
        .into_iter()
        .zip(spread.positions)
        .map(|(drawn, &position)| ReadingCard {
            position,
            card: drawn.card,
            reversed: drawn.reversed,
        })
        .collect();

    log::debug!(
        "tarot reading {}: {card_count} cards, {} bytes from {}",
        spread.id,
        selection.bytes_used,
        entropy.source
    );

    Ok(TarotReading {
        spread_id: spread.id,
        spread_name: spread.name,
        intention: normalize_intention(intention),
        cards,
        source: entropy.source,
        entropy_kind: entropy.kind,
        bytes_used: selection.bytes_used,
    })
}

// ---------------------------------------------------------------------------
// I Ching
// ---------------------------------------------------------------------------

/// A cast resolved against the hexagram table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingCast {
    pub position: SpreadPosition,
    pub cast: HexagramCast,
    pub hexagram: &'static Hexagram,
    pub transformed: Option<&'static Hexagram>,
}

impl ReadingCast {
    fn resolve(position: SpreadPosition, cast: HexagramCast) -> OracleResult<Self> {
        let hexagram = hexagram_by_number(cast.hexagram_number)
            .ok_or(OracleError::UnknownHexagramNumber(cast.hexagram_number))?;
        let transformed = match cast.transformed_hexagram_number {
            Some(n) => Some(hexagram_by_number(n).ok_or(OracleError::UnknownHexagramNumber(n))?),
            None => None,
        };
        Ok(Self {
            position,
            cast,
            hexagram,
            transformed,
        })
    }

    fn to_markdown(&self, index: usize) -> String {
        let values: Vec<String> = self
            .cast
            .lines
            .iter()
            .map(|l| u8::from(l.value).to_string())
            .collect();
        let changing = self.cast.changing_line_positions();

        let mut out = vec![
            format!(
                "### {}. {} / {}\n",
                index + 1,
                self.position.name,
                self.position.description
            ),
            format!(
                "**Hexagram {}: {}** ({} {})\n",
                self.hexagram.number,
                self.hexagram.name,
                self.hexagram.chinese,
                self.hexagram.pinyin
            ),
            format!("Lines (bottom to top): {}\n", values.join(" ")),
        ];
        if changing.is_empty() {
            out.push("Changing lines: none\n".to_string());
        } else {
            let positions: Vec<String> = changing.iter().map(|p| p.to_string()).collect();
            out.push(format!("Changing lines: {}\n", positions.join(", ")));
        }
        if let Some(t) = self.transformed {
            out.push(format!(
                "**Becomes Hexagram {}: {}** ({} {})\n",
                t.number, t.name, t.chinese, t.pinyin
            ));
        }
        out.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IChingReading {
    pub spread_id: &'static str,
    pub spread_name: &'static str,
    pub intention: Option<String>,
    pub casts: Vec<ReadingCast>,
    pub source: &'static str,
    pub entropy_kind: EntropyKind,
    pub bytes_used: usize,
}

impl IChingReading {
    /// Markdown summary: spread, optional question, and each cast with its
    /// changing lines and transformation.
    pub fn to_markdown(&self) -> String {
        let mut sections = vec![format!("**Spread:** {}\n", self.spread_name)];
        if let Some(intention) = &self.intention {
            sections.push(format!("**Question:** {intention}\n"));
        }
        sections.extend(
            self.casts
                .iter()
                .enumerate()
                .map(|(i, c)| c.to_markdown(i)),
        );
        sections.join("\n")
    }
}

/// Fetch entropy and cast one hexagram per position of `spread`.
pub fn cast_iching(
    service: &EntropyService,
    spread: &'static IChingSpread,
    intention: Option<&str>,
) -> OracleResult<IChingReading> {
    let count = spread.hexagram_count();
    let entropy = service.get_entropy(iching_bytes_needed(count))?;
    let selection = cast_hexagrams(&entropy.values, count)?;

    let casts = selection
        .casts
        .into_iter()
        .zip(spread.positions)
        .map(|(cast, &position)| ReadingCast::resolve(position, cast))
        .collect::<OracleResult<Vec<_>>>()?;

    log::debug!(
        "i ching reading {}: {count} casts from {}",
        spread.id,
        entropy.source
    );

    Ok(IChingReading {
        spread_id: spread.id,
        spread_name: spread.name,
        intention: normalize_intention(intention),
        casts,
        source: entropy.source,
        entropy_kind: entropy.kind,
        bytes_used: selection.bytes_used,
    })
}
