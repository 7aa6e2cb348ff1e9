use std::path::Path;

use oracle_core::{TarotReading, draw_tarot, spread_by_id};

pub fn run(config_path: Option<&Path>, spread_id: &str, intention: Option<&str>, json: bool) {
    let spread = match spread_by_id(spread_id) {
        Ok(s) => s,
        Err(e) => super::exit_with(&e),
    };
    let (config, service) = super::make_service(config_path);

    if !json {
        println!("Drawing {} ({} cards)...\n", spread.name, spread.card_count());
    }

    let reading = match draw_tarot(&service, spread, intention, &config.selection) {
        Ok(r) => r,
        Err(e) => super::exit_with(&e),
    };

    if json {
        super::print_json(&reading);
        return;
    }

    print!("{}", render_cards(&reading));
    println!("\nEntropy: {} ({})\n", reading.source, reading.entropy_kind);
    println!("{}", reading.to_markdown());
}

/// One line per card: position, name, and orientation.
fn render_cards(reading: &TarotReading) -> String {
    let mut out = String::new();
    if let Some(q) = &reading.intention {
        out.push_str(&format!("  Question: {q}\n\n"));
    }
    for (i, c) in reading.cards.iter().enumerate() {
        let orientation = if c.reversed { "\u{21C5}" } else { " " };
        out.push_str(&format!(
            "  {:>2}. {:<18} {orientation} {}\n",
            i + 1,
            c.position.name,
            c.display_name()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::{CARDS, EntropyKind, ReadingCard, SPREADS};

    fn reading(reversed: bool, intention: Option<&str>) -> TarotReading {
        let spread = &SPREADS[0];
        TarotReading {
            spread_id: spread.id,
            spread_name: spread.name,
            intention: intention.map(str::to_string),
            cards: vec![ReadingCard {
                position: spread.positions[0],
                card: &CARDS[21],
                reversed,
            }],
            source: "test",
            entropy_kind: EntropyKind::Quantum,
            bytes_used: 2,
        }
    }

    #[test]
    fn test_render_upright() {
        let out = render_cards(&reading(false, None));
        assert!(out.contains(" 1. The Card"));
        assert!(out.contains("The World"));
        assert!(!out.contains("Reversed"));
        assert!(!out.contains("Question"));
    }

    #[test]
    fn test_render_reversed_with_question() {
        let out = render_cards(&reading(true, Some("Why?")));
        assert!(out.starts_with("  Question: Why?\n"));
        assert!(out.contains("The World (Reversed)"));
    }
}
