use oracle_core::{DEFAULT_ICHING_SPREAD_ID, DEFAULT_SPREAD_ID, ICHING_SPREADS, SPREADS};

pub fn run() {
    println!("Tarot spreads:\n");
    for s in &SPREADS {
        let marker = if s.id == DEFAULT_SPREAD_ID { "*" } else { " " };
        println!("  {marker} {:<25} {:>2} cards  {}", s.id, s.card_count(), s.name);
        println!("      {}", s.description);
    }

    println!("\nI Ching spreads:\n");
    for s in &ICHING_SPREADS {
        let marker = if s.id == DEFAULT_ICHING_SPREAD_ID { "*" } else { " " };
        println!("  {marker} {:<25} {:>2} casts  {}", s.id, s.hexagram_count(), s.name);
        println!("      {}", s.description);
    }

    println!("\n  * default");
}
