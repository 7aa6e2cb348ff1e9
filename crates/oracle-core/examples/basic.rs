//! Basic reading example.
//!
//! Builds the default provider chain, prints its health, and draws a
//! three-card tarot spread followed by a single hexagram.
//!
//! Run: `cargo run --example basic`

use oracle_core::{
    EntropyService, OracleConfig, cast_iching, draw_tarot, iching_spread_by_id, spread_by_id,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = OracleConfig::load(None)?;
    let service = EntropyService::from_config(&config);

    let health = service.health_report();
    println!("Providers: {}/{} healthy", health.healthy, health.total);
    for p in &health.providers {
        println!("  {:<14} {}", p.name, if p.healthy { "ok" } else { "unavailable" });
    }

    let spread = spread_by_id("three-card")?;
    match draw_tarot(&service, spread, None, &config.selection) {
        Ok(reading) => println!("\n{}\n\n(entropy: {})", reading.to_markdown(), reading.source),
        Err(e) => eprintln!("\n{}", e.user_message()),
    }

    let spread = iching_spread_by_id("single-hexagram")?;
    match cast_iching(&service, spread, None) {
        Ok(reading) => println!("\n{}", reading.to_markdown()),
        Err(e) => eprintln!("\n{}", e.user_message()),
    }

    Ok(())
}
