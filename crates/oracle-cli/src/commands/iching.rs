use std::path::Path;

use oracle_core::iching::CastLine;
use oracle_core::{cast_iching, iching_spread_by_id};

pub fn run(config_path: Option<&Path>, spread_id: &str, intention: Option<&str>, json: bool) {
    let spread = match iching_spread_by_id(spread_id) {
        Ok(s) => s,
        Err(e) => super::exit_with(&e),
    };
    let (_, service) = super::make_service(config_path);

    if !json {
        println!(
            "Casting {} ({} hexagram{})...\n",
            spread.name,
            spread.hexagram_count(),
            if spread.hexagram_count() == 1 { "" } else { "s" }
        );
    }

    let reading = match cast_iching(&service, spread, intention) {
        Ok(r) => r,
        Err(e) => super::exit_with(&e),
    };

    if json {
        super::print_json(&reading);
        return;
    }

    for rc in &reading.casts {
        println!("  {}", rc.position.name);
        print!("{}", render_figure(&rc.cast.lines));
        println!();
    }
    println!("Entropy: {} ({})\n", reading.source, reading.entropy_kind);
    println!("{}", reading.to_markdown());
}

/// Draw the figure top line first, marking changing lines.
fn render_figure(lines: &[CastLine; 6]) -> String {
    lines
        .iter()
        .rev()
        .map(|l| {
            let bar = if l.is_yang { "━━━━━━━━━" } else { "━━━   ━━━" };
            let mark = match (l.is_changing, l.is_yang) {
                (true, true) => " o",
                (true, false) => " x",
                _ => "",
            };
            format!("    {bar}{mark}\n")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::LineValue;

    #[test]
    fn test_figure_top_line_first() {
        let mut lines = [CastLine::from(LineValue::YoungYin); 6];
        lines[5] = CastLine::from(LineValue::YoungYang);
        let out = render_figure(&lines);
        let rows: Vec<_> = out.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].trim(), "━━━━━━━━━");
        assert_eq!(rows[5].trim(), "━━━   ━━━");
    }

    #[test]
    fn test_figure_marks_changing_lines() {
        let mut lines = [CastLine::from(LineValue::YoungYang); 6];
        lines[0] = CastLine::from(LineValue::OldYin);
        lines[1] = CastLine::from(LineValue::OldYang);
        let out = render_figure(&lines);
        let rows: Vec<_> = out.lines().collect();
        assert!(rows[5].ends_with(" x"));
        assert!(rows[4].ends_with(" o"));
        assert!(!rows[3].ends_with('o'));
    }
}
