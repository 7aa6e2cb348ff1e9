use std::path::Path;

pub fn run(config_path: Option<&Path>) {
    let (_, service) = super::make_service(config_path);
    println!("Checking {} entropy provider(s)...\n", service.provider_count());

    let report = service.health_report();
    for p in &report.providers {
        let status = if p.healthy { "\u{2705}" } else { "\u{274C}" };
        println!("  {status} {:<14} {:<18} {}", p.name, p.kind.to_string(), p.description);
    }

    println!("\n{}/{} providers healthy", report.healthy, report.total);
    if report.healthy == 0 {
        println!(
            "No quantum entropy is available right now; readings will fail until one recovers."
        );
    }
}
