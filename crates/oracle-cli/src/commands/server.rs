use std::path::Path;

pub fn run(config_path: Option<&Path>, host: &str, port: u16) {
    let (config, service) = super::make_service(config_path);

    let base = format!("http://{host}:{port}");
    let providers = service.provider_names().join(" \u{2192} ");

    println!("\u{1F52E} Quantum Oracle Server v{}", oracle_core::VERSION);
    println!("   {base}");
    println!("   Providers: {providers}");
    println!();
    println!("   Endpoints:");
    println!("     GET /                 API index (try: curl {base})");
    println!("     GET /api/entropy      Raw quantum entropy bytes");
    println!("     GET /api/tarot        Draw a tarot reading");
    println!("     GET /api/iching       Cast an I Ching reading");
    println!("     GET /spreads          Tarot and I Ching spreads");
    println!("     GET /health           Provider health");
    println!();
    println!("   Query params:");
    println!(
        "     count=N               Bytes for /api/entropy (1-{}, default: {})",
        oracle_server::MAX_ENTROPY_COUNT,
        oracle_server::DEFAULT_ENTROPY_COUNT
    );
    println!("     spread=<id>           Spread for /api/tarot and /api/iching");
    println!("     intention=<text>      Question recorded with the reading");
    println!();
    println!("   Examples:");
    println!("     curl {base}/api/entropy?count=32");
    println!("     curl '{base}/api/tarot?spread=three-card&intention=focus'");
    println!("     curl {base}/api/iching?spread=past-future");
    println!();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(oracle_server::run_server(
        service,
        config.selection,
        host,
        port,
    )) {
        eprintln!("Error: server failed on {host}:{port}: {e}");
        std::process::exit(1);
    }
}
