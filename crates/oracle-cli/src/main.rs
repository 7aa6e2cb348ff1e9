//! CLI for quantum-oracle: tarot and I Ching readings from quantum entropy.

mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quantum-oracle")]
#[command(about = "quantum-oracle: tarot and I Ching readings from quantum entropy")]
#[command(version = oracle_core::VERSION)]
struct Cli {
    /// JSON config file (provider order, URLs, camera device, selection tunables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a tarot spread
    Tarot {
        /// Spread id (see `spreads`)
        #[arg(long, default_value = oracle_core::DEFAULT_SPREAD_ID)]
        spread: String,

        /// Question or intention to record with the reading
        #[arg(long)]
        intention: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cast I Ching hexagrams with the three-coin method
    Iching {
        /// Spread id (see `spreads`)
        #[arg(long, default_value = oracle_core::DEFAULT_ICHING_SPREAD_ID)]
        spread: String,

        /// Question or intention to record with the reading
        #[arg(long)]
        intention: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tarot and I Ching spreads
    Spreads,

    /// Show entropy providers and their health
    Sources,

    /// Print raw bytes from the provider chain
    Entropy {
        /// Number of bytes
        #[arg(long, default_value = "32")]
        bytes: usize,

        /// Output format
        #[arg(long, default_value = "hex", value_parser = ["hex", "uint8"])]
        format: String,
    },

    /// Start the HTTP oracle server
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8042")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Tarot {
            spread,
            intention,
            json,
        } => commands::tarot::run(config_path, &spread, intention.as_deref(), json),
        Commands::Iching {
            spread,
            intention,
            json,
        } => commands::iching::run(config_path, &spread, intention.as_deref(), json),
        Commands::Spreads => commands::spreads::run(),
        Commands::Sources => commands::sources::run(config_path),
        Commands::Entropy { bytes, format } => commands::entropy::run(config_path, bytes, &format),
        Commands::Server { port, host } => commands::server::run(config_path, &host, port),
    }
}
