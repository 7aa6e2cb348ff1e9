pub mod entropy;
pub mod iching;
pub mod server;
pub mod sources;
pub mod spreads;
pub mod tarot;

use std::path::Path;

use oracle_core::{EntropyService, OracleConfig, OracleError};

/// Load config (file plus environment) or exit with the error.
pub fn load_config(path: Option<&Path>) -> OracleConfig {
    match OracleConfig::load(path) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    }
}

/// Config and the provider chain it describes.
pub fn make_service(path: Option<&Path>) -> (OracleConfig, EntropyService) {
    let config = load_config(path);
    let service = EntropyService::from_config(&config);
    (config, service)
}

/// Print a user-facing message for `err` and exit with status 1.
pub fn exit_with(err: &OracleError) -> ! {
    log::debug!("{err:?}");
    eprintln!("Error: {}", err_message(err));
    std::process::exit(1);
}

fn err_message(err: &OracleError) -> String {
    match err {
        OracleError::UnknownSpread(_) => {
            format!("{err}. Run `quantum-oracle spreads` to list spreads.")
        }
        _ => err.user_message(),
    }
}

/// Print `value` as pretty JSON or exit on serialization failure.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
