//! Entropy provider implementations.
//!
//! Two remote quantum RNG services and one local physical source:
//!
//! | Provider | Kind | Mechanism |
//! |---|---|---|
//! | [`AnuProvider`] | quantum | vacuum fluctuations, JSON over HTTPS |
//! | [`LfdProvider`] | quantum | photonic beam splitter, hex over HTTPS |
//! | [`CameraProvider`] | quantum-physical | sensor shot noise via ffmpeg |

pub mod anu;
pub mod camera;
pub mod helpers;
pub mod lfd;

use std::time::Duration;

pub use anu::AnuProvider;
pub use camera::CameraProvider;
pub use lfd::LfdProvider;

/// Default per-request timeout for fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Timeout for the one-byte health probe.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking HTTP client with the given overall timeout.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("quantum-oracle/", env!("CARGO_PKG_VERSION")))
        .build()
}
