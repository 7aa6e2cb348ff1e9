//! AnuProvider: ANU quantum random numbers over HTTP.
//!
//! The ANU QRNG measures vacuum fluctuations of the electromagnetic field
//! and serves the digitised result as JSON. Each call returns up to
//! [`MAX_REQUEST_LENGTH`] bytes; larger requests are split.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{EntropyKind, EntropyProvider, ProviderInfo};

use super::{HEALTH_CHECK_TIMEOUT, http_client};

pub const ANU_API_URL: &str = "https://qrng.anu.edu.au/API/jsonI.php";

/// Largest `length` the API accepts in one request.
pub const MAX_REQUEST_LENGTH: usize = 1024;

static ANU_INFO: ProviderInfo = ProviderInfo {
    name: "anu_qrng",
    label: "ANU QRNG",
    description: "Australian National University quantum random number generator",
    physics: "Homodyne measurement of the quantum vacuum: the electromagnetic field in its \
              ground state still fluctuates, and those fluctuations are amplified, sampled \
              and digitised into uniformly distributed bytes.",
    kind: EntropyKind::Quantum,
};

/// JSON body of `jsonI.php`.
#[derive(Debug, Deserialize)]
struct AnuResponse {
    #[serde(default)]
    data: Vec<u8>,
    success: bool,
}

fn parse_response(body: &str) -> Result<Vec<u8>, ProviderError> {
    let parsed: AnuResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
            provider: ANU_INFO.name,
            reason: e.to_string(),
        })?;
    if !parsed.success {
        return Err(ProviderError::InvalidResponse {
            provider: ANU_INFO.name,
            reason: "success = false".to_string(),
        });
    }
    if parsed.data.is_empty() {
        return Err(ProviderError::InvalidResponse {
            provider: ANU_INFO.name,
            reason: "empty data".to_string(),
        });
    }
    Ok(parsed.data)
}

/// Bytes to ask for per call when `count` are needed.
fn request_length(count: usize) -> usize {
    count.saturating_mul(2).clamp(1, MAX_REQUEST_LENGTH)
}

pub struct AnuProvider {
    url: String,
    timeout: Duration,
}

impl AnuProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn request(&self, length: usize, timeout: Duration) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}?length={length}&type=uint8", self.url);
        let response = http_client(timeout)?
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: ANU_INFO.name,
                status: status.as_u16(),
            });
        }
        parse_response(&response.text()?)
    }
}

impl Default for AnuProvider {
    fn default() -> Self {
        Self::new(ANU_API_URL, Duration::from_secs(super::DEFAULT_TIMEOUT_SECS))
    }
}

impl EntropyProvider for AnuProvider {
    fn info(&self) -> &ProviderInfo {
        &ANU_INFO
    }

    fn health_check(&self) -> bool {
        match self.request(1, HEALTH_CHECK_TIMEOUT) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("{} health check failed: {e}", ANU_INFO.name);
                false
            }
        }
    }

    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
        let length = request_length(count);
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let chunk = self.request(length, self.timeout)?;
            out.extend_from_slice(&chunk);
        }
        Ok(out)
    }
}
