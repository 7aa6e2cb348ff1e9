//! LfdProvider: quantum random numbers from the LfD QRNG service.
//!
//! The service returns hex-encoded bytes from a photonic QRNG in a small
//! JSON envelope: `{"length": N, "qrn": "<hex>"}`.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{EntropyKind, EntropyProvider, ProviderInfo};

use super::helpers::decode_hex;
use super::{HEALTH_CHECK_TIMEOUT, http_client};

pub const LFD_API_URL: &str = "https://lfdr.de/qrng_api/qrng";

pub const MAX_REQUEST_LENGTH: usize = 1024;

static LFD_INFO: ProviderInfo = ProviderInfo {
    name: "lfd_qrng",
    label: "LfD QRNG",
    description: "LfD photonic quantum random number generator",
    physics: "Photons hitting a beam splitter are detected at one of two outputs with equal \
              probability. Which detector fires is fundamentally unpredictable, and each \
              detection event yields one bit.",
    kind: EntropyKind::Quantum,
};

#[derive(Debug, Deserialize)]
struct LfdResponse {
    #[serde(default)]
    qrn: String,
}

fn parse_response(body: &str, expected: usize) -> Result<Vec<u8>, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidResponse {
        provider: LFD_INFO.name,
        reason,
    };
    let parsed: LfdResponse = serde_json::from_str(body).map_err(|e| invalid(e.to_string()))?;
    let bytes = decode_hex(&parsed.qrn).ok_or_else(|| invalid("malformed hex".to_string()))?;
    if bytes.len() < expected.max(1) {
        return Err(invalid(format!(
            "expected {expected} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

pub struct LfdProvider {
    url: String,
    timeout: Duration,
}

impl LfdProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn request(&self, length: usize, timeout: Duration) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}?length={length}&format=HEX", self.url);
        let response = http_client(timeout)?
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: LFD_INFO.name,
                status: status.as_u16(),
            });
        }
        parse_response(&response.text()?, length)
    }
}

impl Default for LfdProvider {
    fn default() -> Self {
        Self::new(LFD_API_URL, Duration::from_secs(super::DEFAULT_TIMEOUT_SECS))
    }
}

impl EntropyProvider for LfdProvider {
    fn info(&self) -> &ProviderInfo {
        &LFD_INFO
    }

    fn health_check(&self) -> bool {
        match self.request(1, HEALTH_CHECK_TIMEOUT) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("{} health check failed: {e}", LFD_INFO.name);
                false
            }
        }
    }

    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let length = (count - out.len()).min(MAX_REQUEST_LENGTH);
            out.extend_from_slice(&self.request(length, self.timeout)?);
        }
        Ok(out)
    }
}
