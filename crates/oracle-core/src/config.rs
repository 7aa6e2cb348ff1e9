//! Runtime configuration.
//!
//! [`OracleConfig`] is loaded from an optional JSON file; every field has a
//! default, so `{}` is a valid config. Environment variables override the
//! file:
//!
//! | Variable | Field |
//! |---|---|
//! | `ORACLE_CAMERA_DEVICE` | `camera_device` |
//! | `ORACLE_ANU_URL` | `anu_url` |
//! | `ORACLE_LFD_URL` | `lfd_url` |

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::provider::EntropyProvider;
use crate::providers::{
    AnuProvider, CameraProvider, DEFAULT_TIMEOUT_SECS, LfdProvider, anu::ANU_API_URL,
    lfd::LFD_API_URL,
};
use crate::tarot::SelectionParams;
use crate::tarot::select::{MAX_REJECTION_BUDGET_FACTOR, MAX_TAROT_BYTES_PER_CARD};

pub const ENV_CAMERA_DEVICE: &str = "ORACLE_CAMERA_DEVICE";
pub const ENV_ANU_URL: &str = "ORACLE_ANU_URL";
pub const ENV_LFD_URL: &str = "ORACLE_LFD_URL";

/// Which providers make up the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anu,
    Lfd,
    Camera,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anu => write!(f, "anu"),
            Self::Lfd => write!(f, "lfd"),
            Self::Camera => write!(f, "camera"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anu" => Ok(Self::Anu),
            "lfd" => Ok(Self::Lfd),
            "camera" => Ok(Self::Camera),
            other => Err(OracleError::Config(format!("unknown provider: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
    /// Provider fallback order.
    pub providers: Vec<ProviderKind>,
    pub anu_url: String,
    pub lfd_url: String,
    /// Camera selector: avfoundation index on macOS, device path on Linux.
    pub camera_device: Option<String>,
    pub request_timeout_secs: u64,
    pub selection: SelectionParams,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            providers: vec![ProviderKind::Anu, ProviderKind::Lfd, ProviderKind::Camera],
            anu_url: ANU_API_URL.to_string(),
            lfd_url: LFD_API_URL.to_string(),
            camera_device: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            selection: SelectionParams::default(),
        }
    }
}

impl OracleConfig {
    /// Parse a JSON config file.
    pub fn from_path(path: &Path) -> OracleResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| OracleError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| OracleError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// File (if given) plus environment overrides.
    pub fn load(path: Option<&Path>) -> OracleResult<Self> {
        let config = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(device) = non_empty(ENV_CAMERA_DEVICE) {
            self.camera_device = Some(device);
        }
        if let Some(url) = non_empty(ENV_ANU_URL) {
            self.anu_url = url;
        }
        if let Some(url) = non_empty(ENV_LFD_URL) {
            self.lfd_url = url;
        }
        self
    }

    fn validate(&self) -> OracleResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(OracleError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        let selection = &self.selection;
        if !(1..=MAX_TAROT_BYTES_PER_CARD).contains(&selection.tarot_bytes_per_card) {
            return Err(OracleError::Config(format!(
                "tarot_bytes_per_card must be in 1..={MAX_TAROT_BYTES_PER_CARD}, got {}",
                selection.tarot_bytes_per_card
            )));
        }
        if !(1..=MAX_REJECTION_BUDGET_FACTOR).contains(&selection.rejection_budget_factor) {
            return Err(OracleError::Config(format!(
                "rejection_budget_factor must be in 1..={MAX_REJECTION_BUDGET_FACTOR}, got {}",
                selection.rejection_budget_factor
            )));
        }
        Ok(())
    }

    pub fn with_providers(mut self, providers: Vec<ProviderKind>) -> Self {
        self.providers = providers;
        self
    }

    pub fn with_anu_url(mut self, url: impl Into<String>) -> Self {
        self.anu_url = url.into();
        self
    }

    pub fn with_lfd_url(mut self, url: impl Into<String>) -> Self {
        self.lfd_url = url.into();
        self
    }

    pub fn with_camera_device(mut self, device: impl Into<String>) -> Self {
        self.camera_device = Some(device.into());
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_selection(mut self, selection: SelectionParams) -> Self {
        self.selection = selection;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Instantiate providers in configured order. Duplicates are dropped.
    pub fn build_providers(&self) -> Vec<Box<dyn EntropyProvider>> {
        let mut seen = Vec::with_capacity(self.providers.len());
        let mut out: Vec<Box<dyn EntropyProvider>> = Vec::with_capacity(self.providers.len());
        for &kind in &self.providers {
            if seen.contains(&kind) {
                log::debug!("duplicate provider {kind} in config, ignoring");
                continue;
            }
            seen.push(kind);
            out.push(match kind {
                ProviderKind::Anu => {
                    Box::new(AnuProvider::new(&self.anu_url, self.request_timeout()))
                }
                ProviderKind::Lfd => {
                    Box::new(LfdProvider::new(&self.lfd_url, self.request_timeout()))
                }
                ProviderKind::Camera => Box::new(CameraProvider::new(
                    self.camera_device.clone(),
                    self.request_timeout(),
                )),
            });
        }
        out
    }
}
