//! Entropy provider trait and metadata.
//!
//! Every provider implements [`EntropyProvider`], which exposes metadata via
//! [`ProviderInfo`], a health check, and a blocking fetch of raw bytes.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// What kind of physical process a provider draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyKind {
    /// Remote quantum random number generator.
    Quantum,
    /// Local physical noise with quantum contributions (camera sensor).
    QuantumPhysical,
}

impl std::fmt::Display for EntropyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quantum => write!(f, "quantum"),
            Self::QuantumPhysical => write!(f, "quantum-physical"),
        }
    }
}

/// Metadata about an entropy provider.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Unique identifier (e.g. `"anu_qrng"`).
    pub name: &'static str,
    /// Label shown to readers as the entropy source (e.g. `"ANU QRNG"`).
    pub label: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Physics explanation of the entropy mechanism.
    pub physics: &'static str,
    pub kind: EntropyKind,
}

/// Trait that every entropy provider must implement.
pub trait EntropyProvider: Send + Sync {
    /// Provider metadata.
    fn info(&self) -> &ProviderInfo;

    /// Quick check whether the provider can serve a request right now.
    fn health_check(&self) -> bool;

    /// Fetch at least `count` raw bytes.
    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError>;

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_matches_serde() {
        for kind in [EntropyKind::Quantum, EntropyKind::QuantumPhysical] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn kind_roundtrip_from_config_text() {
        let k: EntropyKind = serde_json::from_str("\"quantum-physical\"").unwrap();
        assert_eq!(k, EntropyKind::QuantumPhysical);
    }
}
