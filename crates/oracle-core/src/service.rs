//! Entropy acquisition: an ordered fallback chain of providers.
//!
//! [`EntropyService::get_entropy`] walks the providers in order. A provider
//! that reports unhealthy, errors, or returns too few bytes is logged and
//! skipped. The first one that delivers wins, and its label and kind are
//! returned alongside the bytes. The service keeps no per-request state, so
//! it can be shared across threads behind an `Arc`.

use serde::Serialize;

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::provider::{EntropyKind, EntropyProvider};

/// Largest single request the service accepts.
pub const MAX_ENTROPY_BYTES: usize = 64 * 1024;

/// Bytes from one provider and where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntropyResult {
    pub values: Vec<u8>,
    /// Human-readable label (e.g. `"ANU QRNG"`).
    pub source: &'static str,
    /// Provider identifier (e.g. `"anu_qrng"`).
    pub provider: &'static str,
    pub kind: EntropyKind,
}

/// Ordered chain of entropy providers.
pub struct EntropyService {
    providers: Vec<Box<dyn EntropyProvider>>,
}

impl EntropyService {
    pub fn new(providers: Vec<Box<dyn EntropyProvider>>) -> Self {
        Self { providers }
    }

    /// Build the provider chain described by `config`.
    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.build_providers())
    }

    /// Append a provider at the end of the chain.
    pub fn add_provider(&mut self, provider: Box<dyn EntropyProvider>) {
        self.providers.push(provider);
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Provider names in fallback order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Fetch at least `count` bytes from the first provider that can deliver.
    ///
    /// Extra bytes beyond `count` are kept in the result.
    pub fn get_entropy(&self, count: usize) -> OracleResult<EntropyResult> {
        if count == 0 || count > MAX_ENTROPY_BYTES {
            return Err(OracleError::InvalidCount {
                what: "entropy byte",
                count,
                max: MAX_ENTROPY_BYTES,
            });
        }

        let mut attempted = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            let name = provider.name();
            attempted.push(name.to_string());

            if !provider.health_check() {
                log::warn!("{name}: health check failed, skipping");
                continue;
            }

            match provider.fetch(count) {
                Ok(values) if values.len() >= count => {
                    let info = provider.info();
                    log::info!("entropy: {} bytes from {}", values.len(), info.label);
                    return Ok(EntropyResult {
                        values,
                        source: info.label,
                        provider: info.name,
                        kind: info.kind,
                    });
                }
                Ok(values) => {
                    log::warn!("{name}: returned {} of {count} bytes", values.len());
                }
                Err(e) => {
                    log::warn!("{name}: {e}");
                }
            }
        }

        Err(OracleError::EntropySourceUnavailable { attempted })
    }

    /// Probe every provider without fetching entropy.
    pub fn health_report(&self) -> HealthReport {
        let providers: Vec<ProviderHealth> = self
            .providers
            .iter()
            .map(|p| {
                let info = p.info();
                ProviderHealth {
                    name: info.name.to_string(),
                    label: info.label.to_string(),
                    description: info.description.to_string(),
                    kind: info.kind,
                    healthy: p.health_check(),
                }
            })
            .collect();

        HealthReport {
            healthy: providers.iter().filter(|p| p.healthy).count(),
            total: providers.len(),
            providers,
        }
    }
}

/// Overall provider health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// Number of healthy providers.
    pub healthy: usize,
    /// Total number of providers.
    pub total: usize,
    /// Per-provider health, in fallback order.
    pub providers: Vec<ProviderHealth>,
}

/// Health of a single provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderHealth {
    pub name: String,
    pub label: String,
    pub description: String,
    pub kind: EntropyKind,
    pub healthy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingProvider, MockProvider, ShortProvider, UnhealthyProvider};

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_empty_service_is_unavailable() {
        let service = EntropyService::new(Vec::new());
        assert_eq!(service.provider_count(), 0);
        assert!(matches!(
            service.get_entropy(10),
            Err(OracleError::EntropySourceUnavailable { attempted }) if attempted.is_empty()
        ));
    }

    #[test]
    fn test_add_provider_keeps_order() {
        let mut service = EntropyService::new(vec![Box::new(MockProvider::new("a", vec![1]))]);
        service.add_provider(Box::new(FailingProvider::new("b")));
        assert_eq!(service.provider_names(), vec!["a", "b"]);
    }

    // -----------------------------------------------------------------------
    // Fallback order
    // -----------------------------------------------------------------------

    #[test]
    fn test_first_healthy_provider_wins() {
        let service = EntropyService::new(vec![
            Box::new(MockProvider::new("first", vec![1])),
            Box::new(MockProvider::new("second", vec![2])),
        ]);
        let result = service.get_entropy(8).unwrap();
        assert_eq!(result.provider, "first");
        assert_eq!(result.values, vec![1; 8]);
        assert_eq!(result.kind, EntropyKind::Quantum);
    }

    #[test]
    fn test_failing_provider_falls_through() {
        let service = EntropyService::new(vec![
            Box::new(FailingProvider::new("broken")),
            Box::new(MockProvider::new("backup", vec![0xAB])),
        ]);
        let result = service.get_entropy(4).unwrap();
        assert_eq!(result.source, "backup");
        assert_eq!(result.values, vec![0xAB; 4]);
    }

    #[test]
    fn test_unhealthy_provider_is_not_fetched() {
        let service = EntropyService::new(vec![
            Box::new(UnhealthyProvider::new("down")),
            Box::new(MockProvider::new("up", vec![3])),
        ]);
        assert_eq!(service.get_entropy(2).unwrap().provider, "up");
    }

    #[test]
    fn test_short_response_falls_through() {
        let service = EntropyService::new(vec![
            Box::new(ShortProvider::new("short")),
            Box::new(MockProvider::new("full", vec![9])),
        ]);
        let result = service.get_entropy(10).unwrap();
        assert_eq!(result.provider, "full");
        assert_eq!(result.values.len(), 10);
    }

    #[test]
    fn test_all_failed_lists_attempts_in_order() {
        let service = EntropyService::new(vec![
            Box::new(UnhealthyProvider::new("anu_qrng")),
            Box::new(FailingProvider::new("lfd_qrng")),
            Box::new(ShortProvider::new("camera_noise")),
        ]);
        let err = service.get_entropy(30).unwrap_err();
        assert!(err.is_recoverable());
        match err {
            OracleError::EntropySourceUnavailable { attempted } => {
                assert_eq!(attempted, vec!["anu_qrng", "lfd_qrng", "camera_noise"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_later_providers_untouched_after_success() {
        use std::sync::Arc;

        struct Shared(Arc<MockProvider>);
        impl EntropyProvider for Shared {
            fn info(&self) -> &crate::provider::ProviderInfo {
                self.0.info()
            }
            fn health_check(&self) -> bool {
                true
            }
            fn fetch(&self, count: usize) -> Result<Vec<u8>, crate::error::ProviderError> {
                self.0.fetch(count)
            }
        }

        let second = Arc::new(MockProvider::new("second", vec![2]));
        let service = EntropyService::new(vec![
            Box::new(MockProvider::new("first", vec![1])),
            Box::new(Shared(Arc::clone(&second))),
        ]);
        service.get_entropy(5).unwrap();
        service.get_entropy(5).unwrap();
        assert_eq!(second.fetch_count(), 0);
    }

    // -----------------------------------------------------------------------
    // Request bounds
    // -----------------------------------------------------------------------

    #[test]
    fn test_zero_and_oversized_requests_rejected() {
        let service = EntropyService::new(vec![Box::new(MockProvider::new("m", vec![1]))]);
        assert!(matches!(
            service.get_entropy(0),
            Err(OracleError::InvalidCount { count: 0, .. })
        ));
        assert!(service.get_entropy(MAX_ENTROPY_BYTES + 1).is_err());
        assert_eq!(
            service.get_entropy(MAX_ENTROPY_BYTES).unwrap().values.len(),
            MAX_ENTROPY_BYTES
        );
    }

    // -----------------------------------------------------------------------
    // Health report
    // -----------------------------------------------------------------------

    #[test]
    fn test_health_report_counts() {
        let service = EntropyService::new(vec![
            Box::new(MockProvider::new("ok", vec![1])),
            Box::new(UnhealthyProvider::new("down")),
            Box::new(FailingProvider::new("flaky")),
        ]);
        let report = service.health_report();
        assert_eq!(report.total, 3);
        assert_eq!(report.healthy, 2);
        let names: Vec<_> = report.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ok", "down", "flaky"]);
        assert!(!report.providers[1].healthy);
    }

    #[test]
    fn test_health_report_serializes() {
        let service = EntropyService::new(vec![Box::new(MockProvider::new("ok", vec![1]))]);
        let v = serde_json::to_value(service.health_report()).unwrap();
        assert_eq!(v["healthy"], 1);
        assert_eq!(v["providers"][0]["kind"], "quantum");
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EntropyService>();
    }
}
