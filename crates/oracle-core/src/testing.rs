//! Mock providers shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ProviderError;
use crate::provider::{EntropyKind, EntropyProvider, ProviderInfo};

fn mock_info(name: &'static str) -> ProviderInfo {
    ProviderInfo {
        name,
        label: name,
        description: "mock provider",
        physics: "deterministic test data",
        kind: EntropyKind::Quantum,
    }
}

/// Healthy provider that cycles through fixed data.
pub struct MockProvider {
    info: ProviderInfo,
    data: Vec<u8>,
    pub fetches: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: &'static str, data: Vec<u8>) -> Self {
        Self {
            info: mock_info(name),
            data,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl EntropyProvider for MockProvider {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }
    fn health_check(&self) -> bool {
        true
    }
    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.data.iter().copied().cycle().take(count).collect())
    }
}

/// Healthy provider whose fetch always errors.
pub struct FailingProvider {
    info: ProviderInfo,
}

impl FailingProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            info: mock_info(name),
        }
    }
}

impl EntropyProvider for FailingProvider {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }
    fn health_check(&self) -> bool {
        true
    }
    fn fetch(&self, _count: usize) -> Result<Vec<u8>, ProviderError> {
        Err(ProviderError::Capture("mock failure".to_string()))
    }
}

/// Provider that reports unhealthy and panics if fetched.
pub struct UnhealthyProvider {
    info: ProviderInfo,
}

impl UnhealthyProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            info: mock_info(name),
        }
    }
}

impl EntropyProvider for UnhealthyProvider {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }
    fn health_check(&self) -> bool {
        false
    }
    fn fetch(&self, _count: usize) -> Result<Vec<u8>, ProviderError> {
        panic!("unhealthy provider must not be fetched");
    }
}

/// Healthy provider that returns fewer bytes than asked for.
pub struct ShortProvider {
    info: ProviderInfo,
}

impl ShortProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            info: mock_info(name),
        }
    }
}

impl EntropyProvider for ShortProvider {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }
    fn health_check(&self) -> bool {
        true
    }
    fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
        Ok(vec![0; count / 2])
    }
}
