//! Store test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use store_version_check::config::CheckerConfig;
use store_version_check::version::error::LookupError;
use store_version_check::version::store::{StoreKind, StoreListing, StoreLookup};

/// In-memory store for testing
pub struct MockStore {
    store_kind: StoreKind,
    listings: HashMap<String, StoreListing>,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn new(store_kind: StoreKind) -> Self {
        Self {
            store_kind,
            listings: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_listing(mut self, identifier: &str, version: &str, link: &str) -> Self {
        self.listings
            .insert(identifier.to_string(), StoreListing::new(version, link));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreLookup for MockStore {
    fn store_kind(&self) -> StoreKind {
        self.store_kind
    }

    async fn lookup(&self, identifier: &str) -> Result<StoreListing, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent lookups interleave
        tokio::task::yield_now().await;
        self.listings
            .get(identifier)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(identifier.to_string()))
    }
}

/// Config pointing both stores at a local mock server
pub fn config_for(server_url: &str) -> CheckerConfig {
    let mut config = CheckerConfig::default();
    config.timeout_ms = 5_000;
    config.app_store.base_url = server_url.to_string();
    config.play_store.base_url = server_url.to_string();
    config
}
