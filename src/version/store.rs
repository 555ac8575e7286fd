//! Store lookup trait for fetching the published version of an app

#[cfg(test)]
use mockall::automock;

use crate::version::error::LookupError;

/// App store catalog a lookup talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Apple App Store (iTunes lookup API)
    AppStore,
    /// Google Play store page
    PlayStore,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::AppStore => "app_store",
            StoreKind::PlayStore => "play_store",
        }
    }
}

/// Published version and page link of an app in a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreListing {
    /// Raw version string as published by the store
    pub store_version: String,
    /// Page the user can follow to update the app
    pub store_link: String,
}

impl StoreListing {
    pub fn new(store_version: impl Into<String>, store_link: impl Into<String>) -> Self {
        Self {
            store_version: store_version.into(),
            store_link: store_link.into(),
        }
    }
}

/// Trait for looking up an app's published version in a store
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StoreLookup: Send + Sync {
    /// Returns the store this implementation talks to
    fn store_kind(&self) -> StoreKind;

    /// Looks up the published listing for an app
    ///
    /// # Arguments
    /// * `identifier` - Bundle id (App Store) or package name (Play)
    ///
    /// # Returns
    /// * `Ok(StoreListing)` - Published version and page link
    /// * `Err(LookupError::NotFound)` - The store answered with a non-success status
    /// * `Err(LookupError::MalformedResponse)` - The response lacked the expected fields
    /// * `Err(LookupError::Transport)` - The request itself failed
    async fn lookup(&self, identifier: &str) -> Result<StoreListing, LookupError>;
}
