//! Google Play store page client

use std::sync::Arc;

use url::Url;

use crate::version::error::LookupError;
use crate::version::extractor::ListingExtractor;
use crate::version::extractors::CurrentVersionLabelExtractor;
use crate::version::store::{StoreKind, StoreListing, StoreLookup};
use crate::version::stores::{endpoint, fetch_listing};

/// Default base URL for the Play store
pub const DEFAULT_BASE_URL: &str = "https://play.google.com";

/// Store lookup for Google Play, reading the public details page
pub struct PlayStoreClient {
    client: reqwest::Client,
    base_url: String,
    extractor: Arc<dyn ListingExtractor>,
}

impl PlayStoreClient {
    /// Creates a new PlayStoreClient with a custom base URL
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            extractor: Arc::new(CurrentVersionLabelExtractor::default()),
        }
    }

    /// Replace the markup rule, e.g. after the store page layout changed
    pub fn with_extractor(mut self, extractor: Arc<dyn ListingExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    fn details_url(&self, package_id: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &endpoint(&self.base_url, "/store/apps/details"),
            &[("id", package_id)],
        )
    }
}

#[async_trait::async_trait]
impl StoreLookup for PlayStoreClient {
    fn store_kind(&self) -> StoreKind {
        StoreKind::PlayStore
    }

    async fn lookup(&self, identifier: &str) -> Result<StoreListing, LookupError> {
        let url = self.details_url(identifier)?;
        fetch_listing(&self.client, url, identifier, self.extractor.as_ref()).await
    }
}
