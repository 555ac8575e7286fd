//! Apple App Store lookup API client

use std::sync::Arc;

use url::Url;

use crate::version::error::LookupError;
use crate::version::extractor::ListingExtractor;
use crate::version::extractors::AppStoreJsonExtractor;
use crate::version::store::{StoreKind, StoreListing, StoreLookup};
use crate::version::stores::{endpoint, fetch_listing};

/// Default base URL for the App Store lookup API
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Store lookup for the Apple App Store
pub struct AppStoreClient {
    client: reqwest::Client,
    base_url: String,
    country: Option<String>,
    extractor: Arc<dyn ListingExtractor>,
}

impl AppStoreClient {
    /// Creates a new AppStoreClient with a custom base URL
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            country: None,
            extractor: Arc::new(AppStoreJsonExtractor),
        }
    }

    /// Restrict the lookup to one storefront (two-letter country code)
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn ListingExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    fn lookup_url(&self, bundle_id: &str) -> Result<Url, url::ParseError> {
        let mut params = vec![("bundleId", bundle_id)];
        if let Some(country) = &self.country {
            params.push(("country", country.as_str()));
        }
        Url::parse_with_params(&endpoint(&self.base_url, "/lookup"), &params)
    }
}

#[async_trait::async_trait]
impl StoreLookup for AppStoreClient {
    fn store_kind(&self) -> StoreKind {
        StoreKind::AppStore
    }

    async fn lookup(&self, identifier: &str) -> Result<StoreListing, LookupError> {
        let url = self.lookup_url(identifier)?;
        fetch_listing(&self.client, url, identifier, self.extractor.as_ref()).await
    }
}
