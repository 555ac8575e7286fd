//! Store lookup clients

pub mod app_store;
pub mod play_store;

pub use app_store::AppStoreClient;
pub use play_store::PlayStoreClient;

use tracing::{debug, warn};
use url::Url;

use crate::version::error::LookupError;
use crate::version::extractor::ListingExtractor;
use crate::version::store::StoreListing;

/// Fetch a store URL and hand a successful body to the extractor
///
/// Any non-success status means the store has nothing for `identifier`.
async fn fetch_listing(
    client: &reqwest::Client,
    url: Url,
    identifier: &str,
    extractor: &dyn ListingExtractor,
) -> Result<StoreListing, LookupError> {
    let store = extractor.store_kind().as_str();
    debug!("Looking up {} in {}: {}", identifier, store, url);

    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        debug!("{} returned status {}: {}", store, status, url);
        return Err(LookupError::NotFound(identifier.to_string()));
    }

    let body = response.text().await?;

    match extractor.extract(&body, url.as_str()) {
        Ok(Some(listing)) => Ok(listing),
        Ok(None) => {
            debug!("{} has no listing for {}", store, identifier);
            Err(LookupError::NotFound(identifier.to_string()))
        }
        Err(e) => {
            warn!("Failed to extract {} listing for {}: {}", store, identifier, e);
            Err(e)
        }
    }
}

/// Join a base URL and a path, tolerating a trailing slash on the base
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
