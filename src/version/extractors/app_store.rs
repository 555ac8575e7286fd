//! App Store lookup API response extractor
//!
//! The lookup endpoint answers with JSON:
//! `{"resultCount": 1, "results": [{"version": "1.2.3", "trackViewUrl": "https://apps.apple.com/..."}]}`

use serde::Deserialize;

use crate::version::error::LookupError;
use crate::version::extractor::ListingExtractor;
use crate::version::store::{StoreKind, StoreListing};

/// Response from the App Store lookup API
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResult {
    version: Option<String>,
    track_view_url: Option<String>,
}

pub struct AppStoreJsonExtractor;

impl ListingExtractor for AppStoreJsonExtractor {
    fn store_kind(&self) -> StoreKind {
        StoreKind::AppStore
    }

    fn extract(&self, body: &str, _request_url: &str) -> Result<Option<StoreListing>, LookupError> {
        let response: LookupResponse = serde_json::from_str(body)
            .map_err(|e| LookupError::MalformedResponse(format!("invalid lookup JSON: {}", e)))?;

        // An unknown bundle id is answered with 200 and no results
        let Some(first) = response.results.into_iter().next() else {
            return Ok(None);
        };

        let version = first
            .version
            .ok_or_else(|| LookupError::MalformedResponse("missing results[0].version".into()))?;
        let link = first.track_view_url.ok_or_else(|| {
            LookupError::MalformedResponse("missing results[0].trackViewUrl".into())
        })?;

        Ok(Some(StoreListing::new(version, link)))
    }
}
