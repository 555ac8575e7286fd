//! Extraction of a store listing from a successful lookup response
//!
//! Each store publishes its version in a different shape. Keeping the rule
//! behind this trait lets a store client swap it (for example when the
//! store's markup changes) without touching the client or the resolver.

use crate::version::error::LookupError;
use crate::version::store::{StoreKind, StoreListing};

/// Trait for store-specific response extraction
pub trait ListingExtractor: Send + Sync {
    /// Returns the store whose responses this extractor understands
    fn store_kind(&self) -> StoreKind;

    /// Extract the listing from a response body
    ///
    /// # Arguments
    /// * `body` - Response body of a successful lookup request
    /// * `request_url` - URL the body was fetched from
    ///
    /// # Returns
    /// * `Ok(Some(StoreListing))` - The listing found in the body
    /// * `Ok(None)` - The store answered successfully but lists no such app
    /// * `Err(LookupError::MalformedResponse)` - Expected fields or markup are missing
    fn extract(&self, body: &str, request_url: &str) -> Result<Option<StoreListing>, LookupError>;
}
