//! Update decision for one lookup

use std::cmp::Ordering;

use serde::Serialize;

use crate::version::error::ResolveError;
use crate::version::semver::{SemanticVersion, parse_version};
use crate::version::store::StoreListing;

/// Local and published versions of an app and whether an update exists
///
/// `can_update` is always derived from the parsed versions, so the record can
/// only be built through [`VersionStatus::from_listing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionStatus {
    local_version: String,
    store_version: String,
    can_update: bool,
    store_link: String,
}

impl VersionStatus {
    /// Compare a store listing against the local version
    ///
    /// # Arguments
    /// * `local_version` - Version as reported by the local package metadata
    /// * `local` - The parsed (normalized) local version
    /// * `listing` - What the store publishes
    ///
    /// Fails when the store version does not parse.
    pub fn from_listing(
        local_version: &str,
        local: &SemanticVersion,
        listing: StoreListing,
    ) -> Result<Self, ResolveError> {
        let store = parse_version(&listing.store_version).map_err(ResolveError::store)?;

        Ok(Self {
            local_version: local_version.to_string(),
            store_version: listing.store_version,
            can_update: store.cmp_precedence(local) == Ordering::Greater,
            store_link: listing.store_link,
        })
    }

    pub fn local_version(&self) -> &str {
        &self.local_version
    }

    pub fn store_version(&self) -> &str {
        &self.store_version
    }

    /// True when the store version is strictly newer than the local one
    pub fn can_update(&self) -> bool {
        self.can_update
    }

    pub fn store_link(&self) -> &str {
        &self.store_link
    }
}
