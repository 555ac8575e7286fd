//! Version status resolver
//!
//! Ties a platform to its store lookup, then compares the published version
//! against the local one.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::CheckerConfig;
use crate::platform::Platform;
use crate::version::error::{LookupError, ResolveError};
use crate::version::extractors::CurrentVersionLabelExtractor;
use crate::version::semver::parse_version;
use crate::version::status::VersionStatus;
use crate::version::store::{StoreKind, StoreLookup};
use crate::version::stores::{AppStoreClient, PlayStoreClient};

/// Suffix Android debug builds append to their version name
pub const DEBUG_BUILD_SUFFIX: &str = ".debug";

/// Strip platform-specific build markers from a local version
///
/// Only Android carries a marker (`1.4.2.debug` -> `1.4.2`); other platforms
/// are returned as-is.
pub fn normalize_local_version(platform: Platform, raw: &str) -> &str {
    match platform {
        Platform::Android => {
            let trimmed = raw.trim();
            trimmed
                .strip_suffix(DEBUG_BUILD_SUFFIX)
                .map(str::trim)
                .unwrap_or(trimmed)
        }
        Platform::Ios | Platform::Unsupported => raw,
    }
}

/// Resolves whether a newer release of an app is published
///
/// Holds no per-call state, so one resolver can serve concurrent calls.
pub struct VersionStatusResolver {
    app_store: Arc<dyn StoreLookup>,
    play_store: Arc<dyn StoreLookup>,
}

impl VersionStatusResolver {
    pub fn new(app_store: Arc<dyn StoreLookup>, play_store: Arc<dyn StoreLookup>) -> Self {
        Self {
            app_store,
            play_store,
        }
    }

    /// Build a resolver with HTTP store clients sharing one client
    ///
    /// A `timeout_ms` of 0 leaves requests without a timeout.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, ResolveError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let client = builder.build().map_err(ResolveError::Client)?;

        let app_store = AppStoreClient::new(client.clone(), &config.app_store.base_url)
            .with_country(config.app_store.country.clone());
        let play_store = PlayStoreClient::new(client, &config.play_store.base_url).with_extractor(
            Arc::new(CurrentVersionLabelExtractor::new(
                &config.play_store.version_label,
            )),
        );

        Ok(Self::new(Arc::new(app_store), Arc::new(play_store)))
    }

    fn lookup_for(&self, platform: Platform) -> Option<&dyn StoreLookup> {
        match platform.store_kind()? {
            StoreKind::PlayStore => Some(self.play_store.as_ref()),
            StoreKind::AppStore => Some(self.app_store.as_ref()),
        }
    }

    /// Resolve the version status of an app
    ///
    /// # Arguments
    /// * `platform` - Platform the app runs on
    /// * `local_version` - Version reported by the local package metadata
    /// * `identifier` - Store identifier (bundle id or package name)
    ///
    /// # Returns
    /// * `Ok(Some(VersionStatus))` - Both versions were found and compared
    /// * `Ok(None)` - No update information: unsupported platform, app not
    ///   listed, or a store response that could not be read
    /// * `Err(ResolveError)` - A version failed to parse or the request failed
    pub async fn resolve(
        &self,
        platform: Platform,
        local_version: &str,
        identifier: &str,
    ) -> Result<Option<VersionStatus>, ResolveError> {
        let Some(lookup) = self.lookup_for(platform) else {
            debug!("No store lookup for platform {}", platform);
            return Ok(None);
        };

        let store = lookup.store_kind().as_str();
        let listing = match lookup.lookup(identifier).await {
            Ok(listing) => listing,
            Err(LookupError::NotFound(id)) => {
                info!("{} is not listed in {}", id, store);
                return Ok(None);
            }
            Err(LookupError::MalformedResponse(reason)) => {
                warn!(
                    "Unexpected {} response for {}, the response format may have changed: {}",
                    store, identifier, reason
                );
                return Ok(None);
            }
            Err(LookupError::Transport(e)) => return Err(ResolveError::Transport(e)),
            Err(LookupError::InvalidUrl(e)) => return Err(ResolveError::InvalidUrl(e)),
        };

        let normalized = normalize_local_version(platform, local_version);
        let local = parse_version(normalized).map_err(|e| {
            warn!("Failed to parse local version {:?}: {}", local_version, e);
            ResolveError::local(e)
        })?;

        let status = VersionStatus::from_listing(local_version, &local, listing).inspect_err(|e| {
            warn!("Failed to compare versions for {}: {}", identifier, e);
        })?;

        debug!(
            "{}: local {} store {} can_update={}",
            identifier,
            status.local_version(),
            status.store_version(),
            status.can_update()
        );

        Ok(Some(status))
    }
}
