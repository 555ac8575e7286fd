//! Platform discriminator and local package metadata

use serde::Deserialize;

use crate::version::store::StoreKind;

/// Platform the checked app runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android, published on Google Play
    Android,
    /// iOS, published on the Apple App Store
    Ios,
    /// Any platform without a store lookup
    Unsupported,
}

impl Platform {
    /// Returns the string representation of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Unsupported => "unsupported",
        }
    }

    /// The store that publishes apps for this platform
    pub fn store_kind(&self) -> Option<StoreKind> {
        match self {
            Platform::Android => Some(StoreKind::PlayStore),
            Platform::Ios => Some(StoreKind::AppStore),
            Platform::Unsupported => None,
        }
    }

    /// Platform of the running binary
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Unsupported
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "unsupported" => Ok(Platform::Unsupported),
            other => Err(format!(
                "unknown platform {:?} (expected android, ios or unsupported)",
                other
            )),
        }
    }
}

/// Per-platform store identifiers used instead of the package identifier
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct IdentifierOverrides {
    pub ios: Option<String>,
    pub android: Option<String>,
}

impl IdentifierOverrides {
    pub fn for_platform(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Android => self.android.as_deref(),
            Platform::Ios => self.ios.as_deref(),
            Platform::Unsupported => None,
        }
    }
}

/// Version metadata of the installed app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPackage {
    /// Version as reported by the package metadata, possibly with a build suffix
    pub version: String,
    /// Bundle id or package name of the installed app
    pub package_identifier: String,
}

impl LocalPackage {
    pub fn new(version: impl Into<String>, package_identifier: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            package_identifier: package_identifier.into(),
        }
    }

    /// Identifier to look the app up with: the override for `platform` when set,
    /// the package identifier otherwise
    pub fn store_identifier<'a>(
        &'a self,
        platform: Platform,
        overrides: &'a IdentifierOverrides,
    ) -> &'a str {
        overrides
            .for_platform(platform)
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(&self.package_identifier)
    }
}
