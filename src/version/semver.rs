//! Version parsing and precedence comparison

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease, Version};

use crate::version::error::VersionParseError;

/// Number of numeric segments in a version core (`MAJOR.MINOR.PATCH`)
const CORE_SEGMENTS: usize = 3;

/// A parsed, totally ordered version.
///
/// Ordering follows semantic-versioning precedence. Build metadata takes part
/// in the ordering only as a final tie-breaker, so two versions compare equal
/// only when every component is identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion(Version);

impl SemanticVersion {
    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release identifiers, empty for a release version
    pub fn pre(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Build metadata, empty when absent
    pub fn build(&self) -> &str {
        self.0.build.as_str()
    }

    /// Compare by release precedence alone, ignoring build metadata
    ///
    /// `1.0.0+1` and `1.0.0` are the same release and compare equal here,
    /// while [`Ord`] still orders them.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse a version string, padding a partial core with zeros.
///
/// Examples:
/// - "1" -> 1.0.0
/// - "1.2" -> 1.2.0
/// - "1.2-beta.1+42" -> 1.2.0-beta.1+42
///
/// More than three core segments, non-numeric core segments and empty input
/// are rejected.
pub fn parse_version(text: &str) -> Result<SemanticVersion, VersionParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(VersionParseError::Empty);
    }

    // Pre-release starts at the first '-', build metadata at the first '+',
    // whichever comes first ends the core.
    let core_end = text.find(['-', '+']).unwrap_or(text.len());
    let (core, suffix) = text.split_at(core_end);

    let segments: Vec<&str> = core.split('.').collect();
    if segments.len() > CORE_SEGMENTS {
        return Err(VersionParseError::TooManySegments(text.to_string()));
    }

    let mut numbers = [0u64; CORE_SEGMENTS];
    for (slot, segment) in numbers.iter_mut().zip(&segments) {
        *slot = parse_core_segment(text, segment)?;
    }

    let (pre, build) = match suffix.split_once('+') {
        Some((pre, build)) => (pre, Some(build)),
        None => (suffix, None),
    };

    let invalid_metadata = |reason: String| VersionParseError::InvalidMetadata {
        version: text.to_string(),
        reason,
    };

    // semver accepts an empty identifier list, a dangling '-' or '+' is not a version
    let pre = match pre.strip_prefix('-') {
        Some("") => return Err(invalid_metadata("empty pre-release".to_string())),
        Some(ids) => Prerelease::new(ids).map_err(|e| invalid_metadata(e.to_string()))?,
        None => Prerelease::EMPTY,
    };

    let build = match build {
        Some("") => return Err(invalid_metadata("empty build metadata".to_string())),
        Some(ids) => BuildMetadata::new(ids).map_err(|e| invalid_metadata(e.to_string()))?,
        None => BuildMetadata::EMPTY,
    };

    let [major, minor, patch] = numbers;
    Ok(SemanticVersion(Version {
        major,
        minor,
        patch,
        pre,
        build,
    }))
}

fn parse_core_segment(version: &str, segment: &str) -> Result<u64, VersionParseError> {
    let invalid = || VersionParseError::InvalidSegment {
        version: version.to_string(),
        segment: segment.to_string(),
    };

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment.parse().map_err(|_| invalid())
}

/// Compare two parsed versions by precedence
pub fn compare_versions(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    a.cmp(b)
}
