use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version segment {segment:?} in {version:?}")]
    InvalidSegment { version: String, segment: String },

    #[error("Too many version segments: {0:?}")]
    TooManySegments(String),

    #[error("Invalid pre-release or build metadata in {version:?}: {reason}")]
    InvalidMetadata { version: String, reason: String },
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("App not found in store: {0}")]
    NotFound(String),

    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
}

/// Which side of the comparison failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Local,
    Store,
}

impl std::fmt::Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSource::Local => f.write_str("local"),
            VersionSource::Store => f.write_str("store"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to parse {source_kind} version: {source}")]
    Parse {
        source_kind: VersionSource,
        #[source]
        source: VersionParseError,
    },

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(#[source] url::ParseError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ResolveError {
    pub fn local(source: VersionParseError) -> Self {
        ResolveError::Parse {
            source_kind: VersionSource::Local,
            source,
        }
    }

    pub fn store(source: VersionParseError) -> Self {
        ResolveError::Parse {
            source_kind: VersionSource::Store,
            source,
        }
    }
}
