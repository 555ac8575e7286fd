//! Version discovery and comparison
//!
//! This module looks up the version an app store publishes for an app and
//! compares it with the locally installed version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│ StoreLookup │────▶│  Extractor  │
//! │ (platform)  │     │ (HTTP fetch)│     │(JSON/markup)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Semver    │
//! │(version cmp)│
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Dispatches a platform to its store and builds the [`status::VersionStatus`]
//! - [`store`]: Store lookup trait and listing type
//! - [`stores`]: App Store and Play store clients
//! - [`extractor`]: Response extraction trait
//! - [`extractors`]: JSON and markup extraction rules
//! - [`semver`]: Version parsing and precedence comparison
//! - [`status`]: The update decision record
//! - [`error`]: Error types for parsing, lookups and resolution

pub mod error;
pub mod extractor;
pub mod extractors;
pub mod resolver;
pub mod semver;
pub mod status;
pub mod store;
pub mod stores;
