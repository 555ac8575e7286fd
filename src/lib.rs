//! Checks whether a newer release of an app is published on the Apple App
//! Store or Google Play.
//!
//! ```no_run
//! use store_version_check::config::CheckerConfig;
//! use store_version_check::platform::Platform;
//! use store_version_check::version::resolver::VersionStatusResolver;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let resolver = VersionStatusResolver::from_config(&CheckerConfig::default())?;
//! if let Some(status) = resolver
//!     .resolve(Platform::Ios, "1.0.0", "com.example.app")
//!     .await?
//! {
//!     if status.can_update() {
//!         println!("Update available: {}", status.store_link());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod platform;
pub mod version;
