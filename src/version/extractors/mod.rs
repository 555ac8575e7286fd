//! Store-specific listing extractors

pub mod app_store;
pub mod play_store;

pub use app_store::AppStoreJsonExtractor;
pub use play_store::CurrentVersionLabelExtractor;
