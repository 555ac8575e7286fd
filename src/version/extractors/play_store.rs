//! Google Play store page extractor
//!
//! The store page lists app details as caption/value pairs:
//!
//! ```html
//! <div class="hAyfc">
//!   <div class="BgcNfc">Current Version</div>
//!   <span class="htlgb"><div><span class="htlgb">1.2.3</span></div></span>
//! </div>
//! ```
//!
//! The version is the text of the element that follows the caption. Only the
//! caption text is relied on, class names are generated and change often.

use scraper::{ElementRef, Html};

use crate::version::error::LookupError;
use crate::version::extractor::ListingExtractor;
use crate::version::store::{StoreKind, StoreListing};

/// Default caption of the version row on the store page
pub const DEFAULT_VERSION_LABEL: &str = "Current Version";

pub struct CurrentVersionLabelExtractor {
    label: String,
}

impl CurrentVersionLabelExtractor {
    /// Creates an extractor matching a custom caption (e.g. for a localized page)
    pub fn new(label: &str) -> Self {
        Self {
            label: label.trim().to_string(),
        }
    }

    fn find_version(&self, document: &Html) -> Option<String> {
        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| collapsed_text(el) == self.label)
            .find_map(|caption| {
                let value = caption.next_siblings().find_map(ElementRef::wrap)?;
                let text = collapsed_text(&value);
                (!text.is_empty()).then_some(text)
            })
    }
}

impl Default for CurrentVersionLabelExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_LABEL)
    }
}

/// Text content of an element with runs of whitespace collapsed
fn collapsed_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ListingExtractor for CurrentVersionLabelExtractor {
    fn store_kind(&self) -> StoreKind {
        StoreKind::PlayStore
    }

    fn extract(&self, body: &str, request_url: &str) -> Result<Option<StoreListing>, LookupError> {
        let document = Html::parse_document(body);

        let version = self.find_version(&document).ok_or_else(|| {
            LookupError::MalformedResponse(format!("no {:?} row in store page", self.label))
        })?;

        // The page itself is the only link Play offers
        Ok(Some(StoreListing::new(version, request_url)))
    }
}
