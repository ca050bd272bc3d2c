//! Artwork records as delivered by the content source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ArtworkId, BookId};

/// Scripture text keyed by locale code (`en`, `es`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Text for `locale`, falling back to `fallback` when the locale is missing.
    pub fn get(&self, locale: &str, fallback: &str) -> Option<&str> {
        self.0
            .get(locale)
            .or_else(|| self.0.get(fallback))
            .map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One gallery artwork. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    pub book: BookId,
    /// Section or verse label, e.g. "1:1-5".
    #[serde(default)]
    pub section: String,
    /// Image reference (URL or asset path).
    pub image: String,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub scripture: LocalizedText,
}

impl ArtworkRecord {
    pub fn new(id: ArtworkId, book: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            book,
            section: String::new(),
            image: String::new(),
            scripture: LocalizedText::default(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_scripture(mut self, scripture: LocalizedText) -> Self {
        self.scripture = scripture;
        self
    }
}
