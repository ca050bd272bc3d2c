//! Content collaborators for the scripture gallery: the artwork source and
//! the translation catalog used for display labels.

pub mod error;
pub mod i18n;
pub mod source;

pub use error::{ContentError, Result, TranslationError};
pub use i18n::{NoTranslations, TranslationCatalog, Translator};
pub use source::{ContentSource, JsonFileSource, StaticSource, ensure_unique_ids, parse_artworks};
