//! Translation lookup for display labels.
//!
//! Catalogs are TOML files with one table per locale. Keys may be written
//! dotted or nested; both flatten to the same lookup key:
//!
//! ```toml
//! [es]
//! gallery.title = "Galería"
//! books."1 Samuel" = "1 Samuel"
//! books.Genesis = "Génesis"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TranslationError;

/// Synchronous `t(key)` lookup. Used for labels only, never for logic.
pub trait Translator {
    /// Looks up `key`, returning `None` when no locale has it.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Looks up `key`, returning the key itself when it is missing.
    fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// Looks up `key`, returning `default` when it is missing.
    fn t_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

/// Translator that knows no keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Locale tables with an active locale and a fallback locale.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    locale: String,
    fallback: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl TranslationCatalog {
    pub fn new(locale: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback: fallback.into(),
            tables: HashMap::new(),
        }
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(
        path: &Path,
        locale: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let text = fs::read_to_string(path).map_err(|source| TranslationError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::new(locale, fallback);
        catalog
            .merge_toml(&text)
            .map_err(|source| TranslationError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            locale_count = catalog.tables.len(),
            "loaded translations"
        );
        Ok(catalog)
    }

    /// Merges locale tables from TOML text. Later keys win.
    pub fn merge_toml(&mut self, text: &str) -> Result<(), toml::de::Error> {
        let document: toml::Table = toml::from_str(text)?;
        for (locale, value) in document {
            let entries = self.tables.entry(locale).or_default();
            flatten_into(entries, String::new(), &value);
        }
        Ok(())
    }

    /// Adds one entry.
    #[must_use]
    pub fn with_entry(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &toml::Value) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(entries, path, nested);
            }
        }
        toml::Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        other => {
            debug!(key = %prefix, "non-string translation value, using its TOML form");
            entries.insert(prefix, other.to_string());
        }
    }
}

impl Translator for TranslationCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        [self.locale.as_str(), self.fallback.as_str()]
            .into_iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.get(key))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_dotted_keys_flatten_alike() {
        let mut catalog = TranslationCatalog::new("es", "en");
        catalog
            .merge_toml(
                r#"
[en]
gallery.title = "Gallery"

[es.books]
Genesis = "Génesis"
"#,
            )
            .unwrap();
        assert_eq!(catalog.t("books.Genesis"), "Génesis");
        assert_eq!(catalog.t("gallery.title"), "Gallery");
        assert_eq!(catalog.t("missing.key"), "missing.key");
    }
}
