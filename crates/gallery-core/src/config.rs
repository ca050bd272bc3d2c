//! Gallery configuration (`gallery.toml`).
//!
//! Every field has a default, so an empty or missing file is a valid
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use gallery_model::{CanonicalOrder, ModelError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_REVEAL_INITIAL: usize = 12;
pub const DEFAULT_REVEAL_STEP: usize = 12;
pub const DEFAULT_QUERY_PARAM: &str = "image";
pub const DEFAULT_GALLERY_PATH: &str = "/gallery";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("invalid canonical order: {0}")]
    CanonicalOrder(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Active locale for labels and scripture text.
    pub locale: String,
    /// Locale used when a label or text is missing in `locale`.
    pub fallback_locale: String,
    /// Replaces the built-in canonical book order when set.
    pub canonical_order: Option<Vec<String>>,
    /// Translation catalog file.
    pub translations: Option<PathBuf>,
    pub reveal: RevealConfig,
    pub url: UrlConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Items visible before any scrolling.
    pub initial: usize,
    /// Items added each time the sentinel becomes visible. At least 1.
    pub step: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlConfig {
    /// Write the open artwork into the URL.
    pub share_selection: bool,
    /// Query parameter carrying the artwork id.
    pub param: String,
    /// Path used for URL writes.
    pub path: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            canonical_order: None,
            translations: None,
            reveal: RevealConfig::default(),
            url: UrlConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_REVEAL_INITIAL,
            step: DEFAULT_REVEAL_STEP,
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            share_selection: true,
            param: DEFAULT_QUERY_PARAM.to_string(),
            path: DEFAULT_GALLERY_PATH.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys, or invalid values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// Relative `translations` paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(translations), Some(base)) = (&config.translations, path.parent())
            && translations.is_relative()
        {
            config.translations = Some(base.join(translations));
        }
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "no configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal.step == 0 {
            return Err(ConfigError::Invalid("reveal.step must be at least 1".into()));
        }
        if self.url.param.trim().is_empty() {
            return Err(ConfigError::Invalid("url.param must not be empty".into()));
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid("locale must not be empty".into()));
        }
        self.canonical_order()?;
        Ok(())
    }

    /// The configured canonical order, or the built-in canon.
    pub fn canonical_order(&self) -> Result<CanonicalOrder, ConfigError> {
        match &self.canonical_order {
            Some(names) => Ok(CanonicalOrder::from_names(names.iter().cloned())?),
            None => Ok(CanonicalOrder::default()),
        }
    }
}
