//! Services shared by gallery components.
//!
//! Built once at the application boundary and passed by reference to every
//! component; dropping it is the teardown.

use gallery_content::{
    ContentSource, NoTranslations, TranslationCatalog, TranslationError, Translator,
};
use gallery_model::CanonicalOrder;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, GalleryConfig};

#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Translations(#[from] TranslationError),
}

pub struct GalleryContext {
    content: Box<dyn ContentSource>,
    translator: Box<dyn Translator>,
    order: CanonicalOrder,
    config: GalleryConfig,
}

impl GalleryContext {
    /// Assembles the context, resolving the canonical order from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: GalleryConfig,
        content: Box<dyn ContentSource>,
        translator: Box<dyn Translator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let order = config.canonical_order()?;
        info!(
            locale = %config.locale,
            book_count = order.len(),
            "gallery context ready"
        );
        Ok(Self {
            content,
            translator,
            order,
            config,
        })
    }

    /// Like [`GalleryContext::new`], loading the translation catalog named
    /// by `config.translations` when present.
    pub fn from_config(
        config: GalleryConfig,
        content: Box<dyn ContentSource>,
    ) -> Result<Self, ContextError> {
        let translator: Box<dyn Translator> = match &config.translations {
            Some(path) => Box::new(TranslationCatalog::load(
                path,
                config.locale.clone(),
                config.fallback_locale.clone(),
            )?),
            None => Box::new(NoTranslations),
        };
        Ok(Self::new(config, content, translator)?)
    }

    pub fn content(&self) -> &dyn ContentSource {
        self.content.as_ref()
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn order(&self) -> &CanonicalOrder {
        &self.order
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}
