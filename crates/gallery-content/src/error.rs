//! Error types for content and translation loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`crate::ContentSource`].
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file not found.
    #[error("content file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the content file.
    #[error("failed to read content file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid artwork JSON.
    #[error("failed to parse content {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an id.
    #[error("duplicate artwork id '{id}'")]
    DuplicateArtwork { id: String },

    /// Upstream content service failed.
    #[error("content source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Errors raised while loading a translation catalog.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to read translations {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translations {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ContentError>;
