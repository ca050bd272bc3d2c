//! Artwork content sources.
//!
//! A source returns the full ordered artwork list; no pagination contract is
//! assumed. Records keep the order the source delivers them in, since that
//! order is the intra-book order shown in the gallery.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use gallery_model::ArtworkRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ContentError, Result};

/// Provider of the gallery's artwork records.
pub trait ContentSource {
    /// Fetches every artwork in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] when the upstream content cannot be read.
    fn fetch_artworks(&self) -> Result<Vec<ArtworkRecord>>;
}

/// Reads artworks from a JSON file on disk.
///
/// Accepts either a bare array or an object with an `artworks` array.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentDocument {
    Bare(Vec<ArtworkRecord>),
    Wrapped { artworks: Vec<ArtworkRecord> },
}

impl ContentSource for JsonFileSource {
    fn fetch_artworks(&self) -> Result<Vec<ArtworkRecord>> {
        if !self.path.exists() {
            return Err(ContentError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let text = fs::read_to_string(&self.path).map_err(|source| ContentError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_artworks(&text).map_err(|source| ContentError::Parse {
            path: self.path.clone(),
            source,
        })?;
        ensure_unique_ids(&records)?;
        info!(
            path = %self.path.display(),
            artwork_count = records.len(),
            "loaded artwork content"
        );
        Ok(records)
    }
}

/// Parses artwork JSON in either accepted layout.
pub fn parse_artworks(text: &str) -> serde_json::Result<Vec<ArtworkRecord>> {
    let document: ContentDocument = serde_json::from_str(text)?;
    Ok(match document {
        ContentDocument::Bare(records) => records,
        ContentDocument::Wrapped { artworks } => artworks,
    })
}

/// Rejects content in which two records share an id.
pub fn ensure_unique_ids(records: &[ArtworkRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(ContentError::DuplicateArtwork {
                id: record.id.to_string(),
            });
        }
    }
    Ok(())
}

/// In-memory source for fixtures and demos. Can be set to fail.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ArtworkRecord>,
    failure: Option<String>,
}

impl StaticSource {
    pub fn new(records: Vec<ArtworkRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A source whose every fetch fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

impl ContentSource for StaticSource {
    fn fetch_artworks(&self) -> Result<Vec<ArtworkRecord>> {
        if let Some(reason) = &self.failure {
            return Err(ContentError::Unavailable {
                reason: reason.clone(),
            });
        }
        ensure_unique_ids(&self.records)?;
        debug!(artwork_count = self.records.len(), "serving static content");
        Ok(self.records.clone())
    }
}
