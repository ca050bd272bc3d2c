use serde::{Deserialize, Serialize};

use crate::artwork::ArtworkRecord;
use crate::ids::{ArtworkId, BookId};

/// All artworks of one book, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookGroup {
    pub book: BookId,
    pub artworks: Vec<ArtworkRecord>,
}

impl BookGroup {
    pub fn new(book: BookId) -> Self {
        Self {
            book,
            artworks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.artworks.get(index)
    }

    /// Index of `id` within this group.
    pub fn position_of(&self, id: &ArtworkId) -> Option<usize> {
        self.artworks.iter().position(|artwork| &artwork.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ArtworkId> {
        self.artworks.iter().map(|artwork| &artwork.id)
    }
}
