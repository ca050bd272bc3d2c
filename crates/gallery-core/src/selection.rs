//! Lightbox selection state.
//!
//! The selection is either `Closed` or `Open` on exactly one artwork. While
//! open, `index` is always a valid position in the open book group and
//! `artwork` is the id at that position.

use gallery_model::{ArtworkId, BookGroup, BookId};
use tracing::debug;

use crate::gallery::{Gallery, Location};

/// Carousel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Whether an event changed the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// An open lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSelection {
    pub artwork: ArtworkId,
    pub book: BookId,
    /// Index of the book group in the gallery.
    pub group: usize,
    /// Index within the book group.
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(OpenSelection),
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn open(&self) -> Option<&OpenSelection> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    pub fn artwork_id(&self) -> Option<&ArtworkId> {
        self.open().map(|open| &open.artwork)
    }

    /// Opens the lightbox on `id`.
    ///
    /// An id that is not in the gallery leaves the selection untouched.
    /// Selecting while already open replaces the selection.
    pub fn select(&mut self, gallery: &Gallery, id: &ArtworkId) -> Transition {
        let Some(location) = gallery.locate(id) else {
            debug!(artwork_id = %id, "ignoring selection of unknown artwork");
            return Transition::Unchanged;
        };
        if self.artwork_id() == Some(id) {
            return Transition::Unchanged;
        }
        self.open_at(gallery, location)
    }

    /// Moves within the open book group, wrapping at both ends.
    pub fn advance(&mut self, gallery: &Gallery, step: Step) -> Transition {
        let Self::Open(open) = self else {
            return Transition::Unchanged;
        };
        let Some(len) = gallery.group(open.group).map(BookGroup::len) else {
            return Transition::Unchanged;
        };
        if len <= 1 {
            return Transition::Unchanged;
        }
        let index = match step {
            Step::Next => (open.index + 1) % len,
            Step::Previous => (open.index + len - 1) % len,
        };
        let location = Location {
            group: open.group,
            index,
        };
        self.open_at(gallery, location)
    }

    /// Applies the index a carousel reports after a drag or swipe.
    ///
    /// The group is kept; only the artwork id follows the index. Indexes
    /// outside the group are ignored.
    pub fn carousel_settled(&mut self, gallery: &Gallery, index: usize) -> Transition {
        let Self::Open(open) = self else {
            return Transition::Unchanged;
        };
        if open.index == index {
            return Transition::Unchanged;
        }
        let location = Location {
            group: open.group,
            index,
        };
        if gallery.artwork_at(location).is_none() {
            debug!(
                book = %open.book,
                index,
                "ignoring carousel index outside the open group"
            );
            return Transition::Unchanged;
        }
        self.open_at(gallery, location)
    }

    pub fn close(&mut self) -> Transition {
        if self.is_open() {
            *self = Self::Closed;
            Transition::Changed
        } else {
            Transition::Unchanged
        }
    }

    fn open_at(&mut self, gallery: &Gallery, location: Location) -> Transition {
        let Some(artwork) = gallery.artwork_at(location) else {
            return Transition::Unchanged;
        };
        *self = Self::Open(OpenSelection {
            artwork: artwork.id.clone(),
            book: artwork.book.clone(),
            group: location.group,
            index: location.index,
        });
        Transition::Changed
    }
}
