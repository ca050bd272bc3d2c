//! The arranged gallery: canonically sorted book groups plus an id index.

use std::collections::HashMap;

use gallery_model::{ArtworkId, ArtworkRecord, BookGroup, CanonicalOrder};

use crate::ordering::arrange;

/// Where an artwork sits in the arranged gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Index of the book group in canonical order.
    pub group: usize,
    /// Index within the group.
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    groups: Vec<BookGroup>,
    locations: HashMap<ArtworkId, Location>,
    artwork_count: usize,
}

impl Gallery {
    /// Groups and sorts `records`, then indexes them by id.
    ///
    /// If two records share an id, lookups resolve to the first one.
    pub fn arrange<I>(records: I, order: &CanonicalOrder) -> Self
    where
        I: IntoIterator<Item = ArtworkRecord>,
    {
        Self::from_groups(arrange(records, order))
    }

    pub fn from_groups(groups: Vec<BookGroup>) -> Self {
        let mut locations = HashMap::new();
        let mut artwork_count = 0;
        for (group_index, group) in groups.iter().enumerate() {
            for (index, artwork) in group.artworks.iter().enumerate() {
                locations
                    .entry(artwork.id.clone())
                    .or_insert(Location {
                        group: group_index,
                        index,
                    });
            }
            artwork_count += group.len();
        }
        Self {
            groups,
            locations,
            artwork_count,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[BookGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&BookGroup> {
        self.groups.get(index)
    }

    pub fn locate(&self, id: &ArtworkId) -> Option<Location> {
        self.locations.get(id).copied()
    }

    pub fn artwork_at(&self, location: Location) -> Option<&ArtworkRecord> {
        self.group(location.group)?.get(location.index)
    }

    pub fn artwork(&self, id: &ArtworkId) -> Option<&ArtworkRecord> {
        self.artwork_at(self.locate(id)?)
    }

    /// Total number of artworks across all groups.
    pub fn artwork_count(&self) -> usize {
        self.artwork_count
    }

    pub fn is_empty(&self) -> bool {
        self.artwork_count == 0
    }

    /// Artworks in display order: groups in canonical order, members in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&BookGroup, &ArtworkRecord)> {
        self.groups
            .iter()
            .flat_map(|group| group.artworks.iter().map(move |artwork| (group, artwork)))
    }
}
