//! Data model for the scripture gallery: artworks, book groups, and the
//! canonical book order used to sort them.

pub mod artwork;
pub mod canonical;
pub mod error;
pub mod group;
pub mod ids;
pub mod media;

pub use artwork::{ArtworkRecord, LocalizedText};
pub use canonical::{CanonicalOrder, PROTESTANT_CANON};
pub use error::{ModelError, Result};
pub use group::BookGroup;
pub use ids::{ArtworkId, BookId};
pub use media::{Episode, PlaylistItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_position_lookup() {
        let book = BookId::new("Genesis").unwrap();
        let mut group = BookGroup::new(book.clone());
        group.artworks.push(ArtworkRecord::new(
            ArtworkId::new("a").unwrap(),
            book.clone(),
            "Creation",
        ));
        group.artworks.push(ArtworkRecord::new(
            ArtworkId::new("c").unwrap(),
            book,
            "Flood",
        ));
        assert_eq!(group.position_of(&ArtworkId::new("c").unwrap()), Some(1));
        assert_eq!(group.position_of(&ArtworkId::new("z").unwrap()), None);
    }
}
