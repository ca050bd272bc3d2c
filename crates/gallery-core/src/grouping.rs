//! Grouping of artworks by book.

use std::collections::HashMap;

use gallery_model::{ArtworkRecord, BookGroup, BookId};

/// Groups records by their `book` field.
///
/// Groups appear in the order their book is first encountered, and each
/// group keeps its records in input order. Every record lands in exactly one
/// group.
pub fn group_by_book<I>(records: I) -> Vec<BookGroup>
where
    I: IntoIterator<Item = ArtworkRecord>,
{
    let mut groups: Vec<BookGroup> = Vec::new();
    let mut slots: HashMap<BookId, usize> = HashMap::new();
    for record in records {
        let slot = *slots.entry(record.book.clone()).or_insert_with(|| {
            groups.push(BookGroup::new(record.book.clone()));
            groups.len() - 1
        });
        groups[slot].artworks.push(record);
    }
    groups
}
