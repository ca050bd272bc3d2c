//! Canonical ordering of book groups.

use gallery_model::{ArtworkRecord, BookGroup, CanonicalOrder};
use tracing::debug;

use crate::grouping::group_by_book;

/// Orders groups by their book's position in `order`.
///
/// Books missing from the table sort after every known book and keep the
/// relative order they had on input (the sort is stable).
pub fn sort_canonical(mut groups: Vec<BookGroup>, order: &CanonicalOrder) -> Vec<BookGroup> {
    for group in groups.iter().filter(|group| !order.contains(&group.book)) {
        debug!(
            book = %group.book,
            artwork_count = group.len(),
            "book not in canonical order, placing after known books"
        );
    }
    groups.sort_by_key(|group| order.position(&group.book).unwrap_or(usize::MAX));
    groups
}

/// Groups `records` by book and sorts the groups canonically.
pub fn arrange<I>(records: I, order: &CanonicalOrder) -> Vec<BookGroup>
where
    I: IntoIterator<Item = ArtworkRecord>,
{
    sort_canonical(group_by_book(records), order)
}
