//! Canonical book order.
//!
//! The table is the only sort key for book groups. It is built once and never
//! mutated; books that are not in the table sort after every known book.

use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::ids::BookId;

/// The 66 books of the Protestant canon in traditional order.
pub const PROTESTANT_CANON: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Ordered, duplicate-free list of known book ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrder {
    books: Vec<BookId>,
    positions: HashMap<BookId, usize>,
}

impl CanonicalOrder {
    /// Builds a table from an ordered list of books.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateBook`] if a book is listed twice.
    pub fn new<I>(books: I) -> Result<Self>
    where
        I: IntoIterator<Item = BookId>,
    {
        let mut ordered = Vec::new();
        let mut positions = HashMap::new();
        for book in books {
            if positions.contains_key(&book) {
                return Err(ModelError::DuplicateBook(book.to_string()));
            }
            positions.insert(book.clone(), ordered.len());
            ordered.push(book);
        }
        Ok(Self {
            books: ordered,
            positions,
        })
    }

    /// Parses and validates a list of book names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let books = names
            .into_iter()
            .map(BookId::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(books)
    }

    pub fn protestant() -> Self {
        let books: Vec<BookId> = PROTESTANT_CANON
            .into_iter()
            .map(BookId::from_static)
            .collect();
        let positions = books
            .iter()
            .enumerate()
            .map(|(index, book)| (book.clone(), index))
            .collect();
        Self { books, positions }
    }

    /// Position of `book` in the table, `None` for unknown books.
    pub fn position(&self, book: &BookId) -> Option<usize> {
        self.positions.get(book).copied()
    }

    pub fn contains(&self, book: &BookId) -> bool {
        self.positions.contains_key(book)
    }

    pub fn books(&self) -> &[BookId] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for CanonicalOrder {
    fn default() -> Self {
        Self::protestant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protestant_canon_has_no_duplicates() {
        let order = CanonicalOrder::from_names(PROTESTANT_CANON).expect("canon is valid");
        assert_eq!(order.len(), 66);
        assert_eq!(order, CanonicalOrder::protestant());
    }

    #[test]
    fn revelation_is_last() {
        let order = CanonicalOrder::default();
        let revelation = BookId::new("Revelation").unwrap();
        assert_eq!(order.position(&revelation), Some(65));
    }
}
