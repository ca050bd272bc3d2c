#![allow(dead_code)]

use gallery_model::{ArtworkId, ArtworkRecord, BookId, CanonicalOrder, LocalizedText};

pub fn id(value: &str) -> ArtworkId {
    ArtworkId::new(value).unwrap()
}

pub fn record(artwork: &str, book: &str) -> ArtworkRecord {
    ArtworkRecord::new(id(artwork), BookId::new(book).unwrap(), artwork.to_uppercase())
        .with_image(format!("/art/{artwork}.webp"))
}

/// `[a:Genesis, b:Exodus, c:Genesis]`
pub fn scenario_records() -> Vec<ArtworkRecord> {
    vec![
        record("a", "Genesis"),
        record("b", "Exodus"),
        record("c", "Genesis"),
    ]
}

pub fn scenario_order() -> CanonicalOrder {
    CanonicalOrder::from_names(["Genesis", "Exodus"]).unwrap()
}

pub fn with_scripture(record: ArtworkRecord, en: &str, es: &str) -> ArtworkRecord {
    record.with_scripture(LocalizedText::new().with("en", en).with("es", es))
}
