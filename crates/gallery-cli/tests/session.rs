//! Scripted sessions and their text rendering.

use std::fs;

use gallery_cli::session::{SessionEvent, current_url, describe_view, run_session};
use gallery_cli::summary::{book_rows, group_rows};
use gallery_content::{JsonFileSource, NoTranslations, StaticSource, TranslationCatalog};
use gallery_core::{Gallery, GalleryConfig, GalleryContext, MemoryNavigator, Navigator};
use gallery_model::{ArtworkId, ArtworkRecord, BookId, CanonicalOrder, LocalizedText};

fn artwork(id: &str, book: &str, title: &str) -> ArtworkRecord {
    ArtworkRecord::new(ArtworkId::new(id).unwrap(), BookId::new(book).unwrap(), title)
        .with_image(format!("/art/{id}.webp"))
}

fn records() -> Vec<ArtworkRecord> {
    vec![
        artwork("a", "Genesis", "Creation"),
        artwork("b", "Exodus", "Burning Bush"),
        artwork("c", "Genesis", "The Flood").with_scripture(
            LocalizedText::new()
                .with("en", "And the waters prevailed")
                .with("es", "Y las aguas crecieron"),
        ),
    ]
}

fn context() -> GalleryContext {
    GalleryContext::new(
        GalleryConfig::default(),
        Box::new(StaticSource::new(records())),
        Box::new(NoTranslations),
    )
    .unwrap()
}

fn events(raw: &[&str]) -> Vec<SessionEvent> {
    raw.iter().map(|event| event.parse().unwrap()).collect()
}

#[test]
fn mount_view_from_shared_link() {
    let context = context();
    let query = vec![("image".to_string(), "c".to_string())];

    let report = run_session(&context, &query, false, &[]);

    insta::assert_snapshot!(describe_view(&report.initial), @r"
    Genesis (2)
      a  Creation
      c  The Flood
    Exodus (1)
      b  Burning Bush
    showing 3 of 3
    lightbox: The Flood [Genesis 2/2] /art/c.webp
      And the waters prevailed
    ");
    assert_eq!(report.initial_url, "/gallery?image=c");
    assert!(report.history.is_empty());
}

#[test]
fn session_steps_record_urls_and_echoes() {
    let context = context();
    let query = vec![("image".to_string(), "c".to_string())];

    let report = run_session(
        &context,
        &query,
        false,
        &events(&["next", "nav", "close", "nav", "nav"]),
    );

    let steps: Vec<(&str, bool, &str)> = report
        .steps
        .iter()
        .map(|step| (step.event.as_str(), step.changed, step.url.as_str()))
        .collect();
    assert_eq!(
        steps,
        vec![
            ("next", true, "/gallery?image=a"),
            ("nav", false, "/gallery?image=a"),
            ("close", true, "/gallery"),
            ("nav", false, "/gallery"),
            ("nav", false, "/gallery"),
        ]
    );
    assert_eq!(report.history, ["/gallery?image=a", "/gallery"]);
    assert!(report.steps[2].view.lightbox.is_none());
}

#[test]
fn swipe_and_reveal_events() {
    let config = GalleryConfig {
        reveal: gallery_core::RevealConfig {
            initial: 1,
            step: 1,
        },
        ..GalleryConfig::default()
    };
    let context = GalleryContext::new(
        config,
        Box::new(StaticSource::new(records())),
        Box::new(NoTranslations),
    )
    .unwrap();

    let report = run_session(
        &context,
        &[],
        true,
        &events(&["open:a", "swipe:1", "swipe:5", "reveal", "reveal", "reveal"]),
    );

    let changed: Vec<bool> = report.steps.iter().map(|step| step.changed).collect();
    assert_eq!(changed, vec![true, true, false, true, true, false]);
    let last = report.steps.last().unwrap();
    assert_eq!(last.view.visible_count, 3);
    assert_eq!(last.view.lightbox.as_ref().map(|l| l.id.as_str()), Some("c"));
    assert!(last.view.is_member);
}

#[test]
fn unavailable_content_renders_notice() {
    let context = GalleryContext::new(
        GalleryConfig::default(),
        Box::new(StaticSource::failing("timeout")),
        Box::new(NoTranslations),
    )
    .unwrap();

    let report = run_session(&context, &[], false, &events(&["open:a"]));

    insta::assert_snapshot!(describe_view(&report.steps[0].view), @r"
    ! Artworks could not be loaded. Please try again later.
    showing 0 of 0
    lightbox: closed
    ");
    assert!(!report.steps[0].changed);
}

#[test]
fn session_over_json_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("artworks.json");
    fs::write(
        &path,
        r#"{ "artworks": [
            { "id": "r1", "title": "Gleaning", "book": "Ruth", "image": "/art/r1.webp" },
            { "id": "g1", "title": "Creation", "book": "Genesis", "image": "/art/g1.webp" }
        ] }"#,
    )
    .unwrap();
    let context = GalleryContext::new(
        GalleryConfig::default(),
        Box::new(JsonFileSource::new(&path)),
        Box::new(NoTranslations),
    )
    .unwrap();

    let report = run_session(&context, &[], false, &events(&["open:r1", "next"]));

    let books: Vec<&str> = report
        .initial
        .sections
        .iter()
        .map(|section| section.book.as_str())
        .collect();
    assert_eq!(books, vec!["Genesis", "Ruth"]);
    assert!(!report.steps[1].changed);
    assert_eq!(report.history, ["/gallery?image=r1"]);
}

#[test]
fn current_url_follows_router_query() {
    let mut navigator = MemoryNavigator::with_query([("lang", "es")]);
    assert_eq!(current_url(&navigator, "/gallery"), "/gallery?lang=es");

    let mut query = navigator.query().clone();
    query.insert("image".into(), "a".into());
    navigator.replace("/gallery", &query).unwrap();
    query.insert("lang".into(), "en".into());
    navigator.navigate(query);

    assert_eq!(navigator.history(), ["/gallery?image=a&lang=es"]);
    assert_eq!(current_url(&navigator, "/gallery"), "/gallery?image=a&lang=en");
}

#[test]
fn table_rows_use_translated_labels() {
    let catalog = TranslationCatalog::new("es", "en").with_entry("es", "books.Genesis", "Génesis");
    let order = CanonicalOrder::from_names(["Genesis", "Exodus"]).unwrap();

    let books = book_rows(&order, &catalog);
    assert_eq!(
        books,
        vec![
            ["1".to_string(), "Genesis".to_string(), "Génesis".to_string()],
            ["2".to_string(), "Exodus".to_string(), "Exodus".to_string()],
        ]
    );

    let gallery = Gallery::arrange(records(), &order);
    let rows: Vec<String> = group_rows(&gallery, &catalog)
        .into_iter()
        .map(|row| row[..4].join(" | "))
        .collect();
    insta::assert_snapshot!(rows.join("\n"), @r"
    Génesis | 1/2 | a | Creation
    Génesis | 2/2 | c | The Flood
    Exodus | 1/1 | b | Burning Bush
    ");
}
