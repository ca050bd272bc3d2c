//! Lightbox selection and incremental reveal.

mod common;

use gallery_core::{Gallery, OpenSelection, RevealController, Selection, Step, Transition};
use gallery_model::{BookId, CanonicalOrder};
use proptest::prelude::*;

use common::{id, record, scenario_order, scenario_records};

fn scenario_gallery() -> Gallery {
    Gallery::arrange(scenario_records(), &scenario_order())
}

fn open_state(selection: &Selection) -> (&str, &str, usize) {
    let open = selection.open().expect("selection is open");
    (open.artwork.as_str(), open.book.as_str(), open.index)
}

#[test]
fn select_opens_with_group_and_index() {
    let gallery = scenario_gallery();
    let mut selection = Selection::default();
    assert_eq!(selection.select(&gallery, &id("c")), Transition::Changed);
    assert_eq!(
        selection,
        Selection::Open(OpenSelection {
            artwork: id("c"),
            book: BookId::new("Genesis").unwrap(),
            group: 0,
            index: 1,
        })
    );
}

#[test]
fn select_unknown_id_stays_closed() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    assert_eq!(selection.select(&gallery, &id("nope")), Transition::Unchanged);
    assert_eq!(selection, Selection::Closed);
}

#[test]
fn select_unknown_id_keeps_open_selection() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("b"));
    assert_eq!(selection.select(&gallery, &id("nope")), Transition::Unchanged);
    assert_eq!(selection.artwork_id(), Some(&id("b")));
}

#[test]
fn select_while_open_replaces_selection() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("a"));
    assert_eq!(selection.select(&gallery, &id("b")), Transition::Changed);
    assert_eq!(open_state(&selection), ("b", "Exodus", 0));
    assert_eq!(selection.select(&gallery, &id("b")), Transition::Unchanged);
}

#[test]
fn advance_wraps_from_last_to_first() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("c"));
    assert_eq!(selection.advance(&gallery, Step::Next), Transition::Changed);
    assert_eq!(open_state(&selection), ("a", "Genesis", 0));
}

#[test]
fn advance_wraps_from_first_to_last() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("a"));
    selection.advance(&gallery, Step::Previous);
    assert_eq!(open_state(&selection), ("c", "Genesis", 1));
}

#[test]
fn advance_in_single_item_group_is_a_no_op() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("b"));
    assert_eq!(selection.advance(&gallery, Step::Next), Transition::Unchanged);
    assert_eq!(open_state(&selection), ("b", "Exodus", 0));
}

#[test]
fn advance_and_close_when_closed_do_nothing() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    assert_eq!(selection.advance(&gallery, Step::Next), Transition::Unchanged);
    assert_eq!(selection.close(), Transition::Unchanged);
    assert_eq!(selection.carousel_settled(&gallery, 0), Transition::Unchanged);
}

#[test]
fn carousel_index_updates_artwork_within_group() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("a"));
    assert_eq!(selection.carousel_settled(&gallery, 1), Transition::Changed);
    assert_eq!(open_state(&selection), ("c", "Genesis", 1));
    assert_eq!(selection.carousel_settled(&gallery, 1), Transition::Unchanged);
}

#[test]
fn carousel_index_out_of_range_is_ignored() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("a"));
    assert_eq!(selection.carousel_settled(&gallery, 2), Transition::Unchanged);
    assert_eq!(open_state(&selection), ("a", "Genesis", 0));
}

#[test]
fn close_returns_to_closed() {
    let gallery = scenario_gallery();
    let mut selection = Selection::Closed;
    selection.select(&gallery, &id("a"));
    assert_eq!(selection.close(), Transition::Changed);
    assert!(!selection.is_open());
}

fn sized_gallery(size: usize) -> Gallery {
    let records = (0..size).map(|i| record(&format!("p{i}"), "Psalms"));
    Gallery::arrange(records, &CanonicalOrder::default())
}

proptest! {
    #[test]
    fn next_then_previous_returns_to_start(size in 1usize..20, start in 0usize..20) {
        let start = start % size;
        let gallery = sized_gallery(size);
        let mut selection = Selection::Closed;
        selection.select(&gallery, &id(&format!("p{start}")));
        let before = selection.clone();

        selection.advance(&gallery, Step::Next);
        selection.advance(&gallery, Step::Previous);
        prop_assert_eq!(&selection, &before);

        selection.advance(&gallery, Step::Previous);
        selection.advance(&gallery, Step::Next);
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn index_stays_valid_under_any_steps(
        size in 1usize..10,
        steps in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let gallery = sized_gallery(size);
        let mut selection = Selection::Closed;
        selection.select(&gallery, &id("p0"));
        for forward in steps {
            let step = if forward { Step::Next } else { Step::Previous };
            selection.advance(&gallery, step);
            let open = selection.open().unwrap();
            prop_assert!(open.index < size);
            let expected = format!("p{}", open.index);
            prop_assert_eq!(open.artwork.as_str(), expected.as_str());
        }
    }

    #[test]
    fn reveal_count_is_clamped_sum(
        initial in 0usize..50,
        step in 1usize..20,
        total in 0usize..200,
        triggers in 0usize..30,
    ) {
        let mut reveal = RevealController::new(initial, step, total);
        let mut last = reveal.visible_count();
        for _ in 0..triggers {
            reveal.on_sentinel_visible();
            prop_assert!(reveal.visible_count() >= last);
            last = reveal.visible_count();
        }
        prop_assert_eq!(reveal.visible_count(), (initial + triggers * step).min(total));

        let at_max = reveal.visible_count() == total;
        let grew = reveal.on_sentinel_visible();
        if at_max {
            prop_assert!(!grew);
            prop_assert_eq!(reveal.visible_count(), total);
        }
    }
}

#[test]
fn reveal_stops_at_total() {
    let mut reveal = RevealController::new(12, 12, 30);
    assert!(reveal.on_sentinel_visible());
    assert_eq!(reveal.visible_count(), 24);
    assert!(reveal.on_sentinel_visible());
    assert_eq!(reveal.visible_count(), 30);
    assert!(!reveal.on_sentinel_visible());
    assert_eq!(reveal.visible_count(), 30);
    assert!(!reveal.has_more());
}
