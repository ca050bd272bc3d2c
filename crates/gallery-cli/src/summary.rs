//! Table output for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gallery_content::Translator;
use gallery_core::Gallery;
use gallery_core::component::book_label;
use gallery_model::{CanonicalOrder, Episode};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// `(position, book, label)` for every book in the canonical order.
pub fn book_rows(order: &CanonicalOrder, translator: &dyn Translator) -> Vec<[String; 3]> {
    order
        .books()
        .iter()
        .enumerate()
        .map(|(index, book)| {
            [
                (index + 1).to_string(),
                book.to_string(),
                book_label(translator, book),
            ]
        })
        .collect()
}

pub fn books_table(order: &CanonicalOrder, translator: &dyn Translator) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Book"), header_cell("Label")]);
    apply_table_style(&mut table);
    for [position, book, label] in book_rows(order, translator) {
        table.add_row(vec![
            Cell::new(position).set_alignment(CellAlignment::Right),
            Cell::new(book),
            Cell::new(label),
        ]);
    }
    table
}

/// `(book label, n/count, id, title, section)` in display order.
pub fn group_rows(gallery: &Gallery, translator: &dyn Translator) -> Vec<[String; 5]> {
    let mut rows = Vec::with_capacity(gallery.artwork_count());
    for group in gallery.groups() {
        let label = book_label(translator, &group.book);
        for (index, artwork) in group.artworks.iter().enumerate() {
            rows.push([
                label.clone(),
                format!("{}/{}", index + 1, group.len()),
                artwork.id.to_string(),
                artwork.title.clone(),
                artwork.section.clone(),
            ]);
        }
    }
    rows
}

pub fn groups_table(gallery: &Gallery, translator: &dyn Translator) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Book"),
        header_cell("#"),
        header_cell("Artwork"),
        header_cell("Title"),
        header_cell("Section"),
    ]);
    apply_table_style(&mut table);
    let mut previous: Option<String> = None;
    for [label, position, id, title, section] in group_rows(gallery, translator) {
        let book_cell = if previous.as_deref() == Some(label.as_str()) {
            dim_cell("")
        } else {
            Cell::new(&label).add_attribute(Attribute::Bold)
        };
        previous = Some(label);
        table.add_row(vec![
            book_cell,
            Cell::new(position).set_alignment(CellAlignment::Right),
            Cell::new(id),
            Cell::new(title),
            dim_cell(section),
        ]);
    }
    table
}

pub fn match_table(title: &str, episodes: &[Episode], matched: Option<&Episode>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Episode"),
        header_cell("Number"),
        header_cell("Title"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    for episode in episodes {
        let is_match = matched.is_some_and(|hit| hit.id == episode.id);
        table.add_row(vec![
            Cell::new(&episode.id),
            episode
                .number
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&episode.title),
            if is_match {
                Cell::new(format!("<- {title}")).fg(Color::Green)
            } else {
                dim_cell("")
            },
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
