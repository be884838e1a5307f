//! 🎨 Render — the terminal stands in for the browser.
//!
//! A view goes in, a string comes out. No I/O here: the CLI decides where the string goes.
//!
//! ```text
//!   Showing 45 of 45 books
//!    Title                Author     ID
//!    Alpha                Zeta       2
//!    ...
//!   ← 1 … 3 4 [5] 6 7 … 10 →
//! ```
//!
//! 🍽️ comfy-table with the NOTHING preset, because we're minimalists. And the borders looked bad.

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::NOTHING};

use crate::catalog::{CatalogStats, CatalogView, PageButton, PageControls};
use crate::progress::format_number;

/// 📭 What the user sees when the filters leave nothing standing.
pub const NO_RESULTS: &str = "No books found matching your criteria.";

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// 🖼️ The whole screen: summary, grid (or the "no results" line), pagination strip.
pub fn render_view(view: &CatalogView) -> String {
    let mut out = view.stats.summary();
    out.push('\n');

    if view.is_empty() {
        out.push_str(NO_RESULTS);
        return out;
    }

    let mut table = new_table();
    table.set_header(vec!["Title", "Author", "ID"]);
    for book in &view.books {
        table.add_row(vec![
            Cell::new(&book.title),
            Cell::new(&book.author),
            Cell::new(book.id.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    out.push_str(&table.to_string());

    // -- 🔘 one page? no strip. the buttons would only point at themselves.
    if view.controls.total_pages > 1 {
        out.push('\n');
        out.push_str(&render_pagination(&view.controls));
    }
    out
}

/// 🔘 `← 1 … 3 4 [5] 6 7 … 10 →`. Disabled arrows become `·`.
pub fn render_pagination(controls: &PageControls) -> String {
    let mut parts = Vec::with_capacity(controls.buttons.len() + 2);
    parts.push(if controls.prev.is_some() { "←" } else { "·" }.to_string());
    for button in &controls.buttons {
        parts.push(match button {
            PageButton::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageButton::Page { number, .. } => number.to_string(),
            PageButton::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if controls.next.is_some() { "→" } else { "·" }.to_string());
    parts.join(" ")
}

/// 📇 The author dropdown, minus the dropdown.
pub fn render_authors(authors: &[String]) -> String {
    let mut table = new_table();
    table.set_header(vec!["#", "Author"]);
    for (i, author) in authors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(author),
        ]);
    }
    table.to_string()
}

/// 📊 The glass panel of counters from the top of the catalog page.
pub fn render_stats(stats: &CatalogStats) -> String {
    let mut table = new_table();
    for (count, label) in [
        (stats.author_count, "Authors"),
        (stats.book_count, "Books"),
        (stats.result_count, "Results"),
    ] {
        table.add_row(vec![
            Cell::new(format_number(count as u64)).set_alignment(CellAlignment::Right),
            Cell::new(label),
        ]);
    }
    table.to_string()
}

/// 🦆 For the scripts: the view as pretty JSON.
pub fn view_to_json(view: &CatalogView) -> Result<String> {
    serde_json::to_string_pretty(view).context("💀 The view refused to become JSON. It was fine a second ago.")
}
