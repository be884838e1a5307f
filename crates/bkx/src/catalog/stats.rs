//! 📊 The header counters: how many authors, how many books, how many results.

use serde::Serialize;

use crate::progress::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub author_count: usize,
    pub book_count: usize,
    pub result_count: usize,
}

impl CatalogStats {
    /// 💬 "Showing 1,234 of 5,678 books" — the line under the search box.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} books",
            format_number(self.result_count as u64),
            format_number(self.book_count as u64)
        )
    }
}
