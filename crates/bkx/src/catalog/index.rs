//! 📇 The author index — every name on the shelf, once, in order.
//!
//! Feeds the author filter. Recomputing it always gives the same answer,
//! so callers may cache it (the state does) or not (tests don't). Either way, fine.

use std::collections::HashSet;

use crate::catalog::collate::CollationKey;
use crate::common::Book;

/// 📚 Distinct author names, locale-sorted ascending, no duplicates.
///
/// Duplicates are exact-string duplicates: "adams" and "Adams" are two authors,
/// because the author filter is case-sensitive and the index must offer both.
pub fn author_index(books: &[Book]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(books.len());
    let mut authors: Vec<String> = books
        .iter()
        .filter(|book| seen.insert(book.author.as_str()))
        .map(|book| book.author.clone())
        .collect();
    authors.sort_by_cached_key(|author| CollationKey::new(author));
    authors
}
