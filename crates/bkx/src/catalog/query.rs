//! 🔍 The query pipeline — text filter → author filter → stable sort.
//!
//! 🧠 Knowledge graph:
//! - Pure. Same books + same [`Query`] = same answer, every time, on every machine.
//! - Borrows the record set, returns `Vec<&Book>`. No clones until someone renders.
//! - Empty output is a valid answer ("no results"), never an error.
//! - Every surface (one-shot search, browse mode, JSON output) goes through [`run_query`].
//!   One pipeline. Not three copy-pasted ones that drift apart. We've seen that movie.

use serde::Serialize;

use crate::catalog::collate::CollationKey;
use crate::common::{Book, SortKey};

/// 🎛️ Everything the user can turn: the search box, the author dropdown, the sort dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub text: String,
    /// `None` is the "all authors" sentinel.
    pub author: Option<String>,
    pub sort: SortKey,
}

impl Query {
    pub fn new(text: impl Into<String>, author: Option<String>, sort: SortKey) -> Self {
        Self {
            text: text.into(),
            author: author.filter(|a| !a.is_empty()),
            sort,
        }
    }
}

/// 🔡 Case-insensitive substring match on title OR author. Plain lowercasing, no Unicode heroics.
pub fn matches_text(book: &Book, needle_lower: &str) -> bool {
    book.title.to_lowercase().contains(needle_lower)
        || book.author.to_lowercase().contains(needle_lower)
}

/// 📝 Step 1: keep what the search box asked for. Empty text keeps everything.
pub fn filter_text<'a>(books: impl IntoIterator<Item = &'a Book>, text: &str) -> Vec<&'a Book> {
    if text.is_empty() {
        return books.into_iter().collect();
    }
    let needle = text.to_lowercase();
    books
        .into_iter()
        .filter(|book| matches_text(book, &needle))
        .collect()
}

/// 👤 Step 2: exact, case-sensitive author match. `None` or `""` keeps everything.
pub fn filter_author<'a>(books: Vec<&'a Book>, author: Option<&str>) -> Vec<&'a Book> {
    match author {
        Some(author) if !author.is_empty() => {
            books.into_iter().filter(|book| book.author == author).collect()
        }
        _ => books,
    }
}

/// 🔄 Step 3: stable ascending sort by the chosen field. Equal keys keep their input order.
pub fn sort_books(books: &mut [&Book], sort: SortKey) {
    // -- sort_by_cached_key is stable: ties keep their input order
    books.sort_by_cached_key(|book| CollationKey::new(sort.field(book)));
}

/// 🚀 The whole pipeline, in order.
pub fn run_query<'a>(books: &'a [Book], query: &Query) -> Vec<&'a Book> {
    let matched = filter_text(books, &query.text);
    let mut matched = filter_author(matched, query.author.as_deref());
    sort_books(&mut matched, query.sort);
    matched
}
