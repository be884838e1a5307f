// ai
//! 📦 Common data structures — the building blocks of bkx
//!
//! ---
//!
//! 🎬 COLD OPEN — INT. LIBRARY STACKS — 11:58 PM
//!
//! The shelves stretch into the dark. Somewhere in aisle 7, an e-book without
//! an author sits quietly, wondering who wrote it. Nobody knows. Not even the
//! JSON file knows. The JSON file just says `"author": null` and moves on.
//!
//! 🦆
//!
//! This module defines the humble structs every other module passes around:
//! a [`Book`], its opaque [`BookId`], and the [`SortKey`] the user picks from a
//! dropdown (or a flag, we're in a terminal, we don't have dropdowns).
//!
//! 🧠 Knowledge graph:
//! - `Book` is immutable after load. The pipeline only ever borrows it.
//! - Missing or `null` `title`/`author` become `""` at deserialize time. A book
//!   with no title still deserves to be listed. It just sorts first. Life is unfair.
//! - `BookId` keeps whatever the file gave us — number or string — and hands it back
//!   unchanged on the way out. We don't judge identities here.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// 🏷️ The identity of a book, exactly as the data file spelled it.
///
/// Some exports use integers, some use strings, some use both in the same file
/// because the export script had a long weekend. `untagged` lets serde try each.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(i64),
    Text(String),
}

impl Default for BookId {
    fn default() -> Self {
        // -- 🤷 no id at all? an empty string. honest, boring, sortable.
        BookId::Text(String::new())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{n}"),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        BookId::Number(value)
    }
}

impl From<i32> for BookId {
    fn from(value: i32) -> Self {
        BookId::Number(i64::from(value))
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId::Text(value.to_string())
    }
}

/// 📚 One e-book record. Three fields. Zero drama. (The drama is in the data.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: BookId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
}

impl Book {
    /// 🏗️ Build a book by hand. Mostly for tests and the in-memory demo shelf.
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

/// 🕳️ `null` and "missing" get the same treatment: the type's default.
/// serde's `default` only covers the missing case, `null` needs this errand boy.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 🔄 Which column decides the order. Two options. The dropdown had two options too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "author", alias = "by-author")]
    ByAuthor,
    #[serde(rename = "title", alias = "by-title")]
    ByTitle,
}

impl SortKey {
    /// 🎯 Pluck the field this key sorts on.
    pub fn field<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SortKey::ByAuthor => &book.author,
            SortKey::ByTitle => &book.title,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::ByAuthor => f.write_str("author"),
            SortKey::ByTitle => f.write_str("title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_one_where_ids_come_as_numbers_and_strings_in_the_same_file() {
        let raw = r#"[{"id":1,"title":"Zeta","author":"Adams"},{"id":"b-2","title":"Alpha","author":"Zeta"}]"#;
        let books: Vec<Book> =
            serde_json::from_str(raw).expect("💀 Mixed ids should parse. Both kinds are welcome.");

        assert_eq!(books[0].id, BookId::Number(1));
        assert_eq!(books[1].id, BookId::Text("b-2".to_string()));
        assert_eq!(books[0].id.to_string(), "1");
    }

    #[test]
    fn the_one_where_the_author_went_missing_and_title_was_null() {
        let raw = r#"[{"id":7,"title":null},{"id":8,"title":"Only Title","extra":"ignored"}]"#;
        let books: Vec<Book> = serde_json::from_str(raw)
            .expect("💀 Missing and null fields should default, not explode.");

        assert_eq!(books[0].title, "");
        assert_eq!(books[0].author, "");
        assert_eq!(books[1].title, "Only Title");
        assert_eq!(books[1].author, "");
    }

    #[test]
    fn the_one_where_sort_keys_answer_to_both_names() {
        let by_title: SortKey = serde_json::from_str(r#""by-title""#).expect("💀 alias");
        let by_author: SortKey = serde_json::from_str(r#""author""#).expect("💀 rename");
        assert_eq!(by_title, SortKey::ByTitle);
        assert_eq!(by_author, SortKey::ByAuthor);
        assert_eq!(SortKey::default(), SortKey::ByAuthor);
    }

    #[test]
    fn the_one_where_ids_leave_the_way_they_came_in() {
        let book = Book::new(42, "Hitchhiking", "Adams");
        let json = serde_json::to_string(&book).expect("💀 serialize");
        assert_eq!(json, r#"{"id":42,"title":"Hitchhiking","author":"Adams"}"#);
    }
}
