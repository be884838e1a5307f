// ai
//! 🎬 *[a search box, two dropdowns, and a row of page buttons walk into a struct.]*
//! *["who owns the current page?" asks the search box. nobody answers. it was a global.]*
//! *[the reducer enters. the globals leave. the tests finally pass on the first try.]*
//!
//! 🔄 **Catalog state** — one value, one update function, zero shared mutable globals.
//!
//! 🧠 Knowledge graph:
//! - [`CatalogState`] is cheap to clone: the books and the author index sit behind `Arc`s,
//!   the rest is a query and a page number.
//! - [`CatalogState::reduce`] takes `&self` and an [`Action`] and returns the NEXT state.
//!   The old one is untouched. Time travel debugging for free. 🦆
//! - Filter actions (`SetQuery`, `SetAuthor`, `SetSort`, `Reset`) park the page on 1.
//!   A stale page 9 pointing into a 2-page result list is how bugs are born.
//! - Page actions outside `[1, total_pages]` return an identical state. Even if the
//!   renderer forgot to grey out the button.
//! - [`CatalogState::view`] derives everything a renderer needs in one go.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, trace};

use crate::app_config::CatalogConfig;
use crate::catalog::index::author_index;
use crate::catalog::pager::{PageControls, Pager};
use crate::catalog::query::{Query, run_query};
use crate::catalog::stats::CatalogStats;
use crate::common::{Book, SortKey};

/// 🎛️ Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetQuery(String),
    /// `None` (or `Some("")`) clears the author filter.
    SetAuthor(Option<String>),
    SetSort(SortKey),
    GoToPage(usize),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Back to the defaults: empty query, all authors, configured sort, page 1.
    Reset,
}

/// 📦 Everything the catalog knows at one instant.
#[derive(Debug, Clone)]
pub struct CatalogState {
    books: Arc<[Book]>,
    authors: Arc<[String]>,
    query: Query,
    default_sort: SortKey,
    page: usize,
    pager: Pager,
}

/// 🖼️ A render-ready snapshot of a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub query: Query,
    pub page: usize,
    pub total_pages: usize,
    pub books: Vec<Book>,
    pub controls: PageControls,
    pub stats: CatalogStats,
}

impl CatalogView {
    /// 🕳️ Nothing matched. The renderer shows "no results" instead of an empty grid.
    pub fn is_empty(&self) -> bool {
        self.stats.result_count == 0
    }
}

impl CatalogState {
    /// 🚀 Fresh state over `books` with the default query and page 1.
    pub fn new(books: Vec<Book>, pager: Pager, default_sort: SortKey) -> Self {
        let authors: Arc<[String]> = author_index(&books).into();
        debug!(
            "📇 catalog ready: {} books by {} authors",
            books.len(),
            authors.len()
        );
        Self {
            books: books.into(),
            authors,
            query: Query::new("", None, default_sort),
            default_sort,
            page: 1,
            pager,
        }
    }

    /// 🔧 Fresh state using the `[catalog]` section of the config.
    pub fn from_config(books: Vec<Book>, config: &CatalogConfig) -> Result<Self> {
        let pager = Pager::new(config.page_size, config.window_radius)?;
        Ok(Self::new(books, pager, config.default_sort))
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// 🔍 The filtered, sorted result list for the current query.
    pub fn results(&self) -> Vec<&Book> {
        run_query(&self.books, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.results().len())
    }

    /// 🔄 The next state after `action`. `self` is never touched.
    pub fn reduce(&self, action: Action) -> Self {
        trace!("🔄 reducing {:?}", action);
        match action {
            Action::SetQuery(text) => self.with_query(Query { text, ..self.query.clone() }),
            Action::SetAuthor(author) => self.with_query(Query {
                author: author.filter(|a| !a.is_empty()),
                ..self.query.clone()
            }),
            Action::SetSort(sort) => self.with_query(Query { sort, ..self.query.clone() }),
            Action::Reset => self.with_query(Query::new("", None, self.default_sort)),
            Action::GoToPage(page) => self.with_page(page),
            Action::NextPage => self.with_page(self.page.saturating_add(1)),
            Action::PrevPage => self.with_page(self.page.saturating_sub(1)),
            Action::FirstPage => self.with_page(1),
            Action::LastPage => self.with_page(self.total_pages()),
        }
    }

    /// 🖼️ Derive the view: visible page, controls, counters.
    pub fn view(&self) -> CatalogView {
        let results = self.results();
        let books = self
            .pager
            .slice(&results, self.page)
            .iter()
            .map(|book| (*book).clone())
            .collect();
        CatalogView {
            query: self.query.clone(),
            page: self.page,
            total_pages: self.pager.total_pages(results.len()),
            books,
            controls: self.pager.controls(results.len(), self.page),
            stats: CatalogStats {
                author_count: self.authors.len(),
                book_count: self.books.len(),
                result_count: results.len(),
            },
        }
    }

    fn with_query(&self, query: Query) -> Self {
        Self {
            query,
            page: 1,
            ..self.clone()
        }
    }

    fn with_page(&self, requested: usize) -> Self {
        let len = self.results().len();
        if !self.pager.accepts(len, requested) {
            debug!(
                "🚫 page {} is outside 1..={}, staying on page {}",
                requested,
                self.pager.total_pages(len),
                self.page
            );
            return self.clone();
        }
        Self {
            page: requested,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BookId;

    fn shelf_of(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book::new(i as i64, format!("Title {i:03}"), format!("Author {:02}", i % 7)))
            .collect()
    }

    fn state_of(count: usize, page_size: usize) -> CatalogState {
        let pager = Pager::new(page_size, 2).expect("💀 non-zero page size");
        CatalogState::new(shelf_of(count), pager, SortKey::ByTitle)
    }

    #[test]
    fn the_one_where_page_three_of_45_has_five_books_and_page_four_is_a_no() {
        let state = state_of(45, 20).reduce(Action::GoToPage(3));
        let view = state.view();
        assert_eq!(view.page, 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.books.len(), 5);
        assert_eq!(view.books[0].id, BookId::Number(40));

        let still_three = state.reduce(Action::GoToPage(4));
        assert_eq!(still_three.page(), 3);
        assert_eq!(still_three.view(), view);
    }

    #[test]
    fn the_one_where_the_next_arrow_at_the_end_goes_nowhere() {
        let last = state_of(45, 20).reduce(Action::LastPage);
        assert_eq!(last.page(), 3);
        assert_eq!(last.reduce(Action::NextPage).page(), 3);
        let first = last.reduce(Action::FirstPage);
        assert_eq!(first.page(), 1);
        assert_eq!(first.reduce(Action::PrevPage).page(), 1);
        assert_eq!(first.reduce(Action::GoToPage(0)).page(), 1);
        assert_eq!(first.reduce(Action::NextPage).page(), 2);
    }

    #[test]
    fn the_one_where_searching_sends_you_back_to_page_one() {
        let deep = state_of(100, 10).reduce(Action::GoToPage(7));
        assert_eq!(deep.page(), 7);

        let searched = deep.reduce(Action::SetQuery("title 00".to_string()));
        assert_eq!(searched.page(), 1);
        assert_eq!(searched.view().stats.result_count, 10);

        assert_eq!(deep.reduce(Action::SetSort(SortKey::ByAuthor)).page(), 1);
        assert_eq!(
            deep.reduce(Action::SetAuthor(Some("Author 03".to_string()))).page(),
            1
        );
        // -- 🕰️ the old state is exactly where we left it
        assert_eq!(deep.page(), 7);
    }

    #[test]
    fn the_one_where_no_results_still_sits_on_page_one() {
        let state = state_of(45, 20).reduce(Action::SetQuery("nomatch".to_string()));
        let view = state.view();
        assert!(view.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
        assert!(view.controls.buttons.is_empty());
        assert_eq!(state.reduce(Action::GoToPage(1)).page(), 1);
        assert_eq!(state.reduce(Action::LastPage).page(), 1);
    }

    #[test]
    fn the_one_where_reset_forgets_everything_but_the_books() {
        let state = state_of(45, 20)
            .reduce(Action::SetQuery("7".to_string()))
            .reduce(Action::SetAuthor(Some("Author 00".to_string())))
            .reduce(Action::SetSort(SortKey::ByAuthor))
            .reduce(Action::Reset);
        assert_eq!(state.query(), &Query::new("", None, SortKey::ByTitle));
        assert_eq!(state.view().stats.result_count, 45);
    }

    #[test]
    fn the_one_where_an_empty_author_is_the_all_authors_option() {
        let state = state_of(14, 20)
            .reduce(Action::SetAuthor(Some("Author 01".to_string())))
            .reduce(Action::SetAuthor(Some(String::new())));
        assert_eq!(state.query().author, None);
        assert_eq!(state.view().stats.result_count, 14);
    }

    #[test]
    fn the_one_where_the_stats_count_the_whole_shelf() {
        let view = state_of(45, 20)
            .reduce(Action::SetAuthor(Some("Author 00".to_string())))
            .view();
        assert_eq!(view.stats.book_count, 45);
        assert_eq!(view.stats.author_count, 7);
        assert_eq!(view.stats.result_count, 7);
        assert!(view.books.iter().all(|b| b.author == "Author 00"));
    }

    #[test]
    fn the_one_where_the_config_page_size_is_respected() {
        let config = CatalogConfig {
            page_size: 24,
            ..CatalogConfig::default()
        };
        let state = CatalogState::from_config(shelf_of(50), &config).expect("💀 valid config");
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.view().books.len(), 24);
    }
}
