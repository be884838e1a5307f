//! 📄 The pager — slices the result list into pages and lays out the page buttons.
//!
//! 🧠 Knowledge graph:
//! - Pages are 1-indexed. Page 0 does not exist. Page 0 has never existed.
//! - `total_pages(0) == 0`: an empty result has no pages and no buttons, but the
//!   state still parks on page 1 so the invariant `page ∈ [1, max(1, total)]` holds.
//! - Out-of-range requests are rejected by [`Pager::accepts`]; the caller leaves its
//!   state alone. Not an error. Just a polite "no".
//! - Window layout: first page, last page, and everything within `radius` of the
//!   current page. Each run of hidden pages collapses into one ellipsis.
//!
//! ```text
//!   total = 10, current = 5, radius = 2
//!   ← 1 … 3 4 [5] 6 7 … 10 →
//! ```

use anyhow::{Result, bail};
use serde::Serialize;

/// 📏 Observed in the wild: 20 (the standalone page) and 24 (the grid that liked multiples of 3 and 4).
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// 🔭 How many neighbours the current page gets on each side.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// 🔘 One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// 🎛️ The whole pagination control: arrows plus numbered buttons.
///
/// Each arrow carries its target page, or `None` when it's disabled at a bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub first: Option<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
    pub buttons: Vec<PageButton>,
}

/// 📄 Fixed-size paging with a windowed button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    radius: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl Pager {
    /// 🚀 A pager with the given page size and window radius. Page size 0 is refused:
    /// dividing by zero is a villain origin story.
    pub fn new(page_size: usize, radius: usize) -> Result<Self> {
        if page_size == 0 {
            bail!("💀 A page size of 0 would give every result its own infinite nothing. Pick a page size of at least 1.");
        }
        Ok(Self { page_size, radius })
    }

    /// 🧮 `ceil(len / page_size)`. Zero results, zero pages.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// ✅ May the user go to `requested`? Only when `1 <= requested <= total_pages`.
    pub fn accepts(&self, len: usize, requested: usize) -> bool {
        (1..=self.total_pages(len)).contains(&requested)
    }

    /// ✂️ Items on `page`: `[(page-1)*size, page*size)`, clipped to the list.
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let start = page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// 🔘 Lay out the numbered buttons for `total_pages` with `current` highlighted.
    pub fn window(&self, total_pages: usize, current: usize) -> Vec<PageButton> {
        let mut buttons = Vec::new();
        let mut last_shown: Option<usize> = None;
        for number in 1..=total_pages {
            let shown = number == 1 || number == total_pages || number.abs_diff(current) <= self.radius;
            if !shown {
                continue;
            }
            if let Some(previous) = last_shown {
                if number > previous + 1 {
                    buttons.push(PageButton::Ellipsis);
                }
            }
            buttons.push(PageButton::Page {
                number,
                current: number == current,
            });
            last_shown = Some(number);
        }
        buttons
    }

    /// 🎛️ Full control layout for a result list of `len` items sitting on `current`.
    pub fn controls(&self, len: usize, current: usize) -> PageControls {
        let total_pages = self.total_pages(len);
        let has_prev = total_pages > 0 && current > 1;
        let has_next = current < total_pages;
        PageControls {
            current,
            total_pages,
            first: has_prev.then_some(1),
            prev: has_prev.then(|| current - 1),
            next: has_next.then(|| current + 1),
            last: has_next.then_some(total_pages),
            buttons: self.window(total_pages, current),
        }
    }
}
