//! 📚 The catalog — where a pile of JSON becomes something you can actually browse.
//!
//! ```text
//!   books ──▶ index  (author dropdown)
//!     │
//!     └──▶ query (text → author → sort) ──▶ pager (slice + buttons) ──▶ view
//!                   ▲
//!           state.reduce(action)
//! ```
//!
//! Data flows one way per recomputation. No feedback loops. No globals.
//! The dropdowns don't talk to each other behind our backs anymore. 🦆

pub mod collate;
pub mod index;
pub mod pager;
pub mod query;
pub mod state;
pub mod stats;

pub use index::author_index;
pub use pager::{PageButton, PageControls, Pager};
pub use query::{Query, run_query};
pub use state::{Action, CatalogState, CatalogView};
pub use stats::CatalogStats;
