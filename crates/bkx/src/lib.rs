//! 📚 bkx — an e-book catalog you can search, filter, sort, and page through.
//!
//! Load the record set once, then every user action is reduced into a new
//! [`catalog::CatalogState`] and rendered from its [`catalog::CatalogView`].

pub mod app_config;
pub mod backends;
pub mod catalog;
pub mod common;
pub mod progress;
pub mod render;
pub mod repository;

use anyhow::Result;

use crate::app_config::AppConfig;
use crate::catalog::CatalogState;

/// 🚀 Load the books named by `app_config` and stand up a fresh catalog state.
///
/// A failed load is logged and yields an empty catalog, not an error. The only
/// errors here are config-shaped (a page size of 0, say).
pub async fn open_catalog(app_config: &AppConfig, show_progress: bool) -> Result<CatalogState> {
    let books = repository::load_books(&app_config.source, show_progress).await;
    CatalogState::from_config(books, &app_config.catalog)
}
