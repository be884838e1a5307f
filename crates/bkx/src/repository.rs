//! 📚 The book repository — load once, parse once, never look back.
//!
//! 🧠 Knowledge graph:
//! - [`load_books`] never fails. A missing file, a 500, or half an array all end
//!   the same way: an `error!` with the whole cause chain, then an empty catalog.
//!   The catalog shows "no results" instead of a stack trace. That's the contract.
//! - [`try_load_books`] is the honest version that returns the error, for callers
//!   who want to decide for themselves.
//! - Parsing is optimistic: each element must be an object, missing or `null`
//!   `title`/`author` become `""`, unknown fields are ignored.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::app_config::SourceConfig;
use crate::backends::{Source, SourceBackend};
use crate::common::Book;
use crate::progress::LoadSpinner;

/// 🔍 Parse the record-set document: a JSON array of book objects.
pub fn parse_books(raw: &str) -> Result<Vec<Book>> {
    serde_json::from_str(raw).context(
        "💀 The catalog file is not a JSON array of book objects. \
         Expected something like [{\"id\": 1, \"title\": \"...\", \"author\": \"...\"}].",
    )
}

/// 📡 Fetch and parse, surfacing any failure.
pub async fn try_load_books(config: &SourceConfig, show_progress: bool) -> Result<Vec<Book>> {
    let mut backend = SourceBackend::from_config(config)?;
    let label = backend.label();
    let spinner = LoadSpinner::start(format!("Loading books from {label}..."), show_progress);

    let loaded = fetch_and_parse(&mut backend, &label).await;

    match &loaded {
        Ok(books) => {
            spinner.finish_loaded(books.len());
            info!("📚 loaded {} books from {}", books.len(), label);
        }
        Err(_) => spinner.finish_failed(),
    }
    loaded
}

async fn fetch_and_parse(backend: &mut SourceBackend, label: &str) -> Result<Vec<Book>> {
    let raw = backend
        .fetch()
        .await
        .context(format!("💀 Loading the catalog from '{label}' failed"))?;
    parse_books(&raw).context(format!("💀 '{label}' delivered something that isn't a catalog"))
}

/// 🛟 Fetch and parse; on any failure, log it and hand back an empty shelf.
pub async fn load_books(config: &SourceConfig, show_progress: bool) -> Vec<Book> {
    match try_load_books(config, show_progress).await {
        Ok(books) => books,
        Err(err) => {
            error!("💀 error: {}", err);
            for cause in err.chain().skip(1) {
                error!("⚠️  cause: {}", cause);
            }
            error!("📭 continuing with an empty catalog");
            Vec::new()
        }
    }
}
