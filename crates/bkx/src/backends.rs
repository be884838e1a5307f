//! 🔌 Backends — where the real I/O happens.
//!
//! 🚰 A source pours the raw JSON text of the record set. Once. Then it's done.
//! It does not parse. It does not validate. It's a faucet, not a chef.
//! The repository downstream does the chewing.
//!
//! 🎭 This module is the casting agency. Need the books from a file on disk?
//! From the web server that used to serve `/ebooks-data.json`? From RAM, for a test?
//! We've got a backend for that.
//!
//! 🦆 The duck is here because every file must have one. This is law. Do not question the duck.

use anyhow::Result;
use async_trait::async_trait;

mod file;
mod http;
mod in_mem;

pub use file::FileSourceConfig;
pub use http::HttpSourceConfig;
pub use in_mem::InMemorySourceConfig;

use crate::app_config::SourceConfig;

/// 🚰 A source that produces the raw record-set document.
///
/// # Contract 📜
/// - `fetch` returns the whole JSON text, uninterpreted.
/// - `Err(...)` when the file is gone, the server sulks, or the network took a nap.
/// - `&mut self` because sources have state. And feelings. Mostly state.
#[async_trait]
pub(crate) trait Source: std::fmt::Debug {
    /// 📄 Fetch the raw JSON document.
    async fn fetch(&mut self) -> Result<String>;

    /// 🏷️ Human-readable label for logs and the spinner: a path, a URL, "in-memory".
    fn label(&self) -> String;
}

/// 🎭 The many faces of a Source — a polymorphic casting call for data origins.
///
/// Think of it as a universal remote. Except it only controls book loading. And it's async.
#[derive(Debug)]
pub(crate) enum SourceBackend {
    InMemory(in_mem::InMemorySource),
    File(file::FileSource),
    Http(http::HttpSource),
}

impl SourceBackend {
    /// 🏗️ Pick and build the backend named by the config.
    pub(crate) fn from_config(config: &SourceConfig) -> Result<Self> {
        Ok(match config {
            SourceConfig::InMemory(c) => SourceBackend::InMemory(in_mem::InMemorySource::new(c.clone())),
            SourceConfig::File(c) => SourceBackend::File(file::FileSource::new(c.clone())),
            SourceConfig::Http(c) => SourceBackend::Http(http::HttpSource::new(c.clone())?),
        })
    }
}

#[async_trait]
impl Source for SourceBackend {
    async fn fetch(&mut self) -> Result<String> {
        match self {
            SourceBackend::InMemory(i) => i.fetch().await,
            SourceBackend::File(f) => f.fetch().await,
            SourceBackend::Http(h) => h.fetch().await,
        }
    }

    fn label(&self) -> String {
        match self {
            SourceBackend::InMemory(i) => i.label(),
            SourceBackend::File(f) => f.label(),
            SourceBackend::Http(h) => h.label(),
        }
    }
}
