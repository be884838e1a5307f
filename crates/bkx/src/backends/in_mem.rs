//! # Previously, on bkx...
//!
//! 🎬 No disk. No network. Just a handful of books that live in the binary,
//! gone the moment you blink. For tests, demos, and the "does the CLI even work" check.
//!
//! `InMemorySource` hands back either the JSON you gave it in config, or the
//! built-in demo shelf. No I/O. No heartbeat. No mortgage on the line.
//!
//! ⚠️ This is NOT for production. If you're deploying this to prod, please also deploy a therapist.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::backends::Source;

/// 📚 The demo shelf. Small, honest, and alphabetically chaotic on purpose.
pub(crate) const DEMO_SHELF: &str = r#"[
  {"id": 1, "title": "Zeta", "author": "Adams"},
  {"id": 2, "title": "Alpha", "author": "Zeta"},
  {"id": 3, "title": "The Pragmatic Programmer", "author": "Hunt"},
  {"id": 4, "title": "Programming Rust", "author": "Blandy"},
  {"id": 5, "title": "Designing Data-Intensive Applications", "author": "Kleppmann"},
  {"id": 6, "title": "The Rust Programming Language", "author": "Klabnik"},
  {"id": 7, "title": "Site Reliability Engineering", "author": "Beyer"},
  {"id": 8, "title": "Terraform: Up & Running", "author": "Brikman"}
]"#;

/// 🧪 Optional inline JSON. Absent means "give me the demo shelf".
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InMemorySourceConfig {
    #[serde(default)]
    pub json: Option<String>,
}

/// 📦 The world's most optimistic data source.
#[derive(Debug, Default)]
pub(crate) struct InMemorySource {
    source_config: InMemorySourceConfig,
}

impl InMemorySource {
    pub(crate) fn new(source_config: InMemorySourceConfig) -> Self {
        Self { source_config }
    }
}

#[async_trait]
impl Source for InMemorySource {
    async fn fetch(&mut self) -> Result<String> {
        // ✅ No config to load, no server to ping, no prayers to send.
        Ok(self
            .source_config
            .json
            .clone()
            .unwrap_or_else(|| DEMO_SHELF.to_string()))
    }

    fn label(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn the_one_where_the_demo_shelf_is_always_stocked() {
        let mut source = InMemorySource::default();
        let body = source.fetch().await.expect("💀 RAM does not fail us");
        assert_eq!(body, DEMO_SHELF);
    }

    #[tokio::test]
    async fn the_one_where_inline_json_wins_over_the_demo() {
        let mut source = InMemorySource::new(InMemorySourceConfig {
            json: Some("[]".to_string()),
        });
        assert_eq!(source.fetch().await.expect("💀 RAM"), "[]");
    }
}
