//! 🔧 App Configuration — the sacred TOML-to-struct pipeline.
//!
//! 📡 "Config not found: We looked everywhere. Under the couch. Behind the fridge.
//! In the junk drawer. Nothing." — every developer at 3am 🦆
//!
//! 🏗️ Powered by Figment, because manually parsing env vars is a form of
//! self-harm that even the borrow checker wouldn't approve of.
//!
//! 🧠 Knowledge graph:
//! - `[source]`: where the books come from. `File`, `Http`, or `InMemory`.
//!   Each backend's config lives next to the backend in `backends/`.
//! - `[catalog]`: page size, window radius, default sort. All optional.
//! - Env vars `BKX_*` are the base layer, `__` splits nesting:
//!   `BKX_CATALOG__PAGE_SIZE=24`, `BKX_SOURCE__HTTP__URL=https://...`.
//! - A TOML file, when given, is merged on top. TOML wins on conflicts.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backends::{FileSourceConfig, HttpSourceConfig, InMemorySourceConfig};
use crate::catalog::pager::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_RADIUS};
use crate::common::SortKey;

/// 📦 The AppConfig: one struct to rule them all, one struct to find them,
/// one struct to load the books and in the Figment bind them.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// 🚰 Where the record set lives. Externally tagged, so TOML reads `[source.File]`.
#[derive(Debug, Deserialize, Clone)]
pub enum SourceConfig {
    #[serde(alias = "file")]
    File(FileSourceConfig),
    #[serde(alias = "http")]
    Http(HttpSourceConfig),
    #[serde(alias = "in_memory")]
    InMemory(InMemorySourceConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        // -- 📂 the static asset, sitting next to you, like it did on the web server
        SourceConfig::File(FileSourceConfig {
            file_name: "ebooks-data.json".to_string(),
        })
    }
}

impl SourceConfig {
    /// 🧭 `http://` or `https://` means the network, everything else means a path on disk.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SourceConfig::Http(HttpSourceConfig::new(location))
        } else {
            SourceConfig::File(FileSourceConfig {
                file_name: location.to_string(),
            })
        }
    }
}

/// 📄 Knobs for the browsing experience.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_window_radius() -> usize {
    DEFAULT_WINDOW_RADIUS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_radius: DEFAULT_WINDOW_RADIUS,
            default_sort: SortKey::default(),
        }
    }
}

impl AppConfig {
    /// ✅ Things serde can't check for us.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.catalog.page_size > 0,
            "💀 catalog.page_size is 0. Every page would be empty and there would be infinitely many of them. Use at least 1 (20 and 24 are popular)."
        );
        Ok(())
    }
}

/// 🚀 Load the config — from env vars, from a file, or from the sheer power of defaults.
///
/// 📐 No file → env vars only (plus defaults). A file → env vars + TOML, TOML wins.
pub fn load_config(config_file_name: Option<&Path>) -> Result<AppConfig> {
    info!(
        "🔧 Loading configuration: {:#?}",
        config_file_name.unwrap_or(Path::new(""))
    );

    let config = Figment::new().merge(Env::prefixed("BKX_").split("__"));
    let config = match config_file_name {
        Some(file_name) => config.merge(Toml::file(file_name)),
        None => config,
    };

    let context_msg = match config_file_name {
        Some(path) => format!(
            "💀 Failed to parse configuration from file '{}' and environment variables (BKX_*). \
             The file exists in our hearts, but apparently not in a shape serde recognizes.",
            path.display()
        ),
        None => "💀 Failed to parse configuration from environment variables (BKX_*). \
                 No file was provided — this one's all on the environment. Classic."
            .to_string(),
    };

    let app_config: AppConfig = config.extract().context(context_msg)?;
    app_config.validate()?;
    Ok(app_config)
}
