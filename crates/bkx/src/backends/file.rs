// ai
//! 📂 Previously, on "Things That Could Go Wrong With A File"...
//!
//! The disk was quiet. Too quiet. A lone process had been tasked with reading
//! a JSON file — just a file, they said. Simple, they said. What could go wrong?
//!
//! The file didn't exist. The path was relative to the wrong directory.
//! And somewhere, an export script had written half an array and gone home.
//!
//! This module reads the whole record-set file in one go. The catalog lives in
//! memory anyway, so streaming it line by line would only add ceremony.
//! 🦆 (mandatory, no notes)

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::trace;

use crate::backends::Source;

// -- 📂 FileSourceConfig — "It's just a file", said no sysadmin ever before the disk filled up.
// -- Lives here, close to the FileSource that actually uses it.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileSourceConfig {
    pub file_name: String,
}

/// 📂 FileSource — hands back the file's contents, and that's the whole job.
#[derive(Debug)]
pub(crate) struct FileSource {
    source_config: FileSourceConfig,
}

impl FileSource {
    pub(crate) fn new(source_config: FileSourceConfig) -> Self {
        Self { source_config }
    }
}

#[async_trait]
impl Source for FileSource {
    async fn fetch(&mut self) -> Result<String> {
        // -- 💀 The door. It's locked. Or it doesn't exist. Or the cwd isn't what you think it is.
        let contents = tokio::fs::read_to_string(&self.source_config.file_name)
            .await
            .context(format!(
                "💀 The door to '{}' would not budge. We knocked. We pleaded. \
                We checked if it existed (it might not). We checked permissions (they might be wrong). \
                If the path is relative, it's relative to wherever you launched us from.",
                self.source_config.file_name
            ))?;

        trace!(
            "📖 hauled {} bytes out of '{}'",
            contents.len(),
            self.source_config.file_name
        );
        Ok(contents)
    }

    fn label(&self) -> String {
        self.source_config.file_name.clone()
    }
}
