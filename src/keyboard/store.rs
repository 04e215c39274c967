//! File-backed store for named keyboard layouts.
//!
//! Each store instance owns two file paths: one for reply layouts and
//! one for inline layouts. A file is a JSON object mapping layout name
//! to an array of position-tagged records (see [`super::codec`]). The
//! positional encoding is the only format this store reads or writes;
//! the one-row codec is an in-memory alternative with no file schema.
//!
//! Writes are plain whole-file writes with no atomicity. Callers that
//! need durability against a crash mid-write should write to their own
//! temporary path and rename.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::codec::{
    EncodedSet, decode_inline_set, decode_reply_set, encode_inline_set, encode_reply_set,
};
use super::LayoutSet;
use crate::config::Config;
use crate::error::Result;

/// On-disk shape of a store file: layout name to record list.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredSet(EncodedSet);

/// Persists named keyboard layouts to a pair of JSON files.
#[derive(Debug, Clone)]
pub struct KeyboardStore {
    reply_path: PathBuf,
    inline_path: PathBuf,
}

impl KeyboardStore {
    /// Create a store over the given file paths.
    pub fn new(reply_path: impl Into<PathBuf>, inline_path: impl Into<PathBuf>) -> Self {
        Self {
            reply_path: reply_path.into(),
            inline_path: inline_path.into(),
        }
    }

    /// Create a store from the configured file names.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.reply_store_file, &config.inline_store_file)
    }

    /// Path of the reply layout file.
    pub fn reply_path(&self) -> &Path {
        &self.reply_path
    }

    /// Path of the inline layout file.
    pub fn inline_path(&self) -> &Path {
        &self.inline_path
    }

    async fn write_set(&self, path: &Path, encoded: EncodedSet) -> Result<()> {
        let json = serde_json::to_string_pretty(&StoredSet(encoded))?;
        tokio::fs::write(path, json).await?;
        debug!(path = %path.display(), "keyboard layouts saved");
        Ok(())
    }

    async fn read_set(&self, path: &Path) -> Result<EncodedSet> {
        let json = tokio::fs::read_to_string(path).await?;
        let stored: StoredSet = serde_json::from_str(&json)?;
        debug!(path = %path.display(), layouts = stored.0.len(), "keyboard layouts loaded");
        Ok(stored.0)
    }

    /// Save a set of reply layouts, replacing the file contents.
    pub async fn save_reply(&self, layouts: &LayoutSet) -> Result<()> {
        self.write_set(&self.reply_path, encode_reply_set(layouts)?)
            .await
    }

    /// Load the reply layout set from disk.
    pub async fn load_reply(&self) -> Result<LayoutSet> {
        decode_reply_set(&self.read_set(&self.reply_path).await?)
    }

    /// Save a set of inline layouts, replacing the file contents.
    pub async fn save_inline(&self, layouts: &LayoutSet) -> Result<()> {
        self.write_set(&self.inline_path, encode_inline_set(layouts)?)
            .await
    }

    /// Load the inline layout set from disk.
    pub async fn load_inline(&self) -> Result<LayoutSet> {
        decode_inline_set(&self.read_set(&self.inline_path).await?)
    }
}
