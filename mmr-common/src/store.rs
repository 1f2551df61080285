//! JSON file-backed state store
//!
//! The whole [`StoreState`] is read at the start of every operation and
//! written back in full at the end. There is no locking: two concurrent
//! read-modify-write cycles can interleave and the last writer wins.
//!
//! Neither `load` nor `save` ever fails from the caller's point of view.
//! Problems are logged and the store degrades to an empty state (on load)
//! or to a no-op (on save).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, error, warn};

use crate::models::StoreState;
use crate::Result;

/// Indentation used for the data file
const INDENT: &[u8] = b"    ";

/// Load/save contract for the persisted state
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Read the current state, falling back to an empty state on any problem
    async fn load(&self) -> StoreState;

    /// Persist the full state; failures are logged, not returned
    async fn save(&self, state: &StoreState);
}

/// State store backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn try_save(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, to_pretty_json(state)?).await?;
        Ok(())
    }
}

#[async_trait]
impl StateRepository for JsonFileStore {
    async fn load(&self) -> StoreState {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file not found, starting empty");
                return StoreState::default();
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read data file, returning empty data");
                return StoreState::default();
            }
        };

        let value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Error decoding JSON from data file, returning empty data");
                return StoreState::default();
            }
        };

        StoreState::from_value(value).unwrap_or_else(|| {
            warn!(path = %self.path.display(), "Data file root is not a JSON object, returning empty data");
            StoreState::default()
        })
    }

    async fn save(&self, state: &StoreState) {
        if let Err(e) = self.try_save(state).await {
            error!(path = %self.path.display(), error = %e, "Failed to save data file");
        }
    }
}

/// Serialize with four-space indentation. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
