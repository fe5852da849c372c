//! Failure taxonomy shared by the store scanner and the run resolver.
//!
//! Foreign files (names that are not run identifiers) never produce an error;
//! they are skipped while listing. Everything else is classified here so the
//! caller can tell a missing run apart from a broken one:
//!
//! - [`StoreError::NotFound`] / [`StoreError::NoRuns`]: nothing to show
//! - [`StoreError::Io`] / [`StoreError::Decode`] / [`StoreError::TooLarge`]: the run
//!   exists (or should) but cannot be read

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested run has no snapshot file in the store.
    #[error("run {id:?} not found")]
    NotFound { id: String },

    /// The latest run was requested but the store holds no valid snapshots.
    #[error("no runs available in {}", dir.display())]
    NoRuns { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode run {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot for run {id} is too large ({size} bytes, max {max} bytes)")]
    TooLarge { id: String, size: u64, max: u64 },
}

impl StoreError {
    /// True when the failure means "there is nothing to show" rather than
    /// "something is broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::NoRuns { .. })
    }
}
