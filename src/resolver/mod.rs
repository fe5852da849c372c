//! Run detail resolution
//!
//! Turns a run request into a [`RunDetail`] plus the [`NavigationList`] of all
//! known runs:
//!
//! 1. List the store's identifiers (this is also the navigation list)
//! 2. Pick the target: the explicit id as given, or the latest run
//! 3. Load the target's snapshot
//!
//! The navigation list is returned on failure too, inside [`ResolveError`].

use std::path::Path;

use thiserror::Error;

use crate::error::StoreError;
use crate::models::{NavigationList, RunDetail, SnapshotRecord};
use crate::store;

/// Which run a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSelector<'a> {
    /// The run that sorts last among all known identifiers.
    Latest,
    /// A run named exactly by its identifier.
    Explicit(&'a str),
}

impl<'a> RunSelector<'a> {
    /// An absent or empty id selects the latest run.
    pub fn from_request(requested: Option<&'a str>) -> Self {
        match requested {
            Some(id) if !id.is_empty() => RunSelector::Explicit(id),
            _ => RunSelector::Latest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRun {
    pub detail: RunDetail,
    pub navigation: NavigationList,
}

/// A failed resolution, still carrying the navigation list so the caller can
/// offer other runs.
#[derive(Debug, Error)]
#[error("failed to resolve run")]
pub struct ResolveError {
    #[source]
    pub source: StoreError,
    pub navigation: NavigationList,
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }
}

/// Resolve `requested` (absent or empty means latest) against `store_dir`.
///
/// # Errors
///
/// - [`StoreError::NoRuns`] when the latest run is requested from an empty store
/// - [`StoreError::NotFound`] when the explicit run does not exist
/// - any read or decode failure of the target snapshot, unchanged
pub fn resolve(store_dir: &Path, requested: Option<&str>) -> Result<ResolvedRun, ResolveError> {
    let ids = store::list_identifiers(store_dir)
        .map_err(|source| ResolveError { source, navigation: NavigationList::default() })?;
    let navigation = NavigationList::new(ids);

    let loaded = match RunSelector::from_request(requested) {
        RunSelector::Explicit(id) => store::load(store_dir, id),
        RunSelector::Latest => match navigation.latest() {
            Some(latest) => store::load_run(store_dir, latest.clone()),
            None => Err(StoreError::NoRuns { dir: store_dir.to_path_buf() }),
        },
    };

    match loaded {
        Ok(record) => Ok(ResolvedRun { detail: run_detail(record), navigation }),
        Err(source) => Err(ResolveError { source, navigation }),
    }
}

/// Build the detail view of a decoded snapshot. The change lists move over
/// untouched.
pub fn run_detail(record: SnapshotRecord) -> RunDetail {
    RunDetail {
        date: record.id.display_date(),
        id: record.id,
        reported_at: record.reported_at,
        changes: record.changes,
    }
}
