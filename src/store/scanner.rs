use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::StoreError;
use crate::models::{RunId, SnapshotRecord};
use crate::parsers::parse_snapshot_file;

/// File name suffix of every snapshot file.
pub const SNAPSHOT_SUFFIX: &str = ".json";

/// Path of the snapshot file for `id` inside `store_dir`.
pub fn snapshot_path(store_dir: &Path, id: &RunId) -> PathBuf {
    store_dir.join(format!("{}{}", id, SNAPSHOT_SUFFIX))
}

/// List the identifiers of all snapshot files in `store_dir`, ascending.
///
/// Only entries directly inside the directory are considered. Entries whose
/// name is not `<RFC 3339 timestamp>.json` are skipped silently; the store may
/// share its directory with unrelated files.
///
/// A store directory that does not exist is treated as empty.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory exists but cannot be read, or
/// if the path is not a directory.
pub fn list_identifiers(store_dir: &Path) -> Result<Vec<RunId>, StoreError> {
    match fs::metadata(store_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(StoreError::Io {
                path: store_dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "store path is not a directory"),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("store directory {} does not exist, treating as empty", store_dir.display());
            return Ok(Vec::new());
        }
        Err(source) => return Err(StoreError::Io { path: store_dir.to_path_buf(), source }),
    }

    let mut ids = Vec::new();
    for entry in WalkDir::new(store_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| StoreError::Io {
            path: e.path().unwrap_or(store_dir).to_path_buf(),
            source: e.into(),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            trace!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        let Some(id) = name.strip_suffix(SNAPSHOT_SUFFIX).and_then(RunId::parse) else {
            trace!("skipping foreign file {}", name);
            continue;
        };

        ids.push(id);
    }

    ids.sort();
    debug!("found {} runs in {}", ids.len(), store_dir.display());
    Ok(ids)
}

/// Load the snapshot for `id` exactly as given.
///
/// An `id` that is not a valid run identifier cannot name a snapshot, so it
/// is reported as [`StoreError::NotFound`] without touching the file system.
///
/// # Errors
///
/// [`StoreError::NotFound`] if there is no such run; otherwise the errors of
/// [`parse_snapshot_file`].
pub fn load(store_dir: &Path, id: &str) -> Result<SnapshotRecord, StoreError> {
    let run_id = RunId::parse(id).ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
    load_run(store_dir, run_id)
}

/// Load the snapshot for an already validated identifier.
pub fn load_run(store_dir: &Path, id: RunId) -> Result<SnapshotRecord, StoreError> {
    let path = snapshot_path(store_dir, &id);
    parse_snapshot_file(&path, id)
}

/// Load every snapshot in `store_dir`, ascending by identifier.
///
/// Fail-loud: the first snapshot that cannot be read or decoded aborts the
/// whole scan. A single corrupt run therefore blanks the overview instead of
/// silently disappearing from it.
pub fn scan_all(store_dir: &Path) -> Result<Vec<SnapshotRecord>, StoreError> {
    let ids = list_identifiers(store_dir)?;

    ids.into_par_iter()
        .map(|id| {
            let path = snapshot_path(store_dir, &id);
            load_run(store_dir, id).map_err(|e| match e {
                // Listed a moment ago, so this is a broken store rather than a bad request
                StoreError::NotFound { .. } => StoreError::Io {
                    path,
                    source: io::Error::new(io::ErrorKind::NotFound, "snapshot removed during scan"),
                },
                other => other,
            })
        })
        .collect()
}
