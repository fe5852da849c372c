use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::StoreError;
use crate::models::{ChangedPaths, RunId, SnapshotRecord, StepDurations};

/// Maximum size of a single snapshot file: 10MB
pub const MAX_SNAPSHOT_BYTES: u64 = 10 * 1024 * 1024;

/// On-disk shape of a snapshot file. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    timestamp: String,
    result: ChangedPaths,
    timings: StepDurations,
}

/// Parse the snapshot file at `path` as the run `id`.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if the file does not exist or is a directory
/// - [`StoreError::Io`] if it exists but cannot be opened or inspected
/// - [`StoreError::TooLarge`] if it exceeds [`MAX_SNAPSHOT_BYTES`]
/// - [`StoreError::Decode`] if its content is not a valid snapshot
pub fn parse_snapshot_file(path: &Path, id: RunId) -> Result<SnapshotRecord, StoreError> {
    // Size is checked on the open handle so the file cannot be swapped in between
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound { id: id.to_string() }
        } else {
            StoreError::Io { path: path.to_path_buf(), source }
        }
    })?;

    let metadata = file
        .metadata()
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    if metadata.is_dir() {
        return Err(StoreError::NotFound { id: id.to_string() });
    }

    let size = metadata.len();
    if size > MAX_SNAPSHOT_BYTES {
        return Err(StoreError::TooLarge { id: id.to_string(), size, max: MAX_SNAPSHOT_BYTES });
    }

    let snapshot: SnapshotFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StoreError::Decode { id: id.to_string(), source })?;

    Ok(SnapshotRecord {
        id,
        reported_at: snapshot.timestamp,
        changes: snapshot.result,
        timings: snapshot.timings,
    })
}
