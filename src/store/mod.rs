//! Snapshot store access
//!
//! A store is a plain directory holding one `<run id>.json` file per
//! maintenance run. Every call re-reads the directory; nothing is cached and
//! no file handle outlives the call that opened it.
//!
//! # Error Handling Strategy
//!
//! - **Foreign files**: names that are not `<RFC 3339 timestamp>.json` are skipped,
//!   never reported
//! - **Missing runs**: [`StoreError::NotFound`](crate::error::StoreError::NotFound),
//!   so callers can answer "not found" instead of failing
//! - **Broken runs**: I/O, size and decode failures are returned with the run id
//!   and the underlying cause; [`scan_all`] aborts on the first one
//!
//! Nothing in this module logs errors or retries. Reads are idempotent, so the
//! next request is the retry.

pub mod scanner;

pub use scanner::{SNAPSHOT_SUFFIX, list_identifiers, load, load_run, scan_all, snapshot_path};
