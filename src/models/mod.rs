//! Data models for maintenance-run history.
//!
//! - [`RunId`] - sortable run identifier taken from a snapshot file name
//! - [`SnapshotRecord`] - one decoded snapshot file
//! - [`ChangedPaths`] / [`StepDurations`] - the change lists and step timings of a run
//! - [`OverviewRow`], [`RunDetail`], [`NavigationList`] - derived views for renderers
//!
//! Snapshot fields use custom deserializers from the `parsers::deserializers`
//! module (nanosecond durations, null-tolerant path lists).

pub mod run_id;
pub mod snapshot;
pub mod views;

pub use run_id::{DISPLAY_DATE_FORMAT, RunId};
pub use snapshot::{ChangeKind, ChangedPaths, SnapshotRecord, Step, StepDurations};
pub use views::{NavigationList, OverviewRow, RunDetail};
