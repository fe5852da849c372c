use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RunId;

/// The six change categories reported by a maintenance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
    Moved,
    Copied,
    Restored,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 6] = [
        ChangeKind::Added,
        ChangeKind::Removed,
        ChangeKind::Updated,
        ChangeKind::Moved,
        ChangeKind::Copied,
        ChangeKind::Restored,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Updated => "updated",
            ChangeKind::Moved => "moved",
            ChangeKind::Copied => "copied",
            ChangeKind::Restored => "restored",
        }
    }
}

/// The six timed steps of a maintenance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Touch,
    Diff,
    Sync,
    Scrub,
    Smart,
    Total,
}

impl Step {
    pub const ALL: [Step; 6] =
        [Step::Touch, Step::Diff, Step::Sync, Step::Scrub, Step::Smart, Step::Total];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Touch => "touch",
            Step::Diff => "diff",
            Step::Sync => "sync",
            Step::Scrub => "scrub",
            Step::Smart => "smart",
            Step::Total => "total",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedPaths {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub added: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub removed: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub updated: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub moved: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub copied: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_path_list")]
    pub restored: Vec<String>,
}

impl ChangedPaths {
    pub fn get(&self, kind: ChangeKind) -> &[String] {
        match kind {
            ChangeKind::Added => &self.added,
            ChangeKind::Removed => &self.removed,
            ChangeKind::Updated => &self.updated,
            ChangeKind::Moved => &self.moved,
            ChangeKind::Copied => &self.copied,
            ChangeKind::Restored => &self.restored,
        }
    }

    /// Number of changed paths across all six categories.
    pub fn total(&self) -> usize {
        ChangeKind::ALL.iter().map(|kind| self.get(*kind).len()).sum()
    }

    /// Categories in display order, paired with their paths.
    pub fn categories(&self) -> impl Iterator<Item = (ChangeKind, &[String])> {
        ChangeKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDurations {
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub touch: Duration,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub diff: Duration,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub sync: Duration,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub scrub: Duration,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub smart: Duration,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_nanos",
        deserialize_with = "crate::parsers::deserializers::deserialize_nanos"
    )]
    pub total: Duration,
}

impl StepDurations {
    pub fn get(&self, step: Step) -> Duration {
        match step {
            Step::Touch => self.touch,
            Step::Diff => self.diff,
            Step::Sync => self.sync,
            Step::Scrub => self.scrub,
            Step::Smart => self.smart,
            Step::Total => self.total,
        }
    }
}

/// One decoded snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub id: RunId,
    /// Timestamp string written by the producer, kept verbatim.
    pub reported_at: String,
    pub changes: ChangedPaths,
    pub timings: StepDurations,
}
