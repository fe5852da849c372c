//! Request-scoped views handed to renderers. Built fresh for every query.

use serde::Serialize;

use super::{ChangedPaths, RunId, StepDurations};

/// Summary of one run for the overview list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewRow {
    pub id: RunId,
    pub date: String,
    pub total_changes: usize,
    pub timings: StepDurations,
}

/// Full change breakdown of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunDetail {
    pub id: RunId,
    pub date: String,
    pub reported_at: String,
    pub changes: ChangedPaths,
}

/// Every known run identifier, ascending, each exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationList(Vec<RunId>);

impl NavigationList {
    pub fn new(mut ids: Vec<RunId>) -> Self {
        ids.sort();
        ids.dedup();
        Self(ids)
    }

    /// The run that sorts last, i.e. the most recent one.
    pub fn latest(&self) -> Option<&RunId> {
        self.0.last()
    }

    pub fn ids(&self) -> &[RunId] {
        &self.0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|known| known.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
