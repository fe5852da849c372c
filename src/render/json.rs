//! JSON output for scripting and piping.
//!
//! Durations are written as integer nanoseconds, the same encoding the
//! snapshot files use.

use serde::Serialize;

use crate::models::{NavigationList, OverviewRow, RunDetail};
use crate::resolver::ResolvedRun;

#[derive(Serialize)]
struct RunDocument<'a> {
    run: &'a RunDetail,
    runs: &'a NavigationList,
}

pub fn render_overview(rows: &[OverviewRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

pub fn render_run(resolved: &ResolvedRun) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunDocument { run: &resolved.detail, runs: &resolved.navigation })
}

pub fn render_navigation(navigation: &NavigationList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(navigation)
}
