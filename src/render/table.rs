//! Plain-text rendering of run history.
//!
//! - Overview: one line per run, newest first, with change count and step timings
//! - Run detail: header, one section per non-empty change category, run list

use crate::models::{NavigationList, OverviewRow, RunDetail, RunId, Step};
use crate::render::ViewHelpers;
use crate::resolver::ResolvedRun;

const DATE_WIDTH: usize = 19;
const COUNT_WIDTH: usize = 8;
const DURATION_WIDTH: usize = 12;

pub fn render_overview(rows: &[OverviewRow], helpers: &impl ViewHelpers) -> String {
    if rows.is_empty() {
        return String::from("No runs found.\n");
    }

    let mut output = String::new();

    output.push_str(&format!("{:<DATE_WIDTH$} {:>COUNT_WIDTH$}", "Date", "Changes"));
    for step in Step::ALL {
        output.push_str(&format!(" {:>DURATION_WIDTH$}", helpers.title(step.as_str())));
    }
    output.push('\n');
    output.push_str(&"-".repeat(DATE_WIDTH + 1 + COUNT_WIDTH + Step::ALL.len() * (DURATION_WIDTH + 1)));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<DATE_WIDTH$} {:>COUNT_WIDTH$}",
            truncate(&row.date, DATE_WIDTH),
            row.total_changes
        ));
        for step in Step::ALL {
            output.push_str(&format!(" {:>DURATION_WIDTH$}", helpers.duration(row.timings.get(step))));
        }
        output.push('\n');
    }

    output.push_str(&format!("\n{} runs\n", rows.len()));
    output
}

pub fn render_run(resolved: &ResolvedRun, helpers: &impl ViewHelpers) -> String {
    let mut output = render_detail(&resolved.detail, helpers);
    output.push('\n');
    output.push_str(&render_navigation(&resolved.navigation, Some(&resolved.detail.id)));
    output
}

fn render_detail(detail: &RunDetail, helpers: &impl ViewHelpers) -> String {
    let mut output = String::new();

    output.push_str(&format!("Run {}\n", detail.id));
    output.push_str(&format!("  Date:     {}\n", detail.date));
    output.push_str(&format!("  Reported: {}\n", detail.reported_at));
    output.push_str(&format!("  Changes:  {}\n", detail.changes.total()));

    if detail.changes.total() == 0 {
        output.push_str("\nNo file changes in this run.\n");
        return output;
    }

    for (kind, paths) in detail.changes.categories() {
        if paths.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{} ({})\n", helpers.title(kind.as_str()), paths.len()));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for path in paths {
            output.push_str(&format!("  {}\n", path));
        }
    }

    output
}

/// Ascending run list; `current` is marked with `*`.
pub fn render_navigation(navigation: &NavigationList, current: Option<&RunId>) -> String {
    if navigation.is_empty() {
        return String::from("No runs found.\n");
    }

    let mut output = String::from("Runs:\n");
    for id in navigation.ids() {
        let marker = if Some(id) == current { '*' } else { ' ' };
        output.push_str(&format!("{} {}\n", marker, id));
    }
    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
