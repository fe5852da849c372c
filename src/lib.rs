//! SnapRAID History - browse the history of SnapRAID maintenance runs
//!
//! Every maintenance run leaves one JSON snapshot named after its start time
//! (`2024-05-01T03:00:00Z.json`) in an output directory. This library reads
//! such a directory and derives two views from it:
//!
//! - an overview: one row per run, newest first, with the number of changed
//!   files and the duration of each step
//! - a run detail: the added/removed/updated/moved/copied/restored paths of one
//!   run (the latest by default), plus the ascending list of all runs
//!
//! Every query re-reads the directory; nothing is cached between calls and the
//! directory is always passed in explicitly.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use snapraid_history::{overview, resolve};
//!
//! let store = Path::new("/output");
//! for row in overview(store)? {
//!     println!("{} {} changes", row.date, row.total_changes);
//! }
//!
//! let latest = resolve(store, None)?;
//! println!("latest run: {}", latest.detail.id);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod overview;
pub mod parsers;
pub mod render;
pub mod resolver;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::StoreError;
pub use models::{NavigationList, OverviewRow, RunDetail, RunId, SnapshotRecord};
pub use overview::{build_overview, overview};
pub use resolver::{ResolveError, ResolvedRun, resolve};
pub use store::{list_identifiers, load, scan_all};
pub use utils::format_path_with_tilde;
