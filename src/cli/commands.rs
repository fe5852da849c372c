use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use crate::error::StoreError;
use crate::models::NavigationList;
use crate::overview::overview;
use crate::render::{StandardHelpers, json, table};
use crate::resolver::{ResolveError, resolve};
use crate::store::list_identifiers;
use crate::utils::{format_path_with_tilde, resolve_store_dir};

/// Exit code for a missing run or an empty store
pub const EXIT_NOT_FOUND: i32 = 2;

/// Exit code for unreadable or corrupt snapshots and other failures
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "snapraid-history")]
#[command(version)]
#[command(about = "Browse the history of SnapRAID maintenance runs", long_about = None)]
pub struct Cli {
    /// Directory containing the run snapshot files
    /// (falls back to $SNAPRAID_OUTPUT_DIR, then /output)
    #[arg(short = 'o', long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all runs, newest first
    Overview {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the file changes of one run (the latest by default)
    Run {
        /// Run identifier, e.g. 2024-05-01T03:00:00Z
        #[arg(long)]
        id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all run identifiers, oldest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let store_dir = resolve_store_dir(cli.output_dir)?;
    debug!("using store directory {}", store_dir.display());

    match command {
        Commands::Overview { json } => show_overview(&store_dir, json),
        Commands::Run { id, json } => show_run(&store_dir, id.as_deref(), json),
        Commands::List { json } => show_list(&store_dir, json),
    }
}

fn show_overview(store_dir: &Path, as_json: bool) -> Result<()> {
    let rows = overview(store_dir).with_context(|| {
        format!("Failed to build overview of {}", format_path_with_tilde(store_dir))
    })?;
    debug!("built {} overview rows", rows.len());

    if as_json {
        println!("{}", json::render_overview(&rows)?);
    } else if rows.is_empty() {
        println!("No runs found in {}", format_path_with_tilde(store_dir));
    } else {
        print!("{}", table::render_overview(&rows, &StandardHelpers));
    }

    Ok(())
}

fn show_run(store_dir: &Path, id: Option<&str>, as_json: bool) -> Result<()> {
    let resolved = match resolve(store_dir, id) {
        Ok(resolved) => resolved,
        Err(err) => {
            if err.is_not_found() && !as_json && !err.navigation.is_empty() {
                eprint!("{}", table::render_navigation(&err.navigation, None));
            }
            return Err(err).with_context(|| {
                format!("Failed to load run from {}", format_path_with_tilde(store_dir))
            });
        }
    };

    if as_json {
        println!("{}", json::render_run(&resolved)?);
    } else {
        print!("{}", table::render_run(&resolved, &StandardHelpers));
    }

    Ok(())
}

fn show_list(store_dir: &Path, as_json: bool) -> Result<()> {
    let ids = list_identifiers(store_dir).with_context(|| {
        format!("Failed to list runs in {}", format_path_with_tilde(store_dir))
    })?;
    let navigation = NavigationList::new(ids);

    if as_json {
        println!("{}", json::render_navigation(&navigation)?);
    } else {
        print!("{}", table::render_navigation(&navigation, None));
    }

    Ok(())
}

/// True when any cause in the chain means "nothing to show" rather than a failure.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<StoreError>().is_some_and(StoreError::is_not_found)
            || cause.downcast_ref::<ResolveError>().is_some_and(ResolveError::is_not_found)
    })
}

/// Map a failed command to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if is_not_found(err) { EXIT_NOT_FOUND } else { EXIT_FAILURE }
}
