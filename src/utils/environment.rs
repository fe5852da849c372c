use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment variable consulted when no `--output-dir` flag is given
pub const OUTPUT_DIR_ENV: &str = "SNAPRAID_OUTPUT_DIR";

/// Store directory used when neither the flag nor the environment names one
pub const DEFAULT_OUTPUT_DIR: &str = "/output";

/// Resolve the snapshot store directory.
///
/// Precedence: explicit flag, then `SNAPRAID_OUTPUT_DIR`, then `/output`.
pub fn resolve_store_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    resolve_store_dir_from(flag, env::var_os(OUTPUT_DIR_ENV).map(PathBuf::from))
}

fn resolve_store_dir_from(flag: Option<PathBuf>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    let dir = flag.or(from_env).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    if dir.as_os_str().is_empty() {
        bail!("output directory must not be empty");
    }
    Ok(dir)
}
