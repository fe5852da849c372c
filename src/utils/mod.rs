pub mod environment;
pub mod paths;

pub use environment::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, resolve_store_dir};
pub use paths::format_path_with_tilde;
