//! Command-line boundary: argument parsing, rendering and exit codes.

pub mod commands;

pub use commands::{Cli, Commands, EXIT_FAILURE, EXIT_NOT_FOUND, execute, exit_code, is_not_found};
