use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, warn};
use snapraid_history::cli::{self, Cli};

fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise info, or debug with --verbose
    let default_filter = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() {
    let args = Cli::parse();
    init_logger(args.verbose);

    if let Err(e) = cli::execute(args) {
        if cli::is_not_found(&e) {
            warn!("{:#}", e);
        } else {
            error!("{:#}", e);
        }
        std::process::exit(cli::exit_code(&e));
    }
}
