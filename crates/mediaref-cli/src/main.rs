use clap::Parser;
use mediaref_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; never fail the command over it.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("log file unavailable ({err}); logging to stderr");
    }

    if let Err(err) = cli.run() {
        eprintln!("mediaref error: {:#}", err);
        std::process::exit(1);
    }
}
