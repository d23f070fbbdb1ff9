use std::process;

use clap::Parser;
use rarible_svm_cli::cli::{run, Cli};
use rarible_svm_cli::telemetry::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
