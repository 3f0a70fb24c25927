//! talentrank CLI binary.

use std::process;

use clap::Parser;

use talentrank::cli::args::TalentrankArgs;
use talentrank::cli::commands::execute_command;
use talentrank::cli::logging;

fn main() {
    let args = TalentrankArgs::parse();
    logging::init(args.verbosity());

    if let Err(e) = execute_command(args) {
        log::debug!("{e:?}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
