//! `meater` command-line tool
//!
//! Logs in to the private MEATER cloud API, lists recorded cooks and exports
//! their decoded temperature history.

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod output;

use cli::Cli;
use meater_core::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = logging::level_for_verbosity(cli.verbose);
    if cli.log_json {
        logging::init_json(level);
    } else {
        logging::init(level);
    }

    if let Err(e) = commands::run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
