//! Comercify CLI
//!
//! Copies a module's entry file into the project's library folder, and merges
//! cart files.

use std::process;

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;
mod copier;
mod errors;
mod logging;
mod project;
mod prompt;

pub fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = cli.run() {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
