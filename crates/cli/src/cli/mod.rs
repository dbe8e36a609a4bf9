use std::{env, io};

use clap::{Parser, Subcommand};

use crate::{
    config::{CopyConfig, LoggingConfig},
    errors::CliError,
    prompt::TerminalPrompter,
};

mod copy;
mod merge;

#[derive(Debug, Parser)]
#[command(
    name = "comercify",
    version,
    about = "Comercify CLI",
    long_about = "Scans the src directory for module folders, lets you select one, and copies \
                  its entry file to a library location (default: ./src/lib/comercify.ts)."
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    copy: CopyConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge two YAML carts and print the result
    Merge(merge::MergeArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), CliError> {
        match self.command {
            Some(Commands::Merge(args)) => merge::run(&args, io::stdout().lock()),
            None => {
                let cwd = env::current_dir().map_err(CliError::WorkingDirectory)?;

                copy::run(&self.copy, &cwd, &mut TerminalPrompter, io::stdout().lock())
                    .map(|_outcome| ())
            }
        }
    }
}
