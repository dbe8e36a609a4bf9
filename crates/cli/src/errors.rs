//! CLI Errors

use std::{io, path::PathBuf};

use comercify::{carts::table::CartTableError, fixtures::FixtureError};
use thiserror::Error;

/// Errors that end the CLI with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("could not determine the working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    #[error("src directory not found: {}", .0.display())]
    MissingSrcDirectory(PathBuf),

    #[error("failed to scan {}: {source}", .path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("module '{0}' not found")]
    UnknownModule(String),

    #[error("module '{module}' does not have an {entry} file")]
    MissingEntry { module: String, entry: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    CartTable(#[from] CartTableError),

    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
