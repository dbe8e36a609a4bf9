//! CLI Config

use clap::Args;

/// Default destination for the copied module, relative to the working directory.
pub(crate) const DEFAULT_OUTPUT: &str = "./src/lib/comercify.ts";

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Module copy settings.
#[derive(Debug, Args)]
pub(crate) struct CopyConfig {
    /// File marking the project root; searched for from the working directory upwards
    #[arg(long, env = "COMERCIFY_MARKER", default_value = "package.json")]
    pub marker: String,

    /// File copied out of the selected module folder
    #[arg(long, env = "COMERCIFY_ENTRY", default_value = "index.ts")]
    pub entry: String,

    /// Module folder to copy; prompts when omitted
    #[arg(short, long)]
    pub module: Option<String>,

    /// Destination path; prompts when omitted
    #[arg(short, long, env = "COMERCIFY_OUTPUT")]
    pub output: Option<String>,
}
