//! CLI argument definitions for the model verification gate.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "model-gate",
    version,
    about = "Model verification gate - remote test suites as a deployment gate",
    long_about = "Register a trained classifier and its held-out test dataset with a\n\
                  remote validation service, execute the server-side test suite, and\n\
                  gate the \"verified\" decision on the pass rate.\n\n\
                  Service access is configured through the GSK_URL, GSK_TOKEN,\n\
                  GSK_PROJECT_KEY, GSK_PROJECT_NAME and GSK_PROJECT_DESCRIPTION\n\
                  environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the verification pipeline against the newest trained model.
    Verify(VerifyArgs),

    /// Print the declared dataset schema.
    Columns,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Directory holding one subdirectory per trained-model version.
    #[arg(value_name = "MODEL_ROOT", default_value = "trained_model")]
    pub model_root: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
