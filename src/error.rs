//! Errors raised while setting up a run.
//!
//! Assertion failures are never errors: they are counted on the owning suite.
//! Everything here aborts the process before (or instead of) running suites.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A `-X` style flag the harness does not understand.
    #[error("Invalid option: `{0}'")]
    #[diagnostic(
        code(tally::cli::invalid_option),
        help("valid flags are -v -x -l -q -t -c and -f <path>")
    )]
    InvalidOption(String),

    /// Any other command-line problem reported by clap (missing `-f` value, ...).
    #[error("{0}")]
    #[diagnostic(code(tally::cli::usage))]
    Usage(String),

    #[error("failed to read config file {path}")]
    #[diagnostic(code(tally::env::config_read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    #[diagnostic(
        code(tally::env::config_parse),
        help("the config file must be a YAML (or .json) mapping of setting names to values")
    )]
    ConfigParse { path: PathBuf, message: String },

    /// Raised by custom [`crate::env::Environment`] implementations.
    #[error("environment initialization failed: {0}")]
    #[diagnostic(code(tally::env::init))]
    Environment(String),
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
