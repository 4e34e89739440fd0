//! Run-wide configuration.
//!
//! Everything the harness needs to know about a run lives in [`RunConfig`],
//! which the runner owns and threads through suites and cases.

use std::path::PathBuf;

/// Configuration for a single harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Print assertion diagnostics and log messages to stderr.
    pub verbose: bool,
    /// Suppress the spinner animation.
    pub quiet: bool,
    /// Print suite names instead of running anything.
    pub list_only: bool,
    /// Treat `filter` as an exclude-list instead of an include-list.
    pub exclude: bool,
    /// Full tracing output (`-t`).
    pub trace: bool,
    /// Restrict suites to control-plane tests. Interpreted by suites, not the runner.
    pub control_plane_only: bool,
    /// Optional configuration file handed to the environment initializer.
    pub config_path: Option<PathBuf>,
    /// Suite names given on the command line. `None` means run everything.
    pub filter: Option<Vec<String>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            quiet: !atty::is(atty::Stream::Stdout),
            list_only: false,
            exclude: false,
            trace: false,
            control_plane_only: false,
            config_path: None,
            filter: None,
        }
    }
}

impl RunConfig {
    /// A configuration suitable for captured output: verbose, no spinner.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn with_filter<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn excluding(mut self) -> Self {
        self.exclude = true;
        self
    }

    pub fn list_only(mut self) -> Self {
        self.list_only = true;
        self
    }
}
