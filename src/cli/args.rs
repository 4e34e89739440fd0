//! Defines the command-line arguments of a tally test binary.
//!
//! This module uses the `clap` crate with its "derive" feature. Flags are
//! single letters so a run reads like `tests -q -x slow_suite`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::RunConfig;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Run the unit test suites linked into this binary.",
    args_override_self = true
)]
pub struct TallyArgs {
    /// Print assertion diagnostics to stderr (on by default).
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Skip the named suites instead of running only them.
    #[arg(short = 'x')]
    pub exclude: bool,

    /// List suite names without running anything.
    #[arg(short = 'l')]
    pub list: bool,

    /// Never draw the progress spinner.
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Enable full tracing output.
    #[arg(short = 't')]
    pub trace: bool,

    /// Configuration file for environment initialization.
    #[arg(short = 'f', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only run control-plane tests (honoured by the suites themselves).
    #[arg(short = 'c')]
    pub control_plane: bool,

    /// Suite names to run (or to skip with -x).
    #[arg(value_name = "SUITE")]
    pub suites: Vec<String>,
}

impl TallyArgs {
    /// Builds the run configuration on top of terminal-detected defaults.
    pub fn into_config(self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            verbose: defaults.verbose || self.verbose,
            quiet: defaults.quiet || self.quiet,
            list_only: self.list,
            exclude: self.exclude,
            trace: self.trace,
            control_plane_only: self.control_plane,
            config_path: self.config,
            filter: (!self.suites.is_empty()).then_some(self.suites),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TallyArgs {
        TallyArgs::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn bare_tokens_become_the_filter() {
        let config = parse(&["-x", "mod_a", "mod_b"]).into_config();
        assert!(config.exclude);
        assert_eq!(
            config.filter,
            Some(vec!["mod_a".to_string(), "mod_b".to_string()])
        );
    }

    #[test]
    fn no_tokens_means_no_filter() {
        let config = parse(&["-l"]).into_config();
        assert!(config.list_only);
        assert_eq!(config.filter, None);
        assert!(config.verbose);
    }

    #[test]
    fn quiet_and_flags() {
        let config = parse(&["-q", "-t", "-c", "-f", "env.yaml"]).into_config();
        assert!(config.quiet);
        assert!(config.trace);
        assert!(config.control_plane_only);
        assert_eq!(config.config_path, Some(PathBuf::from("env.yaml")));
    }

    #[test]
    fn repeated_flags_keep_the_last_value() {
        let config = parse(&["-q", "-q", "-v", "-v", "-x", "-x"]).into_config();
        assert!(config.quiet);
        assert!(config.verbose);
        assert!(config.exclude);

        let config = parse(&["-f", "a.yaml", "-f", "b.yaml", "mod_a"]).into_config();
        assert_eq!(config.config_path, Some(PathBuf::from("b.yaml")));
        assert_eq!(config.filter, Some(vec!["mod_a".to_string()]));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = TallyArgs::try_parse_from(["tally", "-z"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn config_flag_needs_a_value() {
        assert!(TallyArgs::try_parse_from(["tally", "-f"]).is_err());
    }
}
