//! The tally command-line entry point.
//!
//! A test binary builds a [`TestRegistry`] of its suites and hands it to
//! [`run`]. Flags are parsed, logging and the environment are initialized, every
//! entry runs in order, and the summary decides the process exit code.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use crate::cli::args::TallyArgs;
use crate::config::RunConfig;
use crate::env::{Environment, FileEnvironment};
use crate::error::{HarnessError, Result};
use crate::logging;
use crate::output::Console;
use crate::registry::TestRegistry;
use crate::report::Summary;
use crate::runner::TestRunner;

pub mod args;

// ============================================================================
// MAIN ENTRY POINTS
// ============================================================================

/// Runs `registry` with the process's arguments and the default file environment.
pub fn run(registry: &TestRegistry) -> ExitCode {
    run_with(std::env::args_os(), registry, FileEnvironment)
}

/// Runs `registry` with explicit arguments (including the program name) and environment.
pub fn run_with<I, T, E>(args: I, registry: &TestRegistry, mut environment: E) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    E: Environment,
{
    let config = match parse_args(args) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => return fail(e),
    };

    logging::init(config.trace);
    let console = Console::stdio(&config);
    match execute(config, registry, &mut environment, console) {
        Ok(summary) => summary.exit_code(),
        Err(e) => fail(e),
    }
}

/// Initializes the environment, runs every registry entry, and prints the report.
pub fn execute(
    config: RunConfig,
    registry: &TestRegistry,
    environment: &mut dyn Environment,
    console: Console,
) -> Result<Summary> {
    let settings = environment.initialize(&config)?;
    let mut runner = TestRunner::with_console(config, console).with_settings(settings);
    registry.run_all(&mut runner);
    Ok(runner.finish())
}

/// Parses the command line. `Ok(None)` means help or version output was printed.
pub fn parse_args<I, T>(args: I) -> Result<Option<RunConfig>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match TallyArgs::try_parse_from(args) {
        Ok(args) => Ok(Some(args.into_config())),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(usage_error(e)),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn usage_error(err: clap::Error) -> HarnessError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return HarnessError::InvalidOption(arg.clone());
        }
    }
    HarnessError::Usage(err.render().to_string())
}

fn fail(err: HarnessError) -> ExitCode {
    let report = miette::Report::new(err);
    eprintln!("{report:?}");
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Settings;
    use crate::output::SharedBuffer;

    #[test]
    fn invalid_option_names_the_flag() {
        let err = parse_args(["tally", "-z"]).unwrap_err();
        assert!(matches!(&err, HarnessError::InvalidOption(flag) if flag == "-z"));
        assert_eq!(err.to_string(), "Invalid option: `-z'");
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(matches!(parse_args(["tally", "--help"]), Ok(None)));
    }

    #[test]
    fn failed_environment_runs_nothing() {
        let registry = TestRegistry::new().with(|_: &mut TestRunner| {
            panic!("suites must not run when initialization fails");
        });
        let mut env = |_: &RunConfig| -> Result<Settings> {
            Err(HarnessError::Environment("no database".into()))
        };
        let out = SharedBuffer::new();
        let config = RunConfig::quiet();
        let console = Console::captured(&config, out.clone(), SharedBuffer::new());

        let result = execute(config, &registry, &mut env, console);
        assert!(matches!(result, Err(HarnessError::Environment(_))));
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn settings_reach_the_suites() {
        let registry = TestRegistry::new().with(|runner: &mut TestRunner| {
            let suite = runner.add_suite("settings.rs");
            let expected = runner.settings().get_str("region").map(str::to_owned);
            runner.run(suite, |tc| {
                tc.str_equal(Some("eu-west"), expected.as_deref(), line!())
            });
        });
        let mut env = |_: &RunConfig| -> Result<Settings> {
            let mut settings = Settings::default();
            settings.insert("region", "eu-west");
            Ok(settings)
        };
        let config = RunConfig::quiet();
        let console = Console::captured(&config, SharedBuffer::new(), SharedBuffer::new());

        let summary = execute(config, &registry, &mut env, console).unwrap();
        assert!(summary.passed());
        assert_eq!(summary.total_tests(), 1);
    }
}
