//! The test runner: suite registration, case execution, and the hand-off to reporting.

use tracing::{debug, trace, warn};

use crate::case::Case;
use crate::config::RunConfig;
use crate::env::Settings;
use crate::filter::RunFilter;
use crate::output::Console;
use crate::report::Summary;
use crate::suite::{suite_name, Suite, SuiteHandle};

/// Owns every suite of a run, in registration order.
pub struct TestRunner {
    config: RunConfig,
    settings: Settings,
    console: Console,
    suites: Vec<Suite>,
    /// Suite whose header is printed and whose verdict is still pending.
    open: Option<usize>,
}

impl TestRunner {
    /// Runner writing to the process's stdout and stderr.
    pub fn new(config: RunConfig) -> Self {
        let console = Console::stdio(&config);
        Self::with_console(config, console)
    }

    pub fn with_console(config: RunConfig, console: Console) -> Self {
        Self {
            config,
            settings: Settings::default(),
            console,
            suites: Vec::new(),
            open: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Values loaded by the environment initializer.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// `None` when `handle` was issued by a different runner.
    pub fn suite(&self, handle: SuiteHandle) -> Option<&Suite> {
        self.suites.get(handle.0)
    }

    pub fn should_run(&self, name: &str) -> bool {
        RunFilter::new(&self.config).should_run(name)
    }

    /// Registers a new suite named after `raw_name` (usually `file!()`).
    ///
    /// Closes the previously open suite first. In list-only mode the name is
    /// printed and the suite is recorded as not run.
    pub fn add_suite(&mut self, raw_name: &str) -> SuiteHandle {
        self.close_open_suite();

        let name = suite_name(raw_name);
        if self.config.list_only {
            self.console.line(name);
        }

        let mut suite = Suite::new(name);
        let run = self.should_run(name);
        suite.not_run = !run;
        self.suites.push(suite);
        let handle = SuiteHandle(self.suites.len() - 1);

        if !run {
            debug!(suite = name, "suite skipped");
            return handle;
        }

        debug!(suite = name, "suite started");
        self.console.suite_header(name);
        self.open = Some(handle.0);
        handle
    }

    /// Runs `test` with `value` as a case of the suite behind `handle`.
    ///
    /// A handle this runner never issued is ignored with a warning.
    pub fn run_case<T, F>(&mut self, handle: SuiteHandle, test: F, value: &T)
    where
        T: ?Sized,
        F: FnOnce(&mut Case<'_>, &T),
    {
        let Some(suite) = self.suites.get_mut(handle.0) else {
            warn!(index = handle.0, "case added to an unknown suite");
            return;
        };
        if suite.not_run {
            return;
        }
        if self.open != Some(handle.0) {
            warn!(suite = %suite.name, "case added to a suite that is no longer open");
        }

        suite.test_count += 1;
        self.console.tick();

        let failed = {
            let mut case = Case::new(suite, &mut self.console);
            test(&mut case, value);
            case.failed()
        };
        if failed {
            suite.failed_count += 1;
        }
        trace!(
            suite = %suite.name,
            case = suite.test_count,
            failed,
            "case finished"
        );
    }

    /// [`run_case`](Self::run_case) for tests that take no argument.
    pub fn run<F>(&mut self, handle: SuiteHandle, test: F)
    where
        F: FnOnce(&mut Case<'_>),
    {
        self.run_case(handle, |tc, _: &()| test(tc), &());
    }

    /// Verbose-only message on stderr, outside of any case.
    pub fn log_message(&mut self, message: impl AsRef<str>) {
        self.console.tick();
        self.console.message(message.as_ref());
    }

    /// Closes the last suite and prints the end-of-run report.
    pub fn finish(mut self) -> Summary {
        self.close_open_suite();
        let summary = Summary::new(self.suites, self.config.list_only);
        summary.print(&mut self.console);
        summary
    }

    fn close_open_suite(&mut self) {
        if let Some(index) = self.open.take() {
            let suite = &self.suites[index];
            debug!(
                suite = %suite.name,
                tests = suite.test_count,
                failed = suite.failed_count,
                "suite finished"
            );
            self.console.suite_result(suite);
        }
    }
}
