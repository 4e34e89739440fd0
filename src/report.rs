//! End-of-run reporting and exit status.

use std::process::ExitCode;

use crate::output::Console;
use crate::suite::Suite;

/// Final state of a run, produced by [`crate::runner::TestRunner::finish`].
#[derive(Debug, Clone)]
pub struct Summary {
    suites: Vec<Suite>,
    list_only: bool,
}

impl Summary {
    pub fn new(suites: Vec<Suite>, list_only: bool) -> Self {
        Self { suites, list_only }
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    pub fn total_failed(&self) -> usize {
        self.suites.iter().map(|s| s.failed_count).sum()
    }

    pub fn total_tests(&self) -> usize {
        self.suites.iter().map(|s| s.test_count).sum()
    }

    pub fn total_not_implemented(&self) -> usize {
        self.suites.iter().map(|s| s.not_implemented_count).sum()
    }

    /// Listing never fails; otherwise any failed case fails the run.
    pub fn passed(&self) -> bool {
        self.list_only || self.total_failed() == 0
    }

    pub fn exit_status(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn print(&self, console: &mut Console) {
        if self.list_only {
            return;
        }

        if self.total_failed() == 0 {
            console.line("All tests passed.");
        } else {
            console.line(&format!("{:<15}\t\tTotal\tFail\tFailed %", "Failed Tests"));
            console.line(&"=".repeat(51));
            for suite in self.suites.iter().filter(|s| s.has_failures()) {
                console.line(&failure_row(suite));
            }
        }

        // Informational only: unfinished tests never fail a run.
        for suite in self.suites.iter().filter(|s| s.not_implemented_count > 0) {
            console.line(&format!(
                "{}: {} not implemented",
                suite.name, suite.not_implemented_count
            ));
        }
    }
}

fn failure_row(suite: &Suite) -> String {
    format!(
        "{:<15}\t\t{:>5}\t{:>4}\t{:>6.2}%",
        suite.name,
        suite.test_count,
        suite.failed_count,
        suite.failure_rate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::output::SharedBuffer;

    fn suite(name: &str, tests: usize, failed: usize) -> Suite {
        Suite {
            test_count: tests,
            failed_count: failed,
            ..Suite::new(name)
        }
    }

    fn printed(summary: &Summary) -> String {
        let out = SharedBuffer::new();
        let mut console = Console::captured(&RunConfig::quiet(), out.clone(), SharedBuffer::new());
        summary.print(&mut console);
        out.contents()
    }

    #[test]
    fn all_passed() {
        let summary = Summary::new(vec![suite("a", 3, 0), suite("b", 1, 0)], false);
        assert_eq!(summary.exit_status(), 0);
        assert_eq!(printed(&summary), "All tests passed.\n");
    }

    #[test]
    fn failure_table_lists_only_failing_suites() {
        let summary = Summary::new(
            vec![suite("mod_a", 4, 1), suite("mod_b", 2, 0), suite("mod_c", 3, 3)],
            false,
        );
        assert_eq!(summary.total_failed(), 4);
        assert_eq!(summary.exit_status(), 1);
        let expected = format!(
            "{:<15}\t\tTotal\tFail\tFailed %\n{}\n{}\n{}\n",
            "Failed Tests",
            "=".repeat(51),
            "mod_a          \t\t    4\t   1\t 25.00%",
            "mod_c          \t\t    3\t   3\t100.00%",
        );
        assert_eq!(printed(&summary), expected);
    }

    #[test]
    fn list_only_is_silent_and_successful() {
        let summary = Summary::new(vec![suite("a", 0, 0)], true);
        assert!(summary.passed());
        assert_eq!(printed(&summary), "");
    }

    #[test]
    fn not_implemented_is_reported_but_not_fatal() {
        let mut pending = suite("mod_p", 2, 0);
        pending.not_implemented_count = 2;
        let summary = Summary::new(vec![pending], false);
        assert_eq!(summary.exit_status(), 0);
        assert_eq!(summary.total_not_implemented(), 2);
        assert_eq!(
            printed(&summary),
            "All tests passed.\nmod_p: 2 not implemented\n"
        );
    }

    #[test]
    fn percentage_has_two_decimals() {
        let row = failure_row(&suite("x", 3, 1));
        assert!(row.ends_with(" 33.33%"), "{row}");
    }
}
