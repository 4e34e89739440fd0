//! Suite records and display-name derivation.

/// Running totals for one registered suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub name: String,
    pub test_count: usize,
    pub failed_count: usize,
    /// Set when the filter (or list-only mode) skipped this suite.
    pub not_run: bool,
    pub not_implemented_count: usize,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_count: 0,
            failed_count: 0,
            not_run: false,
            not_implemented_count: 0,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count > 0
    }

    /// Percentage of cases that failed, 0.0 for an empty suite.
    pub fn failure_rate(&self) -> f64 {
        if self.test_count == 0 {
            return 0.0;
        }
        (self.failed_count as f64 / self.test_count as f64) * 100.0
    }
}

/// Handle to a suite registered with a [`crate::runner::TestRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiteHandle(pub(crate) usize);

impl SuiteHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Derives a suite's display name from an identifier such as `file!()`.
///
/// Keeps what follows the last path separator, then drops everything from the
/// last `.` onwards.
pub fn suite_name(raw: &str) -> &str {
    let base = match raw.rfind(|c: char| c == '/' || c == '\\') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };
    match base.rfind('.') {
        Some(pos) => &base[..pos],
        None => base,
    }
}
