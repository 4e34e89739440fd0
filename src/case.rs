//! Test cases and the assertion family.
//!
//! A [`Case`] is created by [`crate::runner::TestRunner::run_case`] for the
//! duration of one test function. The first failed check marks the case
//! failed; every later check still advances the spinner but evaluates
//! nothing, so a case is counted as failed at most once.
//!
//! The `check_*!` macros fill in the source line automatically:
//!
//! ```rust
//! use tally::{check_int_eq, check_str_eq, Case};
//!
//! fn addition(tc: &mut Case<'_>) {
//!     check_int_eq!(tc, 4, 2 + 2);
//!     check_str_eq!(tc, Some("ab"), Some(&*format!("a{}", "b")));
//! }
//! ```

use std::fmt::Display;

use crate::output::Console;
use crate::suite::Suite;

/// Integer types accepted by [`Case::int_equal`] and [`Case::int_nequal`].
///
/// Every implementor widens to `i128` without loss, so `u64::MAX` and `-1`
/// stay distinct. Floats and `u128` do not implement it.
pub trait CheckInt: Copy {
    fn widen(self) -> i128;
}

macro_rules! impl_check_int {
    ($($ty:ty),*) => {
        $(impl CheckInt for $ty {
            fn widen(self) -> i128 {
                i128::from(self)
            }
        })*
    };
}

impl_check_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// pointer-sized integers are at most 64 bits wide
impl CheckInt for usize {
    fn widen(self) -> i128 {
        self as i128
    }
}

impl CheckInt for isize {
    fn widen(self) -> i128 {
        self as i128
    }
}

pub struct Case<'a> {
    failed: bool,
    suite: &'a mut Suite,
    console: &'a mut Console,
}

impl<'a> Case<'a> {
    pub(crate) fn new(suite: &'a mut Suite, console: &'a mut Console) -> Self {
        Self {
            failed: false,
            suite,
            console,
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Name of the suite this case belongs to.
    pub fn suite_name(&self) -> &str {
        &self.suite.name
    }

    /// Spinner tick plus the short-circuit shared by every check.
    /// Returns `true` when the check should be evaluated.
    fn begin(&mut self) -> bool {
        self.console.tick();
        !self.failed
    }

    fn record(&mut self, passed: bool, lineno: u32, describe: impl FnOnce() -> String) -> bool {
        if passed {
            return true;
        }
        self.failed = true;
        if self.console.is_verbose() {
            let text = describe();
            self.console.diagnostic(lineno, &text);
        }
        false
    }

    fn mismatch(expected: impl Display, actual: impl Display) -> String {
        format!("expected <{}>, but saw <{}>", expected, actual)
    }

    pub fn int_equal(&mut self, expected: impl CheckInt, actual: impl CheckInt, lineno: u32) {
        if !self.begin() {
            return;
        }
        let (expected, actual) = (expected.widen(), actual.widen());
        self.record(expected == actual, lineno, || Self::mismatch(expected, actual));
    }

    pub fn int_nequal(&mut self, expected: impl CheckInt, actual: impl CheckInt, lineno: u32) {
        if !self.begin() {
            return;
        }
        let (expected, actual) = (expected.widen(), actual.widen());
        self.record(expected != actual, lineno, || Self::mismatch(expected, actual));
    }

    pub fn size_equal(&mut self, expected: usize, actual: usize, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(expected == actual, lineno, || {
            format!("expected {}, but saw {}", expected, actual)
        });
    }

    /// Both `None` passes; one `None` or differing contents fails.
    pub fn str_equal(&mut self, expected: Option<&str>, actual: Option<&str>, lineno: u32) {
        if !self.begin() {
            return;
        }
        let passed = expected == actual;
        let ok = self.record(passed, lineno, || {
            Self::mismatch(or_null(expected), or_null(actual))
        });
        if ok {
            return;
        }
        if let (Some(e), Some(a)) = (expected, actual) {
            if e.contains('\n') || a.contains('\n') {
                self.console.diff(e, a);
            }
        }
    }

    /// Compares at most the first `n` bytes, stopping early where either string ends.
    pub fn str_nequal(&mut self, expected: &str, actual: &str, n: usize, lineno: u32) {
        if !self.begin() {
            return;
        }
        let passed = expected.bytes().take(n).eq(actual.bytes().take(n));
        self.record(passed, lineno, || Self::mismatch(expected, actual));
    }

    pub fn ptr_null<T: ?Sized>(&mut self, ptr: Option<&T>, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(ptr.is_none(), lineno, || {
            format!("Expected NULL, but saw <{}>", address(ptr))
        });
    }

    pub fn ptr_notnull<T: ?Sized>(&mut self, ptr: Option<&T>, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(ptr.is_some(), lineno, || {
            format!("Expected not NULL, but saw <{}>", address(ptr))
        });
    }

    pub fn ptr_equal<T: ?Sized>(&mut self, expected: &T, actual: &T, lineno: u32) {
        if !self.begin() {
            return;
        }
        let passed = std::ptr::eq(expected, actual);
        self.record(passed, lineno, || {
            format!("expected <{:p}>, but saw <{:p}>", expected, actual)
        });
    }

    pub fn fail(&mut self, message: &str, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(false, lineno, || message.to_string());
    }

    pub fn assert(&mut self, message: &str, condition: bool, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(condition, lineno, || message.to_string());
    }

    pub fn is_true(&mut self, condition: bool, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(condition, lineno, || {
            "Condition is false, but expected true".to_string()
        });
    }

    pub fn is_false(&mut self, condition: bool, lineno: u32) {
        if !self.begin() {
            return;
        }
        self.record(!condition, lineno, || {
            "Condition is true, but expected false".to_string()
        });
    }

    /// Marks unfinished work. Counted on the suite, never fails the case.
    pub fn not_impl(&mut self, message: &str, lineno: u32) {
        self.console.tick();
        self.suite.not_implemented_count += 1;
        self.console.diagnostic(lineno, message);
    }

    /// Free-form verbose output from inside a test.
    pub fn log(&mut self, message: impl AsRef<str>) {
        self.console.tick();
        self.console.message(message.as_ref());
    }
}

fn or_null(s: Option<&str>) -> &str {
    s.unwrap_or("(null)")
}

fn address<T: ?Sized>(ptr: Option<&T>) -> String {
    match ptr {
        Some(p) => format!("{:p}", p),
        None => "0x0".to_string(),
    }
}

// ============================================================================
// LINE-CAPTURING MACROS
// ============================================================================

#[macro_export]
macro_rules! check_int_eq {
    ($case:expr, $expected:expr, $actual:expr $(,)?) => {
        $case.int_equal($expected, $actual, line!())
    };
}

#[macro_export]
macro_rules! check_int_ne {
    ($case:expr, $expected:expr, $actual:expr $(,)?) => {
        $case.int_nequal($expected, $actual, line!())
    };
}

#[macro_export]
macro_rules! check_size_eq {
    ($case:expr, $expected:expr, $actual:expr $(,)?) => {
        $case.size_equal($expected, $actual, line!())
    };
}

#[macro_export]
macro_rules! check_str_eq {
    ($case:expr, $expected:expr, $actual:expr $(,)?) => {
        $case.str_equal($expected, $actual, line!())
    };
}

#[macro_export]
macro_rules! check_str_eq_n {
    ($case:expr, $expected:expr, $actual:expr, $n:expr $(,)?) => {
        $case.str_nequal($expected, $actual, $n, line!())
    };
}

#[macro_export]
macro_rules! check_null {
    ($case:expr, $ptr:expr $(,)?) => {
        $case.ptr_null($ptr, line!())
    };
}

#[macro_export]
macro_rules! check_not_null {
    ($case:expr, $ptr:expr $(,)?) => {
        $case.ptr_notnull($ptr, line!())
    };
}

#[macro_export]
macro_rules! check_ptr_eq {
    ($case:expr, $expected:expr, $actual:expr $(,)?) => {
        $case.ptr_equal($expected, $actual, line!())
    };
}

#[macro_export]
macro_rules! check_fail {
    ($case:expr, $message:expr $(,)?) => {
        $case.fail($message, line!())
    };
}

#[macro_export]
macro_rules! check {
    ($case:expr, $message:expr, $condition:expr $(,)?) => {
        $case.assert($message, $condition, line!())
    };
}

#[macro_export]
macro_rules! check_true {
    ($case:expr, $condition:expr $(,)?) => {
        $case.is_true($condition, line!())
    };
}

#[macro_export]
macro_rules! check_false {
    ($case:expr, $condition:expr $(,)?) => {
        $case.is_false($condition, line!())
    };
}

#[macro_export]
macro_rules! check_not_impl {
    ($case:expr, $message:expr $(,)?) => {
        $case.not_impl($message, line!())
    };
}
