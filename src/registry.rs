//! Ordered collection of suite entry functions.
//!
//! Each entry registers one suite on the runner and runs its cases:
//!
//! ```rust
//! use tally::{check_true, RunConfig, TestRegistry, TestRunner};
//!
//! fn math_suite(runner: &mut TestRunner) {
//!     let suite = runner.add_suite(file!());
//!     runner.run(suite, |tc| check_true!(tc, 1 + 1 == 2));
//! }
//!
//! let registry = TestRegistry::new().with(math_suite);
//! let mut runner = TestRunner::new(RunConfig::quiet());
//! registry.run_all(&mut runner);
//! assert!(runner.finish().passed());
//! ```

use crate::runner::TestRunner;

type Entry = Box<dyn Fn(&mut TestRunner)>;

#[derive(Default)]
pub struct TestRegistry {
    entries: Vec<Entry>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, entry: F)
    where
        F: Fn(&mut TestRunner) + 'static,
    {
        self.entries.push(Box::new(entry));
    }

    pub fn with<F>(mut self, entry: F) -> Self
    where
        F: Fn(&mut TestRunner) + 'static,
    {
        self.register(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every entry once, in registration order.
    pub fn run_all(&self, runner: &mut TestRunner) {
        for entry in &self.entries {
            entry(runner);
        }
    }
}
