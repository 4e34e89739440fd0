//! Tally: a small suite-based unit test harness.
//!
//! Test binaries register suites through a [`TestRegistry`], run cases with
//! [`TestRunner::run_case`], and check results with the `check_*!` macros.
//! [`cli::run`] wires it all to the command line.

pub use crate::case::{Case, CheckInt};
pub use crate::config::RunConfig;
pub use crate::env::{Environment, FileEnvironment, Settings};
pub use crate::error::HarnessError;
pub use crate::filter::RunFilter;
pub use crate::output::{Console, SharedBuffer};
pub use crate::registry::TestRegistry;
pub use crate::report::Summary;
pub use crate::runner::TestRunner;
pub use crate::suite::{suite_name, Suite, SuiteHandle};

pub mod case;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod registry;
pub mod report;
pub mod runner;
pub mod spinner;
pub mod suite;
