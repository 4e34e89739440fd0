// Demonstration test binary: links a handful of suites into a registry.
// Usage: cargo run --bin tally-demo -- [-v] [-x] [-l] [-q] [-t] [-c] [-f <path>] [suite...]

use std::process::ExitCode;

use tally::{cli, TestRegistry};

mod demo_broken;
mod demo_numbers;
mod demo_pending;
mod demo_strings;

fn main() -> ExitCode {
    let registry = TestRegistry::new()
        .with(demo_strings::suite)
        .with(demo_numbers::suite)
        .with(demo_pending::suite)
        .with(demo_broken::suite);
    cli::run(&registry)
}
