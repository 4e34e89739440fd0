// Regression tests for the command-line surface, driven through the demo binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::io::Write;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn demo() -> Command {
    Command::cargo_bin("tally-demo").unwrap()
}

#[test]
fn full_run_fails_because_of_the_broken_suite() {
    demo()
        .assert()
        .failure()
        .code(1)
        .stdout(contains("demo_strings        :  SUCCESS"))
        .stdout(contains("demo_broken         :  FAILED 3 of 4"))
        .stdout(contains("Failed Tests"))
        .stdout(contains("demo_broken    \t\t    4\t   3\t 75.00%"))
        .stderr(contains("giving up on purpose"));
}

#[test]
fn excluding_the_broken_suite_passes() {
    demo()
        .args(["-x", "demo_broken"])
        .assert()
        .success()
        .stdout(contains("All tests passed."))
        .stdout(contains("demo_pending: 1 not implemented"))
        .stdout(contains("demo_broken").not());
}

#[test]
fn include_list_runs_only_named_suites() {
    demo()
        .arg("demo_numbers")
        .assert()
        .success()
        .stdout(contains("demo_numbers        :  SUCCESS"))
        .stdout(contains("demo_strings").not());
}

#[test]
fn list_mode_prints_every_suite_and_succeeds() {
    demo()
        .arg("-l")
        .assert()
        .success()
        .stdout("demo_strings\ndemo_numbers\ndemo_pending\ndemo_broken\n");
}

#[test]
fn unknown_flag_exits_with_failure() {
    demo()
        .arg("-z")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid option: `-z'"))
        .stdout("");
}

#[test]
fn missing_config_file_stops_before_any_suite() {
    demo()
        .args(["-f", "/nonexistent/tally.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read config file"))
        .stdout("");
}

#[test]
fn config_file_is_accepted() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "region: eu-west").unwrap();
    demo()
        .arg("-f")
        .arg(file.path())
        .args(["-x", "demo_broken"])
        .assert()
        .success();
}

#[test]
fn control_plane_flag_skips_data_plane_cases() {
    demo()
        .args(["-c", "-q", "demo_numbers"])
        .assert()
        .success()
        .stdout(contains("demo_numbers        :  SUCCESS"))
        .stdout(contains("All tests passed."));
}

#[test]
fn repeated_flags_are_accepted() {
    demo()
        .args(["-q", "-q", "-x", "-x", "demo_broken"])
        .assert()
        .success()
        .stdout(contains("All tests passed."));
}
