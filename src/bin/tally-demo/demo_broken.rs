//! Deliberately failing suite, so the failure table can be seen (`tally-demo -x demo_broken` skips it).

use tally::{check, check_fail, check_int_eq, check_not_null, check_str_eq, Case, TestRunner};

fn off_by_one(tc: &mut Case<'_>) {
    let items = [1, 2, 3];
    check_int_eq!(tc, 4, items.len());
    // never reported: the case already failed
    check_int_eq!(tc, 5, items.len());
}

fn missing_value(tc: &mut Case<'_>) {
    let found: Option<&u8> = None;
    check_not_null!(tc, found);
}

fn passes(tc: &mut Case<'_>) {
    check_str_eq!(tc, None, None);
    check!(tc, "vector should be empty", Vec::<u8>::new().is_empty());
}

fn gives_up(tc: &mut Case<'_>) {
    check_fail!(tc, "giving up on purpose");
}

pub fn suite(runner: &mut TestRunner) {
    let suite = runner.add_suite(file!());
    runner.log_message("demo_broken: the next cases fail on purpose");
    runner.run(suite, off_by_one);
    runner.run(suite, missing_value);
    runner.run(suite, passes);
    runner.run(suite, gives_up);
}
