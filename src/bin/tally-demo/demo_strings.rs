use tally::{check_null, check_str_eq, check_str_eq_n, check_true, Case, TestRunner};

fn trims_whitespace(tc: &mut Case<'_>, input: &str) {
    check_str_eq!(tc, Some("tally"), Some(input.trim()));
}

fn joins_words(tc: &mut Case<'_>) {
    let joined = ["spin", "ner"].concat();
    check_str_eq!(tc, Some("spinner"), Some(joined.as_str()));
    check_str_eq_n!(tc, "spin", &joined, 4);
}

fn finds_nothing(tc: &mut Case<'_>) {
    let words = ["alpha", "beta"];
    check_null!(tc, words.iter().find(|w| w.starts_with('z')));
    check_true!(tc, words.contains(&"beta"));
}

pub fn suite(runner: &mut TestRunner) {
    let suite = runner.add_suite(file!());
    runner.run_case(suite, trims_whitespace, "  tally\t");
    runner.run(suite, joins_words);
    runner.run(suite, finds_nothing);
}
