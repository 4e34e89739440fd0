//! Decides which suites execute.

use crate::config::RunConfig;

/// Include/exclude policy over suite names, borrowed from a [`RunConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RunFilter<'a> {
    names: Option<&'a [String]>,
    exclude: bool,
    list_only: bool,
}

impl<'a> RunFilter<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            names: config.filter.as_deref(),
            exclude: config.exclude,
            list_only: config.list_only,
        }
    }

    /// Listing and executing are mutually exclusive, so list-only mode never runs a suite.
    pub fn should_run(&self, suite_name: &str) -> bool {
        if self.list_only {
            return false;
        }
        let Some(names) = self.names else {
            return true;
        };
        let found = names.iter().any(|n| n == suite_name);
        found != self.exclude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: Option<&[&str]>, exclude: bool, list_only: bool) -> RunConfig {
        RunConfig {
            filter: filter.map(|f| f.iter().map(|s| s.to_string()).collect()),
            exclude,
            list_only,
            ..RunConfig::quiet()
        }
    }

    #[test]
    fn no_filter_runs_everything() {
        let cfg = config(None, false, false);
        let filter = RunFilter::new(&cfg);
        assert!(filter.should_run("mod_a"));
        assert!(filter.should_run("anything"));
    }

    #[test]
    fn exclude_without_list_still_runs_everything() {
        let cfg = config(None, true, false);
        assert!(RunFilter::new(&cfg).should_run("mod_a"));
    }

    #[test]
    fn include_list_runs_members_only() {
        let cfg = config(Some(&["mod_a"]), false, false);
        let filter = RunFilter::new(&cfg);
        assert!(filter.should_run("mod_a"));
        assert!(!filter.should_run("mod_b"));
    }

    #[test]
    fn exclude_list_skips_members() {
        let cfg = config(Some(&["mod_a"]), true, false);
        let filter = RunFilter::new(&cfg);
        assert!(!filter.should_run("mod_a"));
        assert!(filter.should_run("mod_b"));
    }

    #[test]
    fn list_only_never_runs() {
        for (names, exclude) in [(None, false), (Some(&["mod_a"][..]), false), (Some(&["mod_a"][..]), true)] {
            let cfg = config(names, exclude, true);
            let filter = RunFilter::new(&cfg);
            assert!(!filter.should_run("mod_a"));
            assert!(!filter.should_run("mod_b"));
        }
    }

    #[test]
    fn membership_is_exact() {
        let cfg = config(Some(&["mod"]), false, false);
        let filter = RunFilter::new(&cfg);
        assert!(!filter.should_run("mod_a"));
        assert!(!filter.should_run("MOD"));
    }
}
