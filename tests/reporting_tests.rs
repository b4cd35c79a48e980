//! Fatal conversion, failure attribution, and regex matching through the cache.

use std::panic::{catch_unwind, AssertUnwindSafe};

use predicates::prelude::*;
use verdict::*;

#[cfg(test)]
mod fatal_adapter_tests {
    use super::*;

    #[test]
    fn test_fatal_reporter_converts_error() {
        let mut t = Recorder::new();
        fatal(&mut t).error("foo");

        assert_eq!(t.fatals().count(), 1);
        assert_eq!(t.errors().count(), 0);
        assert!(!t.reports()[0].formatted);
    }

    #[test]
    fn test_fatal_reporter_converts_error_fmt() {
        let mut t = Recorder::new();
        fatal(&mut t).error_fmt(format_args!("foo {}", 1));

        assert_eq!(t.fatals().count(), 1);
        assert_eq!(t.errors().count(), 0);
        assert!(t.reports()[0].formatted);
        assert_eq!(t.messages(), vec!["foo 1"]);
    }

    #[test]
    fn test_fatal_reporter_passes_helper_through() {
        let mut t = Recorder::new();
        slice_contains(&mut fatal(&mut t), &[1, 2, 3], &[4, 5]);

        assert_eq!(t.fatals().count(), 2);
        assert_eq!(t.helper_calls(), 2);
    }

    #[test]
    fn test_fatal_reporter_wraps_trait_objects() {
        let mut t = Recorder::new();
        {
            let dynamic: &mut dyn Reporter = &mut t;
            let mut wrapped = fatal(dynamic);
            equal(&mut wrapped, 1, 2);
        }
        assert_eq!(t.fatals().count(), 1);
    }

    #[test]
    fn test_passing_assertion_leaves_wrapped_reporter_clean() {
        let mut t = Recorder::new();
        let mut wrapped = fatal(&mut t);
        map_contains_key(&mut wrapped, &std::collections::HashMap::from([("k", 0)]), ["k"]);
        assert!(wrapped.into_inner().is_clean());
    }
}

#[cfg(test)]
mod attribution_tests {
    use super::*;

    #[test]
    fn test_failures_point_at_the_calling_line() {
        let mut t = Recorder::new();
        let line = line!() + 1;
        equal(&mut t, 1, 2);

        let location = t.reports()[0].location.expect("helper location");
        assert_eq!(location.file(), file!());
        assert_eq!(location.line(), line);
    }

    #[test]
    fn test_regex_matches_attribution_through_global_wrapper() {
        let mut t = Recorder::new();
        let line = line!() + 1;
        regex_matches(&mut t, "...", r"\w{3}\d{3}");

        let location = t.reports()[0].location.expect("helper location");
        assert_eq!(location.line(), line);
    }
}

#[cfg(test)]
mod regex_tests {
    use super::*;

    #[test]
    fn test_basic_match() {
        let cache = PatternCache::new();
        let mut t = Recorder::new();
        regex_matches_in(&mut t, &cache, "abc123", r"\w{3}\d{3}");

        assert!(t.is_clean());
        assert_eq!(t.helper_calls(), 0);
    }

    #[test]
    fn test_no_match() {
        let cache = PatternCache::new();
        let mut t = Recorder::new();
        regex_matches_in(&mut t, &cache, "...", r"\w{3}\d{3}");

        assert_eq!(t.errors().count(), 1);
        assert_eq!(t.fatals().count(), 0);
        assert_eq!(t.helper_calls(), 1);
        assert_eq!(
            t.messages(),
            vec![r#"received string "..." not matched by pattern /\w{3}\d{3}/"#]
        );
    }

    #[test]
    fn test_match_is_unanchored() {
        let cache = PatternCache::new();
        let mut t = Recorder::new();
        regex_matches_in(&mut t, &cache, "xx abc123 yy", r"\w{3}\d{3}");
        assert!(t.is_clean());
    }

    #[test]
    fn test_invalid_pattern_is_fatal_without_adapter() {
        let cache = PatternCache::new();
        let mut t = Recorder::new();
        regex_matches_in(&mut t, &cache, "abc123", r"\1");

        assert_eq!(t.errors().count(), 0);
        assert_eq!(t.fatals().count(), 1);
        assert_eq!(t.helper_calls(), 1);
        assert!(predicate::str::starts_with("failed to compile regular expression")
            .eval(t.messages()[0]));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_pattern_compiled_once() {
        let cache = PatternCache::new();
        let mut t = Recorder::new();
        regex_matches_in(&mut t, &cache, "abc123", r"\w{3}\d{3}");
        regex_matches_in(&mut t, &cache, "...", r"\w{3}\d{3}");

        assert_eq!(cache.compilations(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(t.errors().count(), 1);
    }

    #[test]
    fn test_global_cache_reuses_patterns() {
        // A pattern no other test uses, so parallel tests cannot race on it.
        let pattern = r"^global-cache-\d+$";
        let mut t = Recorder::new();
        regex_matches(&mut t, "global-cache-1", pattern);
        let first = PatternCache::global().resolve(pattern).unwrap();
        regex_matches(&mut t, "global-cache-2", pattern);
        let second = PatternCache::global().resolve(pattern).unwrap();

        assert!(t.is_clean());
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }
}

#[cfg(test)]
mod test_reporter_tests {
    use super::*;

    fn quiet() -> TestReporter {
        TestReporter::with_config(ReporterConfig {
            use_colors: false,
            ..ReporterConfig::named("quiet")
        })
    }

    fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn test_non_fatal_assertions_keep_running() {
        let mut statements_run = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut t = quiet();
            equal(&mut t, 1, 2);
            statements_run += 1;
            slice_contains(&mut t, &[1], &[2, 3]);
            statements_run += 1;
        }));

        assert_eq!(statements_run, 2);
        let message = panic_message(result.expect_err("reporter should fail the test"));
        assert!(message.contains("3 assertion failure(s)"));
        assert!(!message.contains("expected 2, got 1"), "failures are printed, not repeated");
    }

    #[test]
    fn test_fatal_assertion_stops_the_test() {
        let mut statements_run = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut t = quiet();
            equal(&mut fatal(&mut t), 1, 2);
            statements_run += 1;
        }));

        assert_eq!(statements_run, 0);
        let message = panic_message(result.expect_err("fatal should unwind"));
        assert!(message.contains("expected 2, got 1"));
    }

    #[test]
    fn test_bad_pattern_stops_the_test() {
        let cache = PatternCache::new();
        let mut statements_run = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut t = quiet();
            regex_matches_in(&mut t, &cache, "abc", "(unclosed");
            statements_run += 1;
        }));

        assert_eq!(statements_run, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_passing_assertions_do_not_fail() {
        let mut t = quiet();
        greater_than(&mut t, 2, 1);
        no_error(&mut t, &Ok::<_, std::io::Error>(()));
        regex_matches(&mut t, "abc123", r"\w{3}\d{3}");
        assert!(!t.failed());
    }
}
