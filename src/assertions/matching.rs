//! Regular-expression matching.

use std::panic::Location;

use crate::patterns::PatternCache;
use crate::reporter::Reporter;

/// Asserts that `pattern` matches somewhere in `got`, using the process-wide
/// [`PatternCache`].
#[track_caller]
pub fn regex_matches<R>(t: &mut R, got: &str, pattern: &str)
where
    R: Reporter + ?Sized,
{
    regex_matches_in(t, PatternCache::global(), got, pattern)
}

/// Like [`regex_matches`], resolving `pattern` through an explicit cache.
///
/// A pattern that does not compile is registered through `fatal_fmt` whatever
/// reporter was passed in, and no match is attempted.
#[track_caller]
pub fn regex_matches_in<R>(t: &mut R, cache: &PatternCache, got: &str, pattern: &str)
where
    R: Reporter + ?Sized,
{
    let regex = match cache.resolve(pattern) {
        Ok(regex) => regex,
        Err(err) => {
            t.helper(Location::caller());
            t.fatal_fmt(format_args!("{}", err));
            return;
        }
    };

    if !regex.is_match(got) {
        t.helper(Location::caller());
        t.error_fmt(format_args!(
            "received string {:?} not matched by pattern /{}/",
            got, pattern
        ));
    }
}
