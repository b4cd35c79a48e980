//! # Pattern Cache
//!
//! Compiled regular expressions keyed by their exact source text.
//!
//! A pattern is compiled the first time it is resolved and the same compiled
//! matcher is handed out for every later lookup. Entries are never evicted;
//! the set of patterns a test suite uses is fixed by its source code.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use miette::Diagnostic;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A regular expression that failed to compile.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to compile regular expression /{pattern}/: {source}")]
#[diagnostic(
    code(verdict::pattern::compile),
    help("patterns use the `regex` crate syntax, which has no look-around or backreferences")
)]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

static SESSION: Lazy<PatternCache> = Lazy::new(PatternCache::new);

/// Memoizing store from pattern text to compiled [`Regex`].
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: Mutex<HashMap<String, Arc<Regex>>>,
    compilations: AtomicUsize,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`crate::regex_matches`].
    pub fn global() -> &'static PatternCache {
        &SESSION
    }

    /// Returns the compiled form of `pattern`, compiling it on first use.
    ///
    /// The lock is held across compilation, so two threads resolving the same
    /// new pattern still produce a single entry. Failed compiles are not cached.
    pub fn resolve(&self, pattern: &str) -> Result<Arc<Regex>, PatternError> {
        let mut entries = self.lock();
        if let Some(regex) = entries.get(pattern) {
            return Ok(Arc::clone(regex));
        }

        self.compilations.fetch_add(1, Ordering::Relaxed);
        let regex = Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        let regex = Arc::new(regex);
        entries.insert(pattern.to_string(), Arc::clone(&regex));
        Ok(regex)
    }

    /// Drops every entry and zeroes the compile counter.
    ///
    /// Only for isolating tests of the cache itself.
    pub fn reset(&self) {
        self.lock().clear();
        self.compilations.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of compile attempts, successful or not, since creation or the last reset.
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }

    // A panic elsewhere cannot leave the map half-updated: the only mutations
    // are a single insert and a clear.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Regex>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
