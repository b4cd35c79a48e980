//! # libtest Reporter
//!
//! Binds the [`Reporter`] capability to plain `#[test]` functions.
//!
//! - Non-fatal failures are printed to stderr as they happen and remembered;
//!   when the reporter is dropped with failures on record, it panics with a
//!   count so the test is marked failed after the rest of its body has run.
//! - Fatal failures panic on the spot with the failure as the panic message,
//!   unwinding out of the test.
//!
//! Each failure is shown exactly once, as `file:line:col: message`, where the
//! location comes from the most recent helper marking (the test line that
//! called the assertion).

use std::fmt;
use std::io::Write;
use std::panic::Location;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::reporter::Reporter;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output settings for [`TestReporter`].
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    pub use_colors: bool,
    /// Shown in the end-of-test summary when set.
    pub name: Option<String>,
}

impl ReporterConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            use_colors: std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr),
            name: None,
        }
    }
}

// ============================================================================
// TEST REPORTER
// ============================================================================

/// A failure registered against the current test.
#[derive(Debug, Clone)]
pub struct Failure {
    pub message: String,
    pub location: Option<&'static Location<'static>>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(loc) => write!(f, "{}:{}:{}: {}", loc.file(), loc.line(), loc.column(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// [`Reporter`] for tests run by the standard test harness.
///
/// ```should_panic
/// use verdict::TestReporter;
///
/// let mut t = TestReporter::new();
/// verdict::equal(&mut t, 1 + 1, 3);
/// // still running here; the test fails when `t` goes out of scope
/// ```
pub struct TestReporter {
    config: ReporterConfig,
    failures: Vec<Failure>,
    caller: Option<&'static Location<'static>>,
}

impl TestReporter {
    pub fn new() -> Self {
        Self::with_config(ReporterConfig::default())
    }

    pub fn with_config(config: ReporterConfig) -> Self {
        Self {
            config,
            failures: Vec::new(),
            caller: None,
        }
    }

    /// Non-fatal failures registered so far.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    fn take_failure(&mut self, message: String) -> Failure {
        Failure {
            message,
            location: self.caller.take(),
        }
    }

    fn print(&self, failure: &Failure) {
        let mut stderr = StandardStream::stderr(self.config.color_choice());
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(stderr, "FAIL");
        let _ = stderr.reset();
        let _ = writeln!(stderr, ": {}", failure);
    }

    fn record(&mut self, message: String) {
        let failure = self.take_failure(message);
        self.print(&failure);
        self.failures.push(failure);
    }

    // Earlier failures were printed when recorded; the panic carries only this one.
    fn abort(&mut self, message: String) -> ! {
        let failure = self.take_failure(message);
        self.failures.clear();
        panic!("{}", failure);
    }

    fn title(&self) -> &str {
        self.config.name.as_deref().unwrap_or("test")
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TestReporter {
    fn error(&mut self, message: &str) {
        self.record(message.to_string());
    }

    fn error_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.record(args.to_string());
    }

    fn fatal(&mut self, message: &str) {
        self.abort(message.to_string())
    }

    fn fatal_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.abort(args.to_string())
    }

    fn helper(&mut self, caller: &'static Location<'static>) {
        self.caller = Some(caller);
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.failures.is_empty() || std::thread::panicking() {
            return;
        }
        panic!(
            "{} failed with {} assertion failure(s), reported above",
            self.title(),
            self.failures.len()
        );
    }
}
