//! # Reporting Handles
//!
//! Every assertion in this crate reports through a [`Reporter`]: the capability a
//! test host hands out for recording failures against the running test.
//!
//! ## Reporting Model
//!
//! - **Non-fatal** (`error`, `error_fmt`): record the failure, keep running.
//! - **Fatal** (`fatal`, `fatal_fmt`): record the failure, abort the current test.
//! - **Helper marking** (`helper`): attribute the next failure to the given caller.
//!
//! [`FatalReporter`] turns any reporter's non-fatal path into its fatal one, so a
//! single assertion can be made to stop the test without a second API.

use std::fmt;
use std::panic::Location;

// ============================================================================
// REPORTER CAPABILITY
// ============================================================================

/// The reporting surface a test host exposes to assertion helpers.
///
/// Implementations decide what "abort the current test" means. Under libtest
/// that is a panic (see [`crate::TestReporter`]); a recording implementation
/// such as [`crate::Recorder`] just stores the call.
pub trait Reporter {
    /// Registers a non-fatal failure from a freeform message.
    fn error(&mut self, message: &str);

    /// Registers a non-fatal failure from preformatted arguments.
    fn error_fmt(&mut self, args: fmt::Arguments<'_>);

    /// Registers a fatal failure from a freeform message.
    fn fatal(&mut self, message: &str);

    /// Registers a fatal failure from preformatted arguments.
    fn fatal_fmt(&mut self, args: fmt::Arguments<'_>);

    /// Marks `caller` as the frame a subsequently registered failure belongs to.
    ///
    /// Assertions are `#[track_caller]` and pass [`Location::caller`], which
    /// resolves to the test body that invoked them.
    fn helper(&mut self, caller: &'static Location<'static>);
}

// ============================================================================
// FATAL ADAPTER
// ============================================================================

/// Wraps a reporter so that every non-fatal registration becomes fatal.
///
/// Holds nothing but the borrowed reporter; build one per use site.
///
/// ```
/// use verdict::{fatal, Recorder};
///
/// let mut t = Recorder::new();
/// verdict::equal(&mut fatal(&mut t), 1, 2);
/// assert_eq!(t.fatals().count(), 1);
/// assert_eq!(t.errors().count(), 0);
/// ```
pub struct FatalReporter<'a, R: Reporter + ?Sized> {
    inner: &'a mut R,
}

impl<'a, R: Reporter + ?Sized> FatalReporter<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }

    /// Gives back the wrapped reporter.
    pub fn into_inner(self) -> &'a mut R {
        self.inner
    }
}

impl<R: Reporter + ?Sized> Reporter for FatalReporter<'_, R> {
    fn error(&mut self, message: &str) {
        self.inner.fatal(message)
    }

    fn error_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.inner.fatal_fmt(args)
    }

    fn fatal(&mut self, message: &str) {
        self.inner.fatal(message)
    }

    fn fatal_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.inner.fatal_fmt(args)
    }

    fn helper(&mut self, caller: &'static Location<'static>) {
        self.inner.helper(caller)
    }
}

/// Builds a [`FatalReporter`] around `t`, converting any assertion into a fatal one.
pub fn fatal<R: Reporter + ?Sized>(t: &mut R) -> FatalReporter<'_, R> {
    FatalReporter::new(t)
}
