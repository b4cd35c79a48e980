//! In-memory reporter that records registrations instead of acting on them.
//!
//! Used to test assertion helpers: failures land in a list the test can inspect,
//! and a "fatal" registration is recorded rather than aborting anything.

use std::fmt;
use std::panic::Location;

use crate::reporter::Reporter;

/// Whether a registration went through the non-fatal or the fatal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Fatal,
}

/// One recorded failure registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    /// True when registered through `error_fmt`/`fatal_fmt`.
    pub formatted: bool,
    pub message: String,
    /// Location from the most recent `helper` call, if any.
    pub location: Option<&'static Location<'static>>,
}

/// A [`Reporter`] that keeps every call for later inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    reports: Vec<Report>,
    helper_calls: usize,
    caller: Option<&'static Location<'static>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded reports and the helper counter.
    pub fn reset(&mut self) {
        self.reports.clear();
        self.helper_calls = 0;
        self.caller = None;
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn errors(&self) -> impl Iterator<Item = &Report> {
        self.by_severity(Severity::Error)
    }

    pub fn fatals(&self) -> impl Iterator<Item = &Report> {
        self.by_severity(Severity::Fatal)
    }

    /// Messages of every report, in registration order.
    pub fn messages(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.message.as_str()).collect()
    }

    pub fn helper_calls(&self) -> usize {
        self.helper_calls
    }

    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Report> {
        self.reports.iter().filter(move |r| r.severity == severity)
    }

    fn record(&mut self, severity: Severity, formatted: bool, message: String) {
        self.reports.push(Report {
            severity,
            formatted,
            message,
            location: self.caller.take(),
        });
    }
}

impl Reporter for Recorder {
    fn error(&mut self, message: &str) {
        self.record(Severity::Error, false, message.to_string());
    }

    fn error_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.record(Severity::Error, true, args.to_string());
    }

    fn fatal(&mut self, message: &str) {
        self.record(Severity::Fatal, false, message.to_string());
    }

    fn fatal_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.record(Severity::Fatal, true, args.to_string());
    }

    fn helper(&mut self, caller: &'static Location<'static>) {
        self.helper_calls += 1;
        self.caller = Some(caller);
    }
}
