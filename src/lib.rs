//! # Verdict
//!
//! Generic assertion helpers for unit tests that report through a
//! [`Reporter`] instead of panicking on the spot.
//!
//! A failing assertion marks its caller and registers a non-fatal failure, so
//! one test can check many conditions and see all of them fail. Wrap the
//! reporter with [`fatal`] to abort at the first failure instead.
//!
//! ```should_panic
//! use verdict::{fatal, TestReporter};
//!
//! let mut t = TestReporter::new();
//! verdict::greater_than(&mut t, 3, 2);
//! verdict::slice_contains(&mut t, &[1, 2, 3], &[2, 3]);
//! verdict::regex_matches(&mut t, "abc123", r"\w{3}\d{3}");
//! verdict::equal(&mut fatal(&mut t), "left", "right"); // panics here
//! ```

pub mod assertions;
pub mod host;
pub mod patterns;
pub mod recorder;
pub mod reporter;

pub use assertions::*;
pub use host::{Failure, ReporterConfig, TestReporter};
pub use patterns::{PatternCache, PatternError};
pub use recorder::{Recorder, Report, Severity};
pub use reporter::{fatal, FatalReporter, Reporter};
