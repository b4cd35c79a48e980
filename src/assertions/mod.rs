//! # Assertion Functions
//!
//! Flat, stateless checks that report through a [`Reporter`](crate::Reporter).
//!
//! ## Conventions
//!
//! - Every assertion takes the reporter first, then `got`, then the expectation.
//! - On failure it marks the caller with `helper` and registers one non-fatal
//!   message per violated condition. Nothing is returned.
//! - All assertions are `#[track_caller]`, so the location passed to `helper`
//!   is the test line that called them.
//! - Wrap the reporter with [`fatal`](crate::fatal) to stop at the first failure.
//!
//! ## Groups
//!
//! - **Errors**: [`error`], [`no_error`], [`error_is`]
//! - **Comparison**: [`equal`], [`not_equal`], [`deep_equal`], [`not_deep_equal`],
//!   [`greater_than`], [`greater_than_or_equal`], [`less_than`], [`less_than_or_equal`]
//! - **Collections**: [`slice_contains`], [`map_contains`], [`map_contains_key`]
//! - **Matching**: [`regex_matches`], [`regex_matches_in`]

pub mod collections;
pub mod compare;
pub mod errors;
pub mod matching;

pub use collections::{map_contains, map_contains_key, slice_contains, Map};
pub use compare::{
    deep_equal, equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
    not_deep_equal, not_equal, Ordered,
};
pub use errors::{error, error_is, no_error, AsDynError};
pub use matching::{regex_matches, regex_matches_in};
