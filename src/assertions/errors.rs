//! Assertions over `Result`s and error chains.

use std::error::Error;
use std::fmt::Debug;
use std::iter;
use std::panic::Location;

use crate::reporter::Reporter;

/// Views a value as a `'static` trait-object error, so concrete error types and
/// `dyn Error` objects can be passed to [`error_is`] alike.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Asserts that `result` is an `Err`.
#[track_caller]
pub fn error<R, T, E>(t: &mut R, result: &Result<T, E>)
where
    R: Reporter + ?Sized,
{
    if result.is_ok() {
        t.helper(Location::caller());
        t.error("expected error, got none");
    }
}

/// Asserts that `result` is `Ok`.
#[track_caller]
pub fn no_error<R, T, E>(t: &mut R, result: &Result<T, E>)
where
    R: Reporter + ?Sized,
    E: Debug,
{
    if let Err(err) = result {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected no error, got {:?}", err));
    }
}

/// Asserts that `target` is `err` or appears in its `source()` chain.
///
/// Links are matched by downcasting to `E` and comparing with `==`. Two absent
/// errors match each other, so `error_is(t, None, None)` passes.
#[track_caller]
pub fn error_is<R, D, E>(t: &mut R, err: Option<&D>, target: Option<&E>)
where
    R: Reporter + ?Sized,
    D: AsDynError + ?Sized,
    E: Error + PartialEq + 'static,
{
    let err = err.map(AsDynError::as_dyn_error);
    if !is(err, target) {
        t.helper(Location::caller());
        t.error_fmt(format_args!(
            "expected error {}, got {}",
            render(target.map(AsDynError::as_dyn_error)),
            render(err)
        ));
    }
}

fn is<E>(err: Option<&(dyn Error + 'static)>, target: Option<&E>) -> bool
where
    E: Error + PartialEq + 'static,
{
    match (err, target) {
        (None, None) => true,
        (Some(err), Some(target)) => {
            iter::successors(Some(err), |&e| e.source()).any(|e| e.downcast_ref::<E>() == Some(target))
        }
        _ => false,
    }
}

// Quoted like `{:?}` renders a string, so messages read the same as `no_error`'s.
fn render(err: Option<&(dyn Error + 'static)>) -> String {
    err.map_or_else(|| "none".to_string(), |e| format!("{:?}", e.to_string()))
}
