//! Equality and ordering assertions.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::panic::Location;

use crate::reporter::Reporter;

// ============================================================================
// EQUALITY
// ============================================================================

/// Asserts `got == expected` for a single comparable type.
#[track_caller]
pub fn equal<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if expected != got {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:?}, got {:?}", expected, got));
    }
}

/// Asserts `got != expected` for a single comparable type.
#[track_caller]
pub fn not_equal<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if expected == got {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:?} to not equal {:?}", got, expected));
    }
}

/// Asserts structural equality between two possibly different types.
///
/// Any `T: PartialEq<E>` pairing works, e.g. `Vec<i32>` against `[i32; 3]`.
/// Smart pointers and references compare their pointees, so two separately
/// allocated `Box`es holding equal values are equal. Failures render both
/// sides with `{:#?}`.
///
/// Operands of unrelated types, where no `PartialEq<E>` impl exists, are
/// rejected at compile time instead of being reported as a failure:
///
/// ```compile_fail
/// let mut t = verdict::Recorder::new();
/// verdict::deep_equal(&mut t, 1u8, "one");
/// ```
#[track_caller]
pub fn deep_equal<R, T, E>(t: &mut R, got: T, expected: E)
where
    R: Reporter + ?Sized,
    T: PartialEq<E> + Debug,
    E: Debug,
{
    if got != expected {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:#?}, got {:#?}", expected, got));
    }
}

/// Negation of [`deep_equal`].
#[track_caller]
pub fn not_deep_equal<R, T, E>(t: &mut R, got: T, expected: E)
where
    R: Reporter + ?Sized,
    T: PartialEq<E> + Debug,
    E: Debug,
{
    if got == expected {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:#?} to not equal {:#?}", got, expected));
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Types the ordering assertions accept: primitive numbers, `char`, and text.
///
/// Implement it for a newtype over one of these to make it usable too.
pub trait Ordered: PartialOrd + Debug {}

macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(impl Ordered for $ty {})*
    };
}

impl_ordered!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    char, str, String,
);

impl<T: Ordered + ?Sized> Ordered for &T {}

// Incomparable values (NaN) satisfy none of the relations.
fn relation<T: Ordered>(got: &T, expected: &T) -> Option<Ordering> {
    got.partial_cmp(expected)
}

/// Asserts `got > expected`.
#[track_caller]
pub fn greater_than<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: Ordered,
{
    if relation(&got, &expected) != Some(Ordering::Greater) {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:?} to be greater than {:?}", got, expected));
    }
}

/// Asserts `got >= expected`.
#[track_caller]
pub fn greater_than_or_equal<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: Ordered,
{
    if !matches!(relation(&got, &expected), Some(Ordering::Greater | Ordering::Equal)) {
        t.helper(Location::caller());
        t.error_fmt(format_args!(
            "expected {:?} to be greater than or equal to {:?}",
            got, expected
        ));
    }
}

/// Asserts `got < expected`.
#[track_caller]
pub fn less_than<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: Ordered,
{
    if relation(&got, &expected) != Some(Ordering::Less) {
        t.helper(Location::caller());
        t.error_fmt(format_args!("expected {:?} to be less than {:?}", got, expected));
    }
}

/// Asserts `got <= expected`.
#[track_caller]
pub fn less_than_or_equal<R, T>(t: &mut R, got: T, expected: T)
where
    R: Reporter + ?Sized,
    T: Ordered,
{
    if !matches!(relation(&got, &expected), Some(Ordering::Less | Ordering::Equal)) {
        t.helper(Location::caller());
        t.error_fmt(format_args!(
            "expected {:?} to be less than or equal to {:?}",
            got, expected
        ));
    }
}
