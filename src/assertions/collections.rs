//! Containment assertions over slices and maps.
//!
//! The multi-value checks never short-circuit: each missing value gets its own
//! report, in the order the values were given.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::panic::Location;

use crate::reporter::Reporter;

/// Key lookup shared by the map assertions.
///
/// `Q` is the borrowed key form, so a `HashMap<String, _>` can be queried with `&str`.
pub trait Map<Q: ?Sized, V> {
    fn lookup(&self, key: &Q) -> Option<&V>;
}

impl<K, Q, V, S> Map<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, Q, V> Map<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// Asserts that every one of `values` occurs somewhere in `slice`.
#[track_caller]
pub fn slice_contains<R, T>(t: &mut R, slice: &[T], values: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    for value in values {
        if !slice.contains(value) {
            t.helper(Location::caller());
            t.error_fmt(format_args!("slice does not contain value {:?}", value));
        }
    }
}

/// Asserts that `map` holds `key` and that its value equals `value`.
///
/// A missing key and a mismatched value are worded differently; either way a
/// failing call registers exactly one report.
#[track_caller]
pub fn map_contains<R, M, Q, V>(t: &mut R, map: &M, key: &Q, value: V)
where
    R: Reporter + ?Sized,
    M: Map<Q, V> + ?Sized,
    Q: Debug + ?Sized,
    V: PartialEq + Debug,
{
    match map.lookup(key) {
        None => {
            t.helper(Location::caller());
            t.error_fmt(format_args!(
                "map does not contain key-value pair {:?}: {:?}",
                key, value
            ));
        }
        Some(found) if *found != value => {
            t.helper(Location::caller());
            t.error_fmt(format_args!(
                "map contains key {:?} but not value {:?} (found {:?})",
                key, value, found
            ));
        }
        Some(_) => {}
    }
}

/// Asserts that every one of `keys` is present in `map`.
///
/// ```
/// use std::collections::HashMap;
/// use verdict::Recorder;
///
/// let m = HashMap::from([("foo".to_string(), 1), ("bar".to_string(), 2)]);
/// let mut t = Recorder::new();
/// verdict::map_contains_key(&mut t, &m, ["bar", "baz", "blah"]);
/// assert_eq!(t.errors().count(), 2);
/// ```
#[track_caller]
pub fn map_contains_key<'k, R, M, Q, V, I>(t: &mut R, map: &M, keys: I)
where
    R: Reporter + ?Sized,
    M: Map<Q, V> + ?Sized,
    Q: Debug + ?Sized + 'k,
    I: IntoIterator<Item = &'k Q>,
{
    for key in keys {
        if map.lookup(key).is_none() {
            t.helper(Location::caller());
            t.error_fmt(format_args!("map does not contain key {:?}", key));
        }
    }
}
