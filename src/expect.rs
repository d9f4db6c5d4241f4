//! Continue-style assertions.
//!
//! A failed check is reported with [`Policy::Continue`] and the test keeps running,
//! so a table test can surface every failing row at once. For preconditions that make
//! the rest of the test meaningless, use [`require`](crate::require).
//!
//! ```
//! use assertkit::{expect, Recorder};
//!
//! let mut t = Recorder::new();
//! expect::equal(&mut t, &"a", &"b");
//! assert_eq!(t.messages(), vec![r#"ERROR: got: "a", want: "b""#]);
//! ```
//!
//! ## Display bound
//!
//! Compared values, list elements, map keys and values are printed with `Display`, so
//! they must implement it as well as `PartialEq`. Types that only derive `Debug`, such
//! as plain enums, `Option<T>` or tuples, are rejected at compile time:
//!
//! ```compile_fail
//! use assertkit::{expect, Recorder};
//!
//! #[derive(PartialEq, Debug)]
//! enum Color { Red, Blue }
//!
//! let mut t = Recorder::new();
//! expect::equal(&mut t, &Color::Red, &Color::Blue);
//! ```
//!
//! Compare a displayable projection instead, e.g. `&format!("{:?}", got)`, or implement
//! `Display` for the type.

use std::fmt::Display;

use crate::check::{self, Mapping, MaybeError};
use crate::reporter::{Policy, Reporter};

/// Reports if `got != want`.
#[track_caller]
pub fn equal<R, T>(reporter: &mut R, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    check::equal(reporter, Policy::Continue, got, want)
}

/// Reports if `got == want`.
#[track_caller]
pub fn not_equal<R, T>(reporter: &mut R, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    check::not_equal(reporter, Policy::Continue, got, want)
}

/// Compares two lists element by element.
///
/// If the lengths differ only the length is reported; otherwise every differing index
/// is reported in ascending order.
#[track_caller]
pub fn equal_list<R, T>(reporter: &mut R, got: &[T], want: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Display,
{
    check::equal_list(reporter, Policy::Continue, got, want)
}

/// Compares two maps.
///
/// If the sizes differ only the size is reported. Otherwise each key of `want` that is
/// missing from `got`, or maps to a different value, is reported. Report order follows
/// the iteration order of `want`.
#[track_caller]
pub fn equal_map<R, M>(reporter: &mut R, got: &M, want: &M)
where
    R: Reporter + ?Sized,
    M: Mapping + ?Sized,
    M::Key: Display,
    M::Value: PartialEq + Display,
{
    check::equal_map(reporter, Policy::Continue, got, want)
}

/// Reports if an error was wanted and not received, or received and not wanted.
#[track_caller]
pub fn error<R, E>(reporter: &mut R, err: &E, want_error: bool)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::error(reporter, Policy::Continue, err, want_error)
}

/// Reports if `err` holds no error. In table tests prefer [`error`].
#[track_caller]
pub fn is_error<R, E>(reporter: &mut R, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::is_error(reporter, Policy::Continue, err)
}

/// Reports if `err` holds an error. In table tests prefer [`error`].
#[track_caller]
pub fn no_error<R, E>(reporter: &mut R, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::no_error(reporter, Policy::Continue, err)
}

/// Reports if `got` is false.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(reporter: &mut R, got: bool) {
    check::boolean(reporter, Policy::Continue, got, true)
}

/// Reports if `got` is true.
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(reporter: &mut R, got: bool) {
    check::boolean(reporter, Policy::Continue, got, false)
}
