//! Abort-style assertions.
//!
//! Same checks and messages as [`expect`](crate::expect), reported with
//! [`Policy::Abort`]. With a [`Harness`](crate::Harness) the first failure ends the
//! test.

use std::fmt::Display;

use crate::check::{self, Mapping, MaybeError};
use crate::reporter::{Policy, Reporter};

#[track_caller]
pub fn equal<R, T>(reporter: &mut R, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    check::equal(reporter, Policy::Abort, got, want)
}

#[track_caller]
pub fn not_equal<R, T>(reporter: &mut R, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    check::not_equal(reporter, Policy::Abort, got, want)
}

#[track_caller]
pub fn equal_list<R, T>(reporter: &mut R, got: &[T], want: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Display,
{
    check::equal_list(reporter, Policy::Abort, got, want)
}

#[track_caller]
pub fn equal_map<R, M>(reporter: &mut R, got: &M, want: &M)
where
    R: Reporter + ?Sized,
    M: Mapping + ?Sized,
    M::Key: Display,
    M::Value: PartialEq + Display,
{
    check::equal_map(reporter, Policy::Abort, got, want)
}

#[track_caller]
pub fn error<R, E>(reporter: &mut R, err: &E, want_error: bool)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::error(reporter, Policy::Abort, err, want_error)
}

#[track_caller]
pub fn is_error<R, E>(reporter: &mut R, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::is_error(reporter, Policy::Abort, err)
}

#[track_caller]
pub fn no_error<R, E>(reporter: &mut R, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    check::no_error(reporter, Policy::Abort, err)
}

#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(reporter: &mut R, got: bool) {
    check::boolean(reporter, Policy::Abort, got, true)
}

#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(reporter: &mut R, got: bool) {
    check::boolean(reporter, Policy::Abort, got, false)
}
