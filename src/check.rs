//! # Comparison Engine
//!
//! One implementation of every check, parameterized over [`Policy`]. The public
//! [`expect`](crate::expect) and [`require`](crate::require) families are thin
//! wrappers that fix the policy.
//!
//! Every check announces itself through [`Reporter::helper`] before comparing, and
//! all functions here are `#[track_caller]` so the location handed to the reporter is
//! the test line, not this module.

use std::fmt::Display;
use std::panic::Location;

use crate::message::Mismatch;
use crate::reporter::{Policy, Reporter};

pub mod mapping;
pub mod outcome;

pub use mapping::Mapping;
pub use outcome::MaybeError;

#[track_caller]
fn emit<R: Reporter + ?Sized>(reporter: &mut R, policy: Policy, mismatch: Mismatch<'_>) {
    reporter.report(policy, Location::caller(), format_args!("{}", mismatch));
}

#[track_caller]
pub(crate) fn equal<R, T>(reporter: &mut R, policy: Policy, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    reporter.helper(Location::caller());
    if got != want {
        emit(reporter, policy, Mismatch::GotWant { got: &got, want: &want });
    }
}

#[track_caller]
pub(crate) fn not_equal<R, T>(reporter: &mut R, policy: Policy, got: &T, want: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Display + ?Sized,
{
    reporter.helper(Location::caller());
    if got == want {
        emit(reporter, policy, Mismatch::WantUnequal { got: &got });
    }
}

/// Element-wise comparison. A length mismatch is reported once and stops the check.
#[track_caller]
pub(crate) fn equal_list<R, T>(reporter: &mut R, policy: Policy, got: &[T], want: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Display,
{
    reporter.helper(Location::caller());
    if got.len() != want.len() {
        emit(
            reporter,
            policy,
            Mismatch::Length {
                got: got.len(),
                want: want.len(),
            },
        );
        return;
    }

    for (index, (g, w)) in got.iter().zip(want).enumerate() {
        if g != w {
            emit(
                reporter,
                policy,
                Mismatch::Entry {
                    at: &index,
                    got: g,
                    want: w,
                },
            );
        }
    }
}

/// Walks the keys of `want`. A missing key is reported without comparing values.
#[track_caller]
pub(crate) fn equal_map<R, M>(reporter: &mut R, policy: Policy, got: &M, want: &M)
where
    R: Reporter + ?Sized,
    M: Mapping + ?Sized,
    M::Key: Display,
    M::Value: PartialEq + Display,
{
    reporter.helper(Location::caller());
    if got.len() != want.len() {
        emit(
            reporter,
            policy,
            Mismatch::Length {
                got: got.len(),
                want: want.len(),
            },
        );
        return;
    }

    for (key, w) in want.entries() {
        let Some(g) = got.lookup(key) else {
            emit(reporter, policy, Mismatch::KeyMissing { key });
            continue;
        };
        if g != w {
            emit(
                reporter,
                policy,
                Mismatch::Entry {
                    at: key,
                    got: g,
                    want: w,
                },
            );
        }
    }
}

#[track_caller]
pub(crate) fn error<R, E>(reporter: &mut R, policy: Policy, err: &E, want_error: bool)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    reporter.helper(Location::caller());
    if want_error {
        is_error(reporter, policy, err);
        return;
    }
    no_error(reporter, policy, err);
}

#[track_caller]
pub(crate) fn is_error<R, E>(reporter: &mut R, policy: Policy, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    reporter.helper(Location::caller());
    if err.error().is_none() {
        emit(reporter, policy, Mismatch::ErrorNotDetected);
    }
}

#[track_caller]
pub(crate) fn no_error<R, E>(reporter: &mut R, policy: Policy, err: &E)
where
    R: Reporter + ?Sized,
    E: MaybeError + ?Sized,
{
    reporter.helper(Location::caller());
    if let Some(error) = err.error() {
        emit(reporter, policy, Mismatch::UnexpectedError { error });
    }
}

/// Checks `got` against a literal boolean.
#[track_caller]
pub(crate) fn boolean<R>(reporter: &mut R, policy: Policy, got: bool, want: bool)
where
    R: Reporter + ?Sized,
{
    reporter.helper(Location::caller());
    if got != want {
        emit(reporter, policy, Mismatch::GotWant { got: &got, want: &want });
    }
}
