//! # Reporting Capability
//!
//! The [`Reporter`] trait is the seam between the comparison functions and whatever
//! owns the test: libtest through [`Harness`](crate::Harness), a spy through
//! [`Recorder`](crate::Recorder), or a caller-defined sink.
//!
//! A reporter exposes both termination policies. The comparison engine picks one per
//! call through [`Policy`], so the `expect` and `require` families share one
//! implementation.

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// How a failed comparison is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Record the failure and keep the test running.
    Continue,
    /// Record the failure and stop the test.
    Abort,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Continue => write!(f, "error"),
            Policy::Abort => write!(f, "fatal"),
        }
    }
}

/// Source location of the test line that invoked an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Sink for assertion outcomes.
///
/// Every assertion calls [`helper`](Reporter::helper) with the caller's location before
/// comparing anything, then reports mismatches through [`report`](Reporter::report)
/// with that same location. Code outside the assertions may call
/// [`error`](Reporter::error) and [`fail`](Reporter::fail) directly; implementations
/// marked `#[track_caller]` then see the line of that call.
pub trait Reporter {
    /// Marks the current assertion as a pass-through frame. `caller` is the test line
    /// that invoked it, collected with `#[track_caller]`.
    fn helper(&mut self, caller: &'static Location<'static>) {
        let _ = caller;
    }

    /// Records a failure; the test keeps running.
    #[track_caller]
    fn error(&mut self, message: fmt::Arguments<'_>);

    /// Records a failure and stops the test.
    #[track_caller]
    fn fail(&mut self, message: fmt::Arguments<'_>);

    /// Reports a mismatch found by an assertion invoked at `caller`, through the
    /// operation selected by `policy`. The default ignores `caller`.
    fn report(
        &mut self,
        policy: Policy,
        caller: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) {
        let _ = caller;
        match policy {
            Policy::Continue => self.error(message),
            Policy::Abort => self.fail(message),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn helper(&mut self, caller: &'static Location<'static>) {
        (**self).helper(caller)
    }

    #[track_caller]
    fn error(&mut self, message: fmt::Arguments<'_>) {
        (**self).error(message)
    }

    #[track_caller]
    fn fail(&mut self, message: fmt::Arguments<'_>) {
        (**self).fail(message)
    }

    fn report(
        &mut self,
        policy: Policy,
        caller: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) {
        (**self).report(policy, caller, message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn helper(&mut self, caller: &'static Location<'static>) {
        (**self).helper(caller)
    }

    #[track_caller]
    fn error(&mut self, message: fmt::Arguments<'_>) {
        (**self).error(message)
    }

    #[track_caller]
    fn fail(&mut self, message: fmt::Arguments<'_>) {
        (**self).fail(message)
    }

    fn report(
        &mut self,
        policy: Policy,
        caller: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) {
        (**self).report(policy, caller, message)
    }
}
