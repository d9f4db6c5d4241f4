//! # libtest Harness
//!
//! [`Harness`] is the reporter for ordinary `#[test]` functions. Create one per test
//! and pass it to the `expect` and `require` families:
//!
//! ```should_panic
//! use assertkit::{expect, Harness};
//!
//! let mut t = Harness::new();
//! for (got, want) in [(1, 1), (2, 3)] {
//!     expect::equal(&mut t, &got, &want);
//! }
//! // dropping `t` panics with every recorded failure
//! ```
//!
//! - Continue-style failures are recorded, echoed to stderr and the test goes on.
//! - An abort-style failure panics immediately with everything recorded so far.
//! - Failures still held when the harness is dropped fail the test, unless
//!   [`Harness::finish`] handed them back as an [`AssertionFailures`] error first.

use std::fmt;
use std::mem;
use std::panic::Location;
use std::thread;

use crate::errors::AssertionFailures;
use crate::recorder::Record;
use crate::render;
use crate::reporter::{CallSite, Policy, Reporter};

pub mod config;

pub use config::HarnessConfig;

#[derive(Debug)]
pub struct Harness {
    config: HarnessConfig,
    failures: Vec<Record>,
}

impl Harness {
    /// A harness configured from the environment, see [`HarnessConfig::from_env`].
    pub fn new() -> Self {
        Self::with_config(HarnessConfig::from_env())
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        Self {
            config,
            failures: Vec::new(),
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Record] {
        &self.failures
    }

    /// Ends the test without panicking, returning any recorded failures.
    ///
    /// ```
    /// use assertkit::{expect, Harness};
    ///
    /// fn table() -> miette::Result<()> {
    ///     let mut t = Harness::new();
    ///     expect::equal_list(&mut t, &[1, 2], &[1, 2]);
    ///     t.finish()?;
    ///     Ok(())
    /// }
    /// table().unwrap();
    /// ```
    pub fn finish(mut self) -> Result<(), AssertionFailures> {
        let failures = mem::take(&mut self.failures);
        if failures.is_empty() {
            return Ok(());
        }
        Err(AssertionFailures::new(failures))
    }

    fn record(&mut self, policy: Policy, site: &Location<'_>, message: fmt::Arguments<'_>) {
        let record = Record {
            policy,
            message: message.to_string(),
            site: Some(CallSite::from(site)),
        };
        if self.config.echo {
            render::echo(&record, self.config.use_colors);
        }
        self.failures.push(record);
    }

    fn abort(&mut self) -> ! {
        let failures = AssertionFailures::new(mem::take(&mut self.failures));
        panic!("{}", failures);
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Harness {
    #[track_caller]
    fn error(&mut self, message: fmt::Arguments<'_>) {
        self.record(Policy::Continue, Location::caller(), message);
    }

    #[track_caller]
    fn fail(&mut self, message: fmt::Arguments<'_>) {
        self.record(Policy::Abort, Location::caller(), message);
        self.abort();
    }

    fn report(
        &mut self,
        policy: Policy,
        caller: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) {
        self.record(policy, caller, message);
        if policy == Policy::Abort {
            self.abort();
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        if self.failures.is_empty() || thread::panicking() {
            return;
        }
        self.abort();
    }
}
