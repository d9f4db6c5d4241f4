//! Assertkit Error Types
//!
//! Comparison functions never return errors; mismatches flow through the
//! [`Reporter`](crate::Reporter). The types here are what the shipped reporters hand
//! back once a test is done, so they carry full `miette` diagnostics and can be `?`-ed
//! out of a test returning `miette::Result<()>`.

use miette::Diagnostic;
use thiserror::Error;

use crate::recorder::Record;
use crate::render;

/// Failures collected by a [`Harness`](crate::Harness).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("{} assertion failure(s)\n{}", .failures.len(), render::listing(.failures))]
#[diagnostic(
    code(assertkit::assertion),
    help("each line names the assertion call site followed by the reported mismatch")
)]
pub struct AssertionFailures {
    pub failures: Vec<Record>,
}

impl AssertionFailures {
    pub fn new(failures: Vec<Record>) -> Self {
        Self { failures }
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recorded messages did not match an expected transcript.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("recorded reports differ from the expected transcript\n{diff}")]
#[diagnostic(
    code(assertkit::transcript),
    help("lines prefixed with '-' were expected, lines prefixed with '+' were recorded")
)]
pub struct TranscriptMismatch {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub diff: String,
}

impl TranscriptMismatch {
    pub fn new(expected: Vec<String>, actual: Vec<String>) -> Self {
        let diff = render::diff_lines(&expected.join("\n"), &actual.join("\n"));
        Self {
            expected,
            actual,
            diff,
        }
    }
}
