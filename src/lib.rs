//! # Assertkit
//!
//! Comparison helpers for table-driven tests. Each check compares its inputs and, on a
//! mismatch, reports a fixed-format message through a caller-supplied [`Reporter`]
//! instead of panicking on the spot.
//!
//! - [`expect`]: continue-style; the test keeps running after a failure.
//! - [`require`]: abort-style; the failure stops the test.
//! - [`Harness`]: reporter for libtest `#[test]` functions.
//! - [`Recorder`]: reporter that captures every message, for testing helpers and
//!   keeping golden transcripts.
//!
//! ```
//! use std::collections::HashMap;
//! use assertkit::{expect, Recorder};
//!
//! let mut t = Recorder::new();
//! expect::equal_list(&mut t, &[1, 2, 3], &[1, 3, 2]);
//! expect::equal_map(&mut t, &HashMap::from([(1, "one"), (2, "two")]), &HashMap::from([(1, "one")]));
//! assert_eq!(
//!     t.messages(),
//!     vec![
//!         r#"ERROR: [1]: got: "2", want: "3""#,
//!         r#"ERROR: [2]: got: "3", want: "2""#,
//!         "ERROR: length: got: 2, want: 1",
//!     ]
//! );
//! ```

pub use crate::check::{Mapping, MaybeError};
pub use crate::errors::{AssertionFailures, TranscriptMismatch};
pub use crate::harness::{Harness, HarnessConfig};
pub use crate::recorder::{Record, Recorder};
pub use crate::reporter::{CallSite, Policy, Reporter};

pub mod check;
pub mod errors;
pub mod expect;
pub mod harness;
pub mod message;
pub mod recorder;
pub mod reporter;
pub mod require;

mod render;
