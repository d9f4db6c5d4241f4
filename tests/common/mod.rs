//! # Shared Table-Test Helpers
//!
//! Every assertion exists in a continue-style and an abort-style flavor. These helpers
//! run a table row against a fresh [`Recorder`] and check that exactly the expected
//! messages came out, through exactly the expected policy.

#![allow(dead_code)]

use assertkit::{Policy, Recorder};

/// The policy each family is expected to report through.
pub const FAMILIES: [Policy; 2] = [Policy::Continue, Policy::Abort];

/// Checks that `t` reported `want` (messages joined with `/`) through `policy` only.
/// An empty `want` means nothing may have been reported.
pub fn verify(name: &str, t: &Recorder, policy: Policy, want: &str) {
    let other = match policy {
        Policy::Continue => Policy::Abort,
        Policy::Abort => Policy::Continue,
    };
    assert!(
        t.joined(other).is_empty(),
        "{name} ({policy}): reported through the wrong policy: {:?}",
        t.records()
    );

    if want.is_empty() {
        assert!(
            t.is_clean(),
            "{name} ({policy}): false alarm: {}",
            t.joined(policy)
        );
        return;
    }

    assert_eq!(t.joined(policy), want, "{name} ({policy})");
}

/// Asserts that every record of `t` was attributed to `file`.
pub fn assert_attributed_to(t: &Recorder, file: &str) {
    for record in t.records() {
        let site = record
            .site
            .as_ref()
            .unwrap_or_else(|| panic!("no call site for {:?}", record.message));
        assert!(
            site.file.ends_with(file),
            "report attributed to {site}, expected {file}"
        );
    }
}
