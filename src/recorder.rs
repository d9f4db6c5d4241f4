//! # Recording Reporter
//!
//! [`Recorder`] captures every report instead of acting on it. It is the spy used to
//! test assertion helpers, and the source of golden transcripts.
//!
//! Abort-style reports are recorded like any other; a recorder never unwinds.

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

use crate::errors::TranscriptMismatch;
use crate::reporter::{CallSite, Policy, Reporter};

/// One captured report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub policy: Policy,
    pub message: String,
    /// Line that reported: the assertion call, or a direct `error`/`fail` call.
    pub site: Option<CallSite>,
}

#[derive(Debug, Default, Clone)]
pub struct Recorder {
    records: Vec<Record>,
    site: Option<CallSite>,
    helper_calls: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All messages in report order, regardless of policy.
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Continue-style messages, from [`Reporter::error`] or an `expect` check.
    pub fn errors(&self) -> Vec<&str> {
        self.messages_for(Policy::Continue)
    }

    /// Abort-style messages, from [`Reporter::fail`] or a `require` check.
    pub fn failures(&self) -> Vec<&str> {
        self.messages_for(Policy::Abort)
    }

    pub fn error_called(&self) -> bool {
        self.records.iter().any(|r| r.policy == Policy::Continue)
    }

    pub fn fail_called(&self) -> bool {
        self.records.iter().any(|r| r.policy == Policy::Abort)
    }

    /// Messages of one policy joined with `/`, the shape golden strings are kept in.
    pub fn joined(&self, policy: Policy) -> String {
        self.messages_for(policy).join("/")
    }

    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of times an assertion announced itself through [`Reporter::helper`].
    pub fn helper_calls(&self) -> usize {
        self.helper_calls
    }

    pub fn last_site(&self) -> Option<&CallSite> {
        self.site.as_ref()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.site = None;
        self.helper_calls = 0;
    }

    /// Checks the recorded messages, in order, against `expected`.
    pub fn expect_transcript(&self, expected: &[&str]) -> Result<(), TranscriptMismatch> {
        let actual = self.messages();
        if actual == expected {
            return Ok(());
        }
        Err(TranscriptMismatch::new(
            expected.iter().map(|s| s.to_string()).collect(),
            actual.iter().map(|s| s.to_string()).collect(),
        ))
    }

    /// Like [`expect_transcript`](Self::expect_transcript) but ignores order, for
    /// comparisons over maps whose iteration order is unspecified.
    pub fn expect_transcript_unordered(
        &self,
        expected: &[&str],
    ) -> Result<(), TranscriptMismatch> {
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        let mut actual: Vec<String> = self.messages().iter().map(|s| s.to_string()).collect();
        expected.sort();
        actual.sort();
        if actual == expected {
            return Ok(());
        }
        Err(TranscriptMismatch::new(expected, actual))
    }

    /// Serializes the records as pretty JSON for golden files.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    fn messages_for(&self, policy: Policy) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.policy == policy)
            .map(|r| r.message.as_str())
            .collect()
    }

    fn push(&mut self, policy: Policy, site: &Location<'_>, message: fmt::Arguments<'_>) {
        self.records.push(Record {
            policy,
            message: message.to_string(),
            site: Some(CallSite::from(site)),
        });
    }
}

impl Reporter for Recorder {
    fn helper(&mut self, caller: &'static Location<'static>) {
        self.helper_calls += 1;
        self.site = Some(CallSite::from(caller));
    }

    #[track_caller]
    fn error(&mut self, message: fmt::Arguments<'_>) {
        self.push(Policy::Continue, Location::caller(), message);
    }

    #[track_caller]
    fn fail(&mut self, message: fmt::Arguments<'_>) {
        self.push(Policy::Abort, Location::caller(), message);
    }

    fn report(
        &mut self,
        policy: Policy,
        caller: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) {
        self.push(policy, caller, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect;

    #[test]
    fn test_joined_keeps_policies_apart() {
        let mut t = Recorder::new();
        t.error(format_args!("one"));
        t.fail(format_args!("two"));
        t.error(format_args!("three"));
        assert_eq!(t.joined(Policy::Continue), "one/three");
        assert_eq!(t.joined(Policy::Abort), "two");
        assert!(t.error_called() && t.fail_called());
    }

    #[test]
    fn test_site_points_at_caller() {
        let mut t = Recorder::new();
        expect::equal(&mut t, &1, &2);
        let site = t.records()[0].site.as_ref().unwrap();
        assert!(site.file.ends_with("recorder.rs"));
        assert_eq!(t.last_site(), Some(site));
    }

    #[track_caller]
    fn report_custom<R: Reporter>(t: &mut R) {
        t.error(format_args!("ERROR: custom"));
    }

    #[test]
    fn test_direct_report_is_stamped_with_its_own_line() {
        let mut t = Recorder::new();
        let (checked_at, _) = (line!(), expect::equal(&mut t, &1, &1));
        let (reported_at, _) = (line!(), report_custom(&mut t));

        assert_eq!(t.last_site().map(|s| s.line), Some(checked_at));
        let site = t.records()[0].site.as_ref().unwrap();
        assert_eq!(site.line, reported_at);
        assert_ne!(site.line, checked_at);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut t = Recorder::new();
        expect::is_true(&mut t, false);
        t.clear();
        assert!(t.is_clean());
        assert_eq!(t.helper_calls(), 0);
        assert!(t.last_site().is_none());
    }

    #[test]
    fn test_json_names_policy_in_lowercase() {
        let mut t = Recorder::new();
        t.fail(format_args!("ERROR: error not detected"));
        let json = t.to_json().unwrap();
        assert!(json.contains(r#""policy": "abort""#));
        assert!(json.contains(r#""message": "ERROR: error not detected""#));
        let back: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t.records());
    }
}
