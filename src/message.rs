//! Failure message texts.
//!
//! These strings are matched verbatim by existing golden outputs; change them only
//! together with every recorded transcript.

use std::fmt::{self, Display};

/// One detected discrepancy, rendered through `Display`.
#[derive(Clone, Copy)]
pub enum Mismatch<'a> {
    GotWant {
        got: &'a dyn Display,
        want: &'a dyn Display,
    },
    WantUnequal {
        got: &'a dyn Display,
    },
    Length {
        got: usize,
        want: usize,
    },
    /// A differing list index or map key.
    Entry {
        at: &'a dyn Display,
        got: &'a dyn Display,
        want: &'a dyn Display,
    },
    KeyMissing {
        key: &'a dyn Display,
    },
    ErrorNotDetected,
    UnexpectedError {
        error: &'a dyn Display,
    },
}

impl Display for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::GotWant { got, want } => {
                write!(f, "ERROR: got: \"{}\", want: \"{}\"", got, want)
            }
            Mismatch::WantUnequal { got } => {
                write!(f, "ERROR: got: \"{}\", want something unequal", got)
            }
            Mismatch::Length { got, want } => {
                write!(f, "ERROR: length: got: {}, want: {}", got, want)
            }
            Mismatch::Entry { at, got, want } => {
                write!(f, "ERROR: [{}]: got: \"{}\", want: \"{}\"", at, got, want)
            }
            Mismatch::KeyMissing { key } => write!(f, "ERROR: key missing: \"{}\"", key),
            Mismatch::ErrorNotDetected => write!(f, "ERROR: error not detected"),
            Mismatch::UnexpectedError { error } => {
                write!(f, "ERROR: unexpected error: \"{}\"", error)
            }
        }
    }
}

impl fmt::Debug for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mismatch({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_messages() {
        let got_want = Mismatch::GotWant {
            got: &"a",
            want: &"b",
        };
        assert_eq!(got_want.to_string(), r#"ERROR: got: "a", want: "b""#);

        let unequal = Mismatch::WantUnequal { got: &42 };
        assert_eq!(unequal.to_string(), r#"ERROR: got: "42", want something unequal"#);
    }

    #[test]
    fn test_collection_messages() {
        let length = Mismatch::Length { got: 3, want: 0 };
        assert_eq!(length.to_string(), "ERROR: length: got: 3, want: 0");

        let entry = Mismatch::Entry {
            at: &1,
            got: &"one",
            want: &"ONE",
        };
        assert_eq!(entry.to_string(), r#"ERROR: [1]: got: "one", want: "ONE""#);

        let missing = Mismatch::KeyMissing { key: &4 };
        assert_eq!(missing.to_string(), r#"ERROR: key missing: "4""#);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Mismatch::ErrorNotDetected.to_string(),
            "ERROR: error not detected"
        );
        let unexpected = Mismatch::UnexpectedError {
            error: &"errormessage",
        };
        assert_eq!(
            unexpected.to_string(),
            r#"ERROR: unexpected error: "errormessage""#
        );
    }
}
