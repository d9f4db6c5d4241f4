//! List comparison: length short-circuit and per-index reports.

mod common;

use assertkit::{expect, require, Policy, Recorder};
use common::{verify, FAMILIES};

struct Case {
    name: &'static str,
    got: Vec<i32>,
    want: Vec<i32>,
    want_message: &'static str,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "equal",
            got: vec![1, 2, 3],
            want: vec![1, 2, 3],
            want_message: "",
        },
        Case {
            name: "different length",
            got: vec![1, 2, 3],
            want: vec![1, 2],
            want_message: "ERROR: length: got: 3, want: 2",
        },
        Case {
            name: "different value",
            got: vec![1, 2, 3],
            want: vec![1, 3, 3],
            want_message: r#"ERROR: [1]: got: "2", want: "3""#,
        },
        Case {
            name: "different values",
            got: vec![1, 2, 3],
            want: vec![1, 3, 2],
            want_message: concat!(
                r#"ERROR: [1]: got: "2", want: "3"/"#,
                r#"ERROR: [2]: got: "3", want: "2""#
            ),
        },
        Case {
            name: "empty got list",
            got: vec![],
            want: vec![1, 2, 3],
            want_message: "ERROR: length: got: 0, want: 3",
        },
        Case {
            name: "empty want list",
            got: vec![1, 2, 3],
            want: vec![],
            want_message: "ERROR: length: got: 3, want: 0",
        },
        Case {
            name: "both empty",
            got: vec![],
            want: vec![],
            want_message: "",
        },
    ]
}

#[test]
fn test_equal_list() {
    for c in cases() {
        for policy in FAMILIES {
            let mut t = Recorder::new();
            match policy {
                Policy::Continue => expect::equal_list(&mut t, &c.got, &c.want),
                Policy::Abort => require::equal_list(&mut t, &c.got, &c.want),
            }
            verify(c.name, &t, policy, c.want_message);
        }
    }
}

#[test]
fn test_length_mismatch_suppresses_element_reports() {
    let mut t = Recorder::new();
    expect::equal_list(&mut t, &[9, 9, 9, 9], &[1, 2, 3]);
    t.expect_transcript(&["ERROR: length: got: 4, want: 3"])
        .unwrap();
}

#[test]
fn test_reports_follow_ascending_index_order() {
    let got: Vec<i32> = (0..10).collect();
    let want: Vec<i32> = (0..10).map(|i| if i % 3 == 0 { -i - 1 } else { i }).collect();

    let mut t = Recorder::new();
    expect::equal_list(&mut t, &got, &want);
    t.expect_transcript(&[
        r#"ERROR: [0]: got: "0", want: "-1""#,
        r#"ERROR: [3]: got: "3", want: "-4""#,
        r#"ERROR: [6]: got: "6", want: "-7""#,
        r#"ERROR: [9]: got: "9", want: "-10""#,
    ])
    .unwrap();
}

#[test]
fn test_string_elements_use_display() {
    let got = vec!["alpha".to_string(), "beta".to_string()];
    let want = vec!["alpha".to_string(), "gamma".to_string()];

    let mut t = Recorder::new();
    expect::equal_list(&mut t, &got, &want);
    assert_eq!(
        t.messages(),
        vec![r#"ERROR: [1]: got: "beta", want: "gamma""#]
    );
}

#[test]
fn test_inputs_are_left_untouched() {
    let got = vec![3, 1, 2];
    let want = vec![1, 2, 3];
    let mut t = Recorder::new();
    expect::equal_list(&mut t, &got, &want);
    assert_eq!(got, vec![3, 1, 2]);
    assert_eq!(want, vec![1, 2, 3]);
    assert_eq!(t.messages().len(), 3);
}
