use std::{collections::HashSet, fmt, io};

use calculon::{
    ErrorKind, calculate,
    report::{Report, STATUS_OK, STATUS_UNKNOWN, UNKNOWN_ERROR_MESSAGE},
};
use pretty_assertions::assert_eq;

#[test]
fn every_kind_has_a_distinct_message() {
    let messages: HashSet<&str> = ErrorKind::ALL.iter().map(|kind| kind.message()).collect();
    assert_eq!(messages.len(), ErrorKind::ALL.len());
    assert!(!messages.contains(UNKNOWN_ERROR_MESSAGE));
}

#[test]
fn message_table() {
    assert_eq!(ErrorKind::InvalidExpression.message(), "Invalid expression");
    assert_eq!(ErrorKind::DivisionByZero.message(), "Division by zero");
    assert_eq!(ErrorKind::MismatchedParentheses.message(), "Mismatched parentheses");
    assert_eq!(ErrorKind::InvalidCharacter.message(), "Invalid character in expression");
    assert_eq!(ErrorKind::InvalidNumber.message(), "Invalid number format");
}

#[test]
fn every_kind_is_a_client_error() {
    for kind in ErrorKind::ALL {
        assert_eq!(kind.status_code(), 422, "kind {kind:?}");
    }
}

#[test]
fn success_encodes_only_the_result() {
    let report = Report::from_outcome(calculate("3 + 5"));
    assert_eq!(report.status, STATUS_OK);
    assert!(report.is_success());
    assert_eq!(report.to_json().unwrap(), r#"{"result":8.0}"#);
}

#[test]
fn zero_result_is_still_encoded() {
    let report = Report::from_outcome(calculate("2 - 2"));
    assert_eq!(report.to_json().unwrap(), r#"{"result":0.0}"#);
}

#[test]
fn failures_encode_only_the_message() {
    let cases = [("2 + +", r#"{"error":"Invalid expression"}"#),
                 ("10 / 0", r#"{"error":"Division by zero"}"#),
                 ("(2 + 3", r#"{"error":"Mismatched parentheses"}"#),
                 ("2 # 3", r#"{"error":"Invalid character in expression"}"#),
                 ("1.2.3", r#"{"error":"Invalid number format"}"#)];

    for (src, expected) in cases {
        let report = Report::from_outcome(calculate(src));
        assert_eq!(report.status, 422, "input {src:?}");
        assert!(!report.is_success());
        assert_eq!(report.to_json().unwrap(), expected, "input {src:?}");
    }
}

#[derive(Debug)]
struct Unrelated;

impl fmt::Display for Unrelated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrelated failure")
    }
}

impl std::error::Error for Unrelated {}

#[test]
fn unknown_errors_are_reported_generically() {
    for report in [Report::from_error(&Unrelated),
                   Report::from_error(&io::Error::other("boom"))]
    {
        assert_eq!(report.status, STATUS_UNKNOWN);
        assert_eq!(report.to_json().unwrap(),
                   r#"{"error":"Unknown calculation error"}"#);
    }
}

#[test]
fn known_errors_behind_a_trait_object_keep_their_entry() {
    let boxed: Box<dyn std::error::Error> = Box::new(ErrorKind::MismatchedParentheses);
    let report = Report::from_error(boxed.as_ref());
    assert_eq!(report, Report::failure(ErrorKind::MismatchedParentheses));
}

#[test]
fn infinite_results_are_not_reported_as_success() {
    let big = format!("1{}", "0".repeat(308));
    let report = Report::from_outcome(calculate(&format!("{big} * {big}")));

    assert_eq!(report, Report::unknown());
    assert!(!report.is_success());
    assert_eq!(report.to_json().unwrap(),
               r#"{"error":"Unknown calculation error"}"#);
}
