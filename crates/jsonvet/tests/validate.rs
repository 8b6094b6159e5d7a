//! Public-API table tests.

use jsonvet::{ErrorKind, ValidatorOptions, validate, validate_with_options};
use rstest::rstest;

#[rstest]
#[case::empty_object("{}")]
#[case::empty_array("[]")]
#[case::object(r#"{"a":"b","c":false,"d":2}"#)]
#[case::array("[1,2,3]")]
#[case::nested(r#"{"a":{"b":[{"c":null}]}}"#)]
#[case::scalar_string("\"x\"")]
#[case::scalar_zero("0")]
#[case::scalar_negative("-3")]
#[case::scalar_exponent("1e10")]
#[case::scalar_true("true")]
#[case::scalar_false("false")]
#[case::scalar_null("null")]
#[case::padded(" \t\r\n [ 1 , 2 ] \t\r\n ")]
fn accepts(#[case] input: &str) {
    assert!(validate(input).is_ok(), "{input:?} rejected");
}

#[rstest]
#[case::key_without_colon(r#"{"a:b"}"#, ErrorKind::InvalidSyntax)]
#[case::member_without_value(r#"{"a":}"#, ErrorKind::InvalidSyntax)]
#[case::trailing_content("{} x", ErrorKind::InvalidSyntax)]
#[case::leading_zero("01", ErrorKind::InvalidSyntax)]
#[case::bare_sign("+1", ErrorKind::InvalidSyntax)]
#[case::open_string("\"abc", ErrorKind::UnexpectedEndOfInput)]
#[case::open_array("[1,2", ErrorKind::UnexpectedEndOfInput)]
#[case::open_object(r#"{"a":1"#, ErrorKind::UnexpectedEndOfInput)]
#[case::empty("", ErrorKind::UnexpectedEndOfInput)]
#[case::whitespace_only(" \t\r\n", ErrorKind::UnexpectedEndOfInput)]
#[case::unknown_escape(r#""\x""#, ErrorKind::InvalidEscape)]
#[case::non_hex_escape(r#""\u12G4""#, ErrorKind::InvalidEscape)]
fn rejects(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = validate(input).expect_err("input unexpectedly validated");
    assert_eq!(err.kind(), kind, "{input:?}");
}

#[test]
fn raw_bytes_are_accepted_as_input() {
    // The API takes byte sequences, not just strings.
    assert!(validate(b"[1,2,3]").is_ok());
    assert!(validate(vec![b'{', b'}']).is_ok());
    // Invalid UTF-8 outside strings is just invalid syntax, not a panic.
    assert!(validate(&[0xFF, 0xFE][..]).is_err());
}

#[test]
fn default_depth_limit() {
    let deep = "[".repeat(128) + &"]".repeat(128);
    assert!(validate(&deep).is_ok());

    let deeper = "[".repeat(129) + &"]".repeat(129);
    assert_eq!(
        validate(&deeper).unwrap_err().kind(),
        ErrorKind::NestingTooDeep
    );
}

#[test]
fn configured_depth_limit() {
    let options = ValidatorOptions { max_depth: 2 };
    assert!(validate_with_options("[[1]]", options).is_ok());
    assert_eq!(
        validate_with_options("[[[1]]]", options).unwrap_err().kind(),
        ErrorKind::NestingTooDeep
    );
}

#[test]
fn errors_render_useful_diagnostics() {
    let err = validate(r#"{"a": truth}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
    assert_eq!(err.offset(), 6);
    assert_eq!(err.message(), Some("expected the literal 'true'"));
    let text = err.to_string();
    assert!(text.contains("invalid JSON syntax"));
    assert!(text.contains("byte 6"));
    assert!(text.contains("truth"));
}

#[test]
fn error_implements_std_error() {
    let err = validate("[").unwrap_err();
    let dynamic: &dyn std::error::Error = &err;
    assert!(dynamic.source().is_some());
}
