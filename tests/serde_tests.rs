#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support in monadic.
//!
//! `Maybe` and `Try` serialize with serde's default externally tagged enum
//! representation.

use monadic::control::{Maybe, Panicked, Try};
use rstest::rstest;

// =============================================================================
// Maybe Integration Tests
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<String> = Maybe::Just("Thor".to_string());
    let nothing: Maybe<String> = Maybe::Nothing;

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    let restored_just: Maybe<String> = serde_json::from_str(&just_json).unwrap();
    let restored_nothing: Maybe<String> = serde_json::from_str(&nothing_json).unwrap();

    assert_eq!(just, restored_just);
    assert_eq!(nothing, restored_nothing);
}

#[rstest]
#[case(Maybe::Just(5), r#"{"Just":5}"#)]
#[case(Maybe::Nothing, r#""Nothing""#)]
fn test_maybe_json_format(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

// =============================================================================
// Try Integration Tests
// =============================================================================

#[rstest]
fn test_try_json_roundtrip() {
    let success: Try<i32, String> = Try::Success(42);
    let failure: Try<i32, String> = Try::Failure("Bang".to_string());

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();

    assert_eq!(success_json, r#"{"Success":42}"#);
    assert_eq!(failure_json, r#"{"Failure":"Bang"}"#);

    let restored_success: Try<i32, String> = serde_json::from_str(&success_json).unwrap();
    let restored_failure: Try<i32, String> = serde_json::from_str(&failure_json).unwrap();

    assert_eq!(success, restored_success);
    assert_eq!(failure, restored_failure);
}

#[rstest]
fn test_panicked_json_roundtrip() {
    let caught: Try<i32, Panicked> = Try::catching(|| panic!("boom"));
    let json = serde_json::to_string(&caught).unwrap();
    assert_eq!(json, r#"{"Failure":{"message":"boom"}}"#);

    let restored: Try<i32, Panicked> = serde_json::from_str(&json).unwrap();
    assert_eq!(caught, restored);
}

#[rstest]
fn test_nested_containers_roundtrip() {
    let nested: Vec<Try<Maybe<i32>, String>> = vec![
        Try::Success(Maybe::Just(1)),
        Try::Success(Maybe::Nothing),
        Try::Failure("missing".to_string()),
    ];
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Vec<Try<Maybe<i32>, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}
