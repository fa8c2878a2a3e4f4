#![cfg(all(feature = "control", feature = "effect"))]
//! Integration tests for monadic.
//!
//! These tests go through the prelude and mix the containers the way a
//! caller would.

use monadic::prelude::*;
use rstest::rstest;

fn half(value: i32) -> Maybe<i32> {
    if value % 2 == 0 {
        Maybe::Just(value / 2)
    } else {
        Maybe::Nothing
    }
}

#[rstest]
fn prelude_exposes_every_container() {
    let maybe = Maybe::Just(2).fmap(|i| i + 3);
    let attempt: Try<i32, String> = Try::Success(2).fmap(|i| i + 3);
    let reader: Reader<i32, i32> = Reader::ask().fmap(|i| i + 3);

    assert_eq!(maybe, Maybe::Just(5));
    assert_eq!(attempt, Try::Success(5));
    assert_eq!(reader.run(2), 5);
}

#[rstest]
fn list_applicative_through_prelude() {
    let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
    assert_eq!(functions.apply(vec![1, 2, 3]), vec![4, 5, 6, 2, 4, 6]);
}

#[rstest]
#[case(3, Maybe::Nothing)]
#[case(4, Maybe::Just(2))]
fn maybe_to_try_conversion(#[case] input: i32, #[case] expected: Maybe<i32>) {
    let attempt: Try<i32, String> = half(input)
        .into_option()
        .ok_or_else(|| format!("{input} is odd"))
        .into();

    assert_eq!(Maybe::from(attempt.success()), expected);
}

#[rstest]
fn reader_producing_maybe() {
    let lookup = Reader::asks(|limit: i32| Maybe::Just(limit).flat_map(half));
    assert_eq!(lookup.run(8), Maybe::Just(4));
    assert_eq!(lookup.run(7), Maybe::Nothing);
}

#[rstest]
fn reader_producing_try() {
    let parse = Reader::asks(|raw: &'static str| Try::new(|| raw.parse::<i32>()));
    assert_eq!(parse.run("42"), Try::Success(42));
    assert!(parse.run("forty-two").is_failure());
}

#[rstest]
#[case(20, Maybe::Nothing)]
#[case(16, Maybe::Just(2))]
#[case(8, Maybe::Just(1))]
fn halving_three_times(#[case] start: i32, #[case] expected: Maybe<i32>) {
    let result = Maybe::Just(start).flat_map(half).flat_map(half).flat_map(half);
    assert_eq!(result, expected);
}
