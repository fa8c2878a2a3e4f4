#![cfg(feature = "control")]
//! Tests for `Maybe`: construction, conversion, and the type class instances.

use monadic::control::Maybe;
use monadic::typeclass::{Applicative, Functor, Monad};
use rstest::rstest;
use std::cell::Cell;

fn half(value: i32) -> Maybe<i32> {
    if value % 2 == 0 {
        Maybe::Just(value / 2)
    } else {
        Maybe::Nothing
    }
}

// =============================================================================
// Construction and Queries
// =============================================================================

#[rstest]
#[case(Some(3), Maybe::Just(3))]
#[case(None, Maybe::Nothing)]
fn maybe_from_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::from(option), expected);
    assert_eq!(Option::from(expected), option);
}

#[rstest]
fn maybe_default_is_nothing() {
    let value: Maybe<String> = Maybe::default();
    assert!(value.is_nothing());
}

#[rstest]
fn maybe_unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::Just(5).unwrap_or_else(fallback), 5);
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::Nothing.unwrap_or_else(fallback), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn maybe_as_ref_keeps_original() {
    let name = Maybe::Just("Thor".to_string());
    assert_eq!(name.as_ref().fmap(String::len), Maybe::Just(4));
    assert_eq!(name, Maybe::Just("Thor".to_string()));
}

// =============================================================================
// Functor
// =============================================================================

#[rstest]
fn maybe_fmap_just() {
    assert_eq!(Maybe::Just(2).fmap(|i| i + 3), Maybe::Just(5));
}

#[rstest]
fn maybe_fmap_nothing_skips_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::Nothing.fmap(|i| {
        calls.set(calls.get() + 1);
        i + 3
    });
    assert_eq!(result, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn maybe_fmap_changes_type() {
    assert_eq!(Maybe::Just(42).fmap(|i| i.to_string()), Maybe::Just("42".to_string()));
}

// =============================================================================
// Applicative
// =============================================================================

#[rstest]
fn maybe_ap_applies_wrapped_function() {
    let add_three: Maybe<fn(i32) -> i32> = Maybe::Just(|i| i + 3);
    assert_eq!(Maybe::Just(2).ap(add_three), Maybe::Just(5));
}

#[rstest]
#[case(Maybe::Nothing, Maybe::Just(2))]
#[case(Maybe::Just((|i: i32| i + 3) as fn(i32) -> i32), Maybe::Nothing)]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn maybe_apply_with_any_nothing_is_nothing(
    #[case] function: Maybe<fn(i32) -> i32>,
    #[case] value: Maybe<i32>,
) {
    assert_eq!(function.apply(value), Maybe::Nothing);
}

#[rstest]
fn maybe_map2_combines_values() {
    assert_eq!(Maybe::Just(2).map2(Maybe::Just(3), |a, b| a * b), Maybe::Just(6));
    assert_eq!(
        Maybe::Just(2).map2(Maybe::<i32>::Nothing, |a, b| a * b),
        Maybe::Nothing
    );
}

#[rstest]
fn maybe_map3_combines_values() {
    let sum = Maybe::Just(1).map3(Maybe::Just(2), Maybe::Just(3), |a, b, c| a + b + c);
    assert_eq!(sum, Maybe::Just(6));
}

#[rstest]
fn maybe_product_left_and_right() {
    assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    assert_eq!(Maybe::Just(1).product_left(Maybe::Just("a")), Maybe::Just(1));
    assert_eq!(Maybe::Just(1).product_right(Maybe::Just("a")), Maybe::Just("a"));
}

// =============================================================================
// Monad
// =============================================================================

#[rstest]
#[case(Maybe::Just(3), Maybe::Nothing)]
#[case(Maybe::Just(4), Maybe::Just(2))]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn maybe_flat_map_half(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.flat_map(half), expected);
}

#[rstest]
fn maybe_halving_chain_stops_at_first_odd() {
    let calls = Cell::new(0);
    let counted_half = |value: i32| {
        calls.set(calls.get() + 1);
        half(value)
    };

    let result = Maybe::Just(20)
        .flat_map(counted_half)
        .flat_map(counted_half)
        .flat_map(counted_half);

    // 20 -> 10 -> 5 -> Nothing
    assert_eq!(result, Maybe::Nothing);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn maybe_nothing_never_invokes_continuation() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::Nothing.flat_map(|value| {
        calls.set(calls.get() + 1);
        half(value)
    });
    assert_eq!(result, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn maybe_then_discards_first_value() {
    assert_eq!(Maybe::Just(1).then(Maybe::Just("next")), Maybe::Just("next"));
    assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("next")), Maybe::Nothing);
}

#[rstest]
fn maybe_and_then_matches_flat_map() {
    assert_eq!(Maybe::Just(8).and_then(half), Maybe::Just(8).flat_map(half));
}
