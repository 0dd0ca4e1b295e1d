//! Unit tests for `UnsafeOptional<T>`.
//!
//! `UnsafeOptional` is a plain two-state optional whose payload may itself be
//! a null-like value:
//! - `Some(T)`: present, even when `T` is `Option::None` or an empty string
//! - `None`: absent

#![cfg(feature = "control")]

use rstest::rstest;
use std::cell::Cell;
use tryopt::control::UnsafeOptional;
use tryopt::typeclass::{Foldable, Functor, Monad};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn null_payload_is_still_present() {
    let optional: UnsafeOptional<Option<i32>> = UnsafeOptional::some(None);
    assert!(optional.is_some());
    assert_eq!(optional.count(), 1);
}

#[rstest]
fn from_option_does_not_flatten() {
    let nested = UnsafeOptional::from_option(Some(None::<i32>));
    assert_eq!(nested, UnsafeOptional::Some(None));
    assert_eq!(UnsafeOptional::<i32>::from_option(None), UnsafeOptional::None);
}

#[rstest]
fn default_is_none() {
    assert!(UnsafeOptional::<String>::default().is_none());
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn map_can_produce_null_payload() {
    let mapped = UnsafeOptional::some("").map(|text| (!text.is_empty()).then_some(text));
    assert_eq!(mapped, UnsafeOptional::Some(None));
}

#[rstest]
fn bind_short_circuits_on_none() {
    let calls = Cell::new(0);
    let result = UnsafeOptional::<i32>::none().bind(|x| {
        calls.set(calls.get() + 1);
        UnsafeOptional::some(x)
    });
    assert_eq!(result, UnsafeOptional::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(UnsafeOptional::some(6), UnsafeOptional::some(6))]
#[case(UnsafeOptional::some(5), UnsafeOptional::none())]
#[case(UnsafeOptional::none(), UnsafeOptional::none())]
fn filter_keeps_accepted_payloads(
    #[case] input: UnsafeOptional<i32>,
    #[case] expected: UnsafeOptional<i32>,
) {
    assert_eq!(input.filter(|x| x % 2 == 0), expected);
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
#[case(UnsafeOptional::some(3), "some:3")]
#[case(UnsafeOptional::none(), "none")]
fn match_with_selects_branch(#[case] optional: UnsafeOptional<i32>, #[case] expected: &str) {
    let text = optional.match_with(|x| format!("some:{x}"), || "none".to_string());
    assert_eq!(text, expected);
}

#[rstest]
fn match_action_runs_one_side_effect() {
    let log = Cell::new("");
    UnsafeOptional::some(1).match_action(|_| log.set("some"), || log.set("none"));
    assert_eq!(log.get(), "some");
    UnsafeOptional::<i32>::none().match_action(|_| log.set("some"), || log.set("none"));
    assert_eq!(log.get(), "none");
}

#[rstest]
fn if_none_with_is_lazy() {
    assert_eq!(UnsafeOptional::some(2).if_none_with(|| panic!("not needed")), 2);
    assert_eq!(UnsafeOptional::none().if_none_with(|| 9), 9);
    assert_eq!(UnsafeOptional::none().if_none(4), 4);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn for_all_is_vacuously_true_on_none() {
    let absent = UnsafeOptional::<i32>::none();
    assert!(absent.for_all(|_| false));
    assert!(!absent.exists(|_| true));
}

#[rstest]
fn fold_returns_seed_on_none() {
    assert_eq!(UnsafeOptional::<i32>::none().fold(10, |s, x| s + x), 10);
    assert_eq!(UnsafeOptional::some(5).fold(10, |s, x| s + x), 15);
}

#[rstest]
fn iteration_yields_payload_once() {
    let optional = UnsafeOptional::some(String::from("value"));
    assert_eq!(optional.iter().count(), 1);
    let collected: Vec<String> = optional.into_iter().collect();
    assert_eq!(collected, vec!["value".to_string()]);
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[rstest]
fn functor_fmap_matches_map() {
    assert_eq!(UnsafeOptional::some(2).fmap(|x| x * 10), UnsafeOptional::some(20));
    assert_eq!(UnsafeOptional::some(2).fmap_ref(|x| x + 1), UnsafeOptional::some(3));
}

#[rstest]
fn monad_pure_and_flat_map() {
    let chained = <UnsafeOptional<i32> as Monad>::pure(4)
        .flat_map(|x| UnsafeOptional::some(x.to_string()));
    assert_eq!(chained, UnsafeOptional::some("4".to_string()));
}

#[rstest]
fn foldable_queries() {
    assert_eq!(UnsafeOptional::some(3).fold_left(1, |acc, x| acc * x), 3);
    assert_eq!(UnsafeOptional::some(3).length(), 1);
    assert!(UnsafeOptional::<i32>::none().is_empty());
    assert_eq!(UnsafeOptional::some(8).to_list(), vec![8]);
}
