//! Property-based tests for the outcome combinator algebra.
//!
//! These tests use proptest to verify the combinator laws hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use railway::{aggregate, Outcome};
use std::cell::Cell;

prop_compose! {
    fn arbitrary_outcome()(is_success in any::<bool>(), value in 0..1000i32, failure in "[a-z]{1,8}") -> Outcome<i32, String> {
        if is_success {
            Outcome::succeeded(value)
        } else {
            Outcome::failed(failure)
        }
    }
}

prop_compose! {
    fn arbitrary_check()(
        is_success in any::<bool>(),
        value in 0..1000i32,
        failures in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) -> Outcome<i32, Vec<String>> {
        if is_success {
            Outcome::succeeded(value)
        } else {
            Outcome::failed(failures)
        }
    }
}

proptest! {
    #[test]
    fn map_identity_is_value_equal(outcome in arbitrary_outcome()) {
        let mapped = outcome.clone().map(|v| v);
        prop_assert_eq!(mapped, outcome);
    }

    #[test]
    fn map_composes(outcome in arbitrary_outcome()) {
        let f = |n: i32| n.wrapping_add(3);
        let g = |n: i32| n.wrapping_mul(7);

        let two_steps = outcome.clone().map(f).map(g);
        let one_step = outcome.map(|v| g(f(v)));

        prop_assert_eq!(two_steps, one_step);
    }

    #[test]
    fn bind_never_invokes_f_on_failure(failure in "[a-z]{1,8}") {
        let outcome: Outcome<i32, String> = Outcome::failed(failure.clone());
        let calls = Cell::new(0);

        let bound = outcome.bind(|n| {
            calls.set(calls.get() + 1);
            Outcome::<i32, String>::succeeded(n)
        });

        prop_assert_eq!(bound, Outcome::failed(failure));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_is_associative(outcome in arbitrary_outcome()) {
        let f = |n: i32| -> Outcome<i32, String> {
            if n % 2 == 0 {
                Outcome::succeeded(n / 2)
            } else {
                Outcome::failed("odd".to_string())
            }
        };
        let g = |n: i32| -> Outcome<i32, String> {
            if n < 100 {
                Outcome::succeeded(n.wrapping_mul(3))
            } else {
                Outcome::failed("large".to_string())
            }
        };

        let left = outcome.clone().bind(f).bind(g);
        let right = outcome.bind(|v| f(v).bind(g));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn tee_returns_input_unchanged(outcome in arbitrary_outcome()) {
        let calls = Cell::new(0);

        let teed = outcome.clone().tee(|_| calls.set(calls.get() + 1));

        let expected_calls = if outcome.is_success() { 1 } else { 0 };
        prop_assert_eq!(teed, outcome);
        prop_assert_eq!(calls.get(), expected_calls);
    }

    #[test]
    fn either_invokes_exactly_one_callback(outcome in arbitrary_outcome()) {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);

        let passthrough = outcome.clone().either(
            |o| {
                success_calls.set(success_calls.get() + 1);
                o
            },
            |o| {
                failure_calls.set(failure_calls.get() + 1);
                o
            },
        );

        prop_assert_eq!(passthrough, outcome);
        prop_assert_eq!(success_calls.get() + failure_calls.get(), 1);
    }

    #[test]
    fn handle_invokes_exactly_one_callback(outcome in arbitrary_outcome()) {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);

        outcome.handle(
            |_| success_calls.set(success_calls.get() + 1),
            |_| failure_calls.set(failure_calls.get() + 1),
        );

        prop_assert_eq!(success_calls.get() + failure_calls.get(), 1);
    }

    #[test]
    fn aggregate_never_discards_a_failure(checks in prop::collection::vec(arbitrary_check(), 0..10)) {
        let expected_failures: usize = checks
            .iter()
            .map(|c| c.failure().map_or(0, |f| f.len()))
            .sum();

        match aggregate(checks) {
            Outcome::Success(_) => prop_assert_eq!(expected_failures, 0),
            Outcome::Failure(failures) => prop_assert_eq!(failures.len(), expected_failures),
        }
    }

    #[test]
    fn aggregate_preserves_input_order(checks in prop::collection::vec(arbitrary_check(), 0..10)) {
        let expected_successes: Vec<i32> = checks
            .iter()
            .filter_map(|c| c.success().copied())
            .collect();
        let expected_failures: Vec<String> = checks
            .iter()
            .flat_map(|c| c.failure().cloned().unwrap_or_default())
            .collect();
        let all_succeeded = expected_failures.is_empty();

        match aggregate(checks) {
            Outcome::Success(values) => {
                prop_assert!(all_succeeded);
                prop_assert_eq!(values, expected_successes);
            }
            Outcome::Failure(failures) => {
                prop_assert!(!all_succeeded);
                prop_assert_eq!(failures, expected_failures);
            }
        }
    }

    #[test]
    fn collect_equals_aggregate(checks in prop::collection::vec(arbitrary_check(), 0..10)) {
        let collected: Outcome<Vec<i32>, Vec<String>> = checks.clone().into_iter().collect();
        prop_assert_eq!(collected, aggregate(checks));
    }

    #[test]
    fn outcome_roundtrip_serialization(outcome in arbitrary_outcome()) {
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(outcome, deserialized);
    }
}
