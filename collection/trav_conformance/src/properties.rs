//! Property checks over generated fixtures.
//!
//! Each property draws a vector of small integers (so duplicates are common)
//! plus a pivot from the same range, builds the container under test with
//! `of_all`, and compares its answer against the slice reference. proptest
//! shrinks a failing input before it is reported, so the fixture in a
//! [`ConformanceFailure::Property`] is minimal.

use std::cell::Cell;
use std::rc::Rc;

use proptest::collection::vec;
use proptest::prop_assert_eq;
use proptest::strategy::Strategy;
use proptest::test_runner::{Config, TestCaseResult, TestError, TestRunner};
use trav_core::{SeqFactory, TraversableOnce};

use crate::{CheckResult, ConformanceFailure, HarnessConfig, Operation};

fn fixtures() -> impl Strategy<Value = (Vec<i32>, i32)> {
    (vec(0i32..8, 0..24), 0i32..8)
}

fn holds<F: SeqFactory>(
    config: &HarnessConfig,
    operation: Operation,
    property: impl Fn(&[i32], i32) -> TestCaseResult,
) -> CheckResult {
    let mut runner = TestRunner::new(Config {
        cases: config.property_cases,
        failure_persistence: None,
        ..Config::default()
    });
    let result = runner.run(&fixtures(), |(elements, pivot)| {
        property(&elements, pivot)
    });
    result.map_err(|error| {
        let (fixture, message) = match error {
            TestError::Fail(reason, (elements, pivot)) => {
                (format!("{elements:?} with pivot {pivot}"), reason.to_string())
            }
            TestError::Abort(reason) => ("<none>".to_string(), reason.to_string()),
        };
        tracing::debug!(container = F::NAME, %operation, %fixture, "property failed");
        ConformanceFailure::Property {
            operation,
            target: F::NAME,
            fixture,
            message,
        }
    })
}

pub fn exists_agrees_with_reference<F: SeqFactory>(config: &HarnessConfig) -> CheckResult {
    holds::<F>(config, Operation::Exists, |elements, pivot| {
        let seq = F::of_all(elements.to_vec());
        prop_assert_eq!(seq.exists(|&i| i == pivot), elements.contains(&pivot));
        Ok(())
    })
}

pub fn exists_unique_agrees_with_reference<F: SeqFactory>(config: &HarnessConfig) -> CheckResult {
    holds::<F>(config, Operation::ExistsUnique, |elements, pivot| {
        let seq = F::of_all(elements.to_vec());
        let matches = elements.iter().filter(|&&i| i == pivot).count();
        prop_assert_eq!(seq.exists_unique(|&i| i == pivot), matches == 1);
        Ok(())
    })
}

pub fn for_all_agrees_with_reference<F: SeqFactory>(config: &HarnessConfig) -> CheckResult {
    holds::<F>(config, Operation::ForAll, |elements, pivot| {
        let seq = F::of_all(elements.to_vec());
        prop_assert_eq!(
            seq.for_all(|&i| i <= pivot),
            elements.iter().all(|&i| i <= pivot)
        );
        Ok(())
    })
}

/// Peeking preserves content, runs the action once per element, and leaves
/// the published element as last observed.
pub fn peek_reports_published_element<F: SeqFactory>(config: &HarnessConfig) -> CheckResult {
    holds::<F>(config, Operation::Peek, |elements, _| {
        let calls = Rc::new(Cell::new(0_usize));
        let last = Rc::new(Cell::new(None));
        let (counter, sink) = (Rc::clone(&calls), Rc::clone(&last));
        let peeked = F::of_all(elements.to_vec()).peek(move |&i: &i32| {
            counter.set(counter.get() + 1);
            sink.set(Some(i));
        });
        prop_assert_eq!(peeked.iter().copied().collect::<Vec<_>>(), elements);
        prop_assert_eq!(calls.get(), elements.len());
        prop_assert_eq!(last.get(), F::peek_last_observed(elements));
        Ok(())
    })
}

/// `of_all` and a builder split at the pivot both keep input order.
pub fn construction_preserves_order<F: SeqFactory>(config: &HarnessConfig) -> CheckResult {
    holds::<F>(config, Operation::Construction, |elements, pivot| {
        let seq = F::of_all(elements.to_vec());
        prop_assert_eq!(seq.iter().copied().collect::<Vec<_>>(), elements);

        let split = usize::try_from(pivot).unwrap_or(0).min(elements.len());
        let (front, back) = elements.split_at(split);
        let mut left = F::builder();
        left.extend(front.iter().copied());
        let mut right = F::builder();
        right.extend(back.iter().copied());
        let built = left.combine(right).finish();
        prop_assert_eq!(built.iter().copied().collect::<Vec<_>>(), elements);
        Ok(())
    })
}

#[cfg(test)]
mod tests;
