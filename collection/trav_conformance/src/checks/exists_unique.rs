//! `exists_unique`: true iff exactly one element satisfies the predicate.

use trav_core::{SeqFactory, TraversableOnce};

use super::counting;
use crate::{CheckResult, Expectation, Operation};

fn expect<F: SeqFactory>(fixture: &str) -> Expectation {
    Expectation::new::<F>(Operation::ExistsUnique, fixture)
}

pub fn finds_single_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2]);
    expect::<F>("of(1, 2) with x == 1").bool_is(true, seq.exists_unique(|&i| i == 1))
}

pub fn is_false_on_empty<F: SeqFactory>() -> CheckResult {
    let seq = F::empty::<i32>();
    expect::<F>("empty() with always-true").bool_is(false, seq.exists_unique(|_| true))
}

pub fn rejects_duplicate_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 1, 2]);
    expect::<F>("of(1, 1, 2) with x == 1").bool_is(false, seq.exists_unique(|&i| i == 1))
}

pub fn rejects_separated_duplicates<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2, 1]);
    expect::<F>("of(1, 2, 1) with x == 1").bool_is(false, seq.exists_unique(|&i| i == 1))
}

/// A first match does not decide the answer; the rest must be scanned.
pub fn scans_past_first_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2, 3]);
    let (predicate, calls) = counting(|&i: &i32| i == 1);
    let expect = expect::<F>("of(1, 2, 3) with x == 1");
    expect.bool_is(true, seq.exists_unique(predicate))?;
    expect.value_is(&3, &calls.get())
}

/// A second match decides the answer; nothing after it is examined.
pub fn stops_at_second_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([2, 4, 6, 8]);
    let (predicate, calls) = counting(|&i: &i32| i % 2 == 0);
    let expect = expect::<F>("of(2, 4, 6, 8) with even");
    expect.bool_is(false, seq.exists_unique(predicate))?;
    expect.value_is(&2, &calls.get())
}
