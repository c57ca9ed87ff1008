//! `exists`: true iff at least one element satisfies the predicate.

use trav_core::{SeqFactory, TraversableOnce};

use super::counting;
use crate::{CheckResult, Expectation, Operation};

fn expect<F: SeqFactory>(fixture: &str) -> Expectation {
    Expectation::new::<F>(Operation::Exists, fixture)
}

pub fn finds_present_element<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2]);
    expect::<F>("of(1, 2) with x == 2").bool_is(true, seq.exists(|&i| i == 2))
}

pub fn is_false_on_empty<F: SeqFactory>() -> CheckResult {
    let seq = F::empty::<i32>();
    expect::<F>("empty() with always-true").bool_is(false, seq.exists(|_| true))
}

pub fn is_false_without_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2, 3]);
    expect::<F>("of(1, 2, 3) with x == 4").bool_is(false, seq.exists(|&i| i == 4))
}

/// Nothing after the first satisfying element is examined.
pub fn stops_at_first_match<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2, 3]);
    let (predicate, calls) = counting(|&i: &i32| i == 1);
    let expect = expect::<F>("of(1, 2, 3) with x == 1");
    expect.bool_is(true, seq.exists(predicate))?;
    expect.value_is(&1, &calls.get())
}
