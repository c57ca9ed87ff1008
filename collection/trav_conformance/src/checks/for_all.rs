//! `for_all`: true iff every element satisfies the predicate.

use trav_core::{SeqFactory, TraversableOnce};

use super::counting;
use crate::{CheckResult, Expectation, Operation};

fn expect<F: SeqFactory>(fixture: &str) -> Expectation {
    Expectation::new::<F>(Operation::ForAll, fixture)
}

pub fn holds_for_every_element<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([2, 4]);
    expect::<F>("of(2, 4) with even").bool_is(true, seq.for_all(|&i| i % 2 == 0))
}

pub fn fails_on_violation<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([2, 3]);
    expect::<F>("of(2, 3) with even").bool_is(false, seq.for_all(|&i| i % 2 == 0))
}

pub fn is_vacuous_on_empty<F: SeqFactory>() -> CheckResult {
    let seq = F::empty::<i32>();
    expect::<F>("empty() with always-false").bool_is(true, seq.for_all(|_| false))
}

/// Nothing after the first violating element is examined.
pub fn stops_at_first_violation<F: SeqFactory>() -> CheckResult {
    let seq = F::of_elements([1, 2, 3]);
    let (predicate, calls) = counting(|&i: &i32| i < 2);
    let expect = expect::<F>("of(1, 2, 3) with x < 2");
    expect.bool_is(false, seq.for_all(predicate))?;
    expect.value_is(&2, &calls.get())
}
