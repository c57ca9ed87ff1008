//! `peek`: content-preserving inspection with a side effect per element.
//!
//! Strict containers run the action while building the result; lazy ones as
//! the result is consumed. Every check therefore consumes the peeked sequence
//! fully before reading what the action observed.

use std::cell::Cell;
use std::rc::Rc;

use trav_core::{SeqFactory, TraversableOnce};

use crate::{CheckResult, Expectation, Operation};

fn expect<F: SeqFactory>(fixture: &str) -> Expectation {
    Expectation::new::<F>(Operation::Peek, fixture)
}

fn consume<T, S: TraversableOnce<T>>(seq: &S) -> usize {
    seq.iter().count()
}

pub fn empty_yields_empty<F: SeqFactory>() -> CheckResult {
    let calls = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&calls);
    let peeked = F::empty::<i32>().peek(move |_| counter.set(counter.get() + 1));
    let expect = expect::<F>("empty()");
    expect.elements_are::<i32, _>(&[], &peeked)?;
    expect.value_is(&0, &calls.get())
}

pub fn singleton_without_action<F: SeqFactory>() -> CheckResult {
    let peeked = F::of(1).peek(|_| {});
    expect::<F>("of(1) with no-op").elements_are(&[1], &peeked)
}

/// The peeked sequence equals its source, and once the comparison has
/// consumed it the action last saw the element the factory publishes for its
/// traversal order.
pub fn observes_published_last_element<F: SeqFactory>() -> CheckResult {
    let elements = [1, 2, 3];
    let last = Rc::new(Cell::new(None));
    let sink = Rc::clone(&last);
    let peeked = F::of_elements(elements).peek(move |&i: &i32| sink.set(Some(i)));
    let expect = expect::<F>("of(1, 2, 3)");
    expect.seq_matches(&F::of_elements(elements), &peeked)?;
    expect.value_is(&F::peek_last_observed(&elements), &last.get())
}

/// Consuming the peeked sequence again does not re-run the action.
pub fn visits_each_element_once<F: SeqFactory>() -> CheckResult {
    let calls = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&calls);
    let peeked = F::of_elements([1, 2, 3]).peek(move |_| counter.set(counter.get() + 1));
    consume(&peeked);
    consume(&peeked);
    expect::<F>("of(1, 2, 3) consumed twice").value_is(&3, &calls.get())
}

/// A peeked sequence answers every query the way its source does.
pub fn preserves_queries<F: SeqFactory>() -> CheckResult {
    let source = F::of_elements([1, 2, 2, 3]);
    let peeked = F::of_elements([1, 2, 2, 3]).peek(|_| {});
    let expect = expect::<F>("of(1, 2, 2, 3)");
    expect.seq_matches(&source, &peeked)?;
    expect.bool_is(source.exists(|&i| i == 3), peeked.exists(|&i| i == 3))?;
    expect.bool_is(
        source.exists_unique(|&i| i == 2),
        peeked.exists_unique(|&i| i == 2),
    )?;
    expect.bool_is(source.for_all(|&i| i > 0), peeked.for_all(|&i| i > 0))
}
