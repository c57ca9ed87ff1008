//! Behavior checks.
//!
//! Each check is a generic function over [`SeqFactory`](trav_core::SeqFactory):
//! it builds its own fixtures, applies one contract operation, and returns
//! `Err` naming the operation, target, and fixture on the first mismatch.
//! Capture cells are allocated per call, so checks share no state and may run
//! concurrently.

pub mod construction;
pub mod exists;
pub mod exists_unique;
pub mod for_all;
pub mod peek;

use std::cell::Cell;
use std::rc::Rc;

/// Wrap `predicate` so every invocation bumps the returned counter.
///
/// Keep in step with the test-only copy in `trav_core::test_helpers`.
pub(crate) fn counting<T>(
    mut predicate: impl FnMut(&T) -> bool,
) -> (impl FnMut(&T) -> bool, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = move |element: &T| {
        counter.set(counter.get() + 1);
        predicate(element)
    };
    (wrapped, calls)
}
