//! Minimal `Vec`-backed container for unit testing the contract's provided
//! methods without depending on a real container crate.

use std::cell::Cell;
use std::rc::Rc;
use std::slice;

use crate::{SeqFactory, TraversableOnce};

/// Strict, `Vec`-backed sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct VecSeq<T>(pub Vec<T>);

impl<T: Clone> TraversableOnce<T> for VecSeq<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.0.iter().for_each(action);
        self.clone()
    }
}

/// Factory for [`VecSeq`].
#[allow(dead_code, reason = "type-level marker")]
pub struct VecFactory;

impl SeqFactory for VecFactory {
    const NAME: &'static str = "VecSeq";

    type Seq<T: Clone + 'static> = VecSeq<T>;

    fn empty<T: Clone + 'static>() -> VecSeq<T> {
        VecSeq(Vec::new())
    }

    fn of_all<T, I>(elements: I) -> VecSeq<T>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
    {
        VecSeq(elements.into_iter().collect())
    }

    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T> {
        elements.last().cloned()
    }
}

/// Wrap `predicate` so every invocation bumps the returned counter.
///
/// Keep in step with `trav_conformance::checks::counting`.
pub fn counting<T>(
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
