//! The `TraversableOnce` capability contract.
//!
//! Containers supply a borrowing iterator and their own `peek`. The three
//! predicate queries are provided on top of `iter()` with the short-circuit
//! behavior the contract requires:
//!
//! | query           | stops after                         |
//! |-----------------|-------------------------------------|
//! | `exists`        | the first satisfying element        |
//! | `exists_unique` | the second satisfying element       |
//! | `for_all`       | the first violating element         |
//!
//! A predicate is never invoked for an element the scan did not reach, so a
//! lazy container is forced no further than the decisive element.

/// A sequence supporting existential, unique-existential, and universal
/// queries, plus non-mutating side-effecting inspection.
///
/// No operation mutates the receiver. Two implementations holding the same
/// elements in the same order are equal under [`elements_eq`], whatever their
/// representation or evaluation strategy.
pub trait TraversableOnce<T> {
    /// Borrowing iterator in sequence order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Iterate the elements in sequence order.
    ///
    /// Lazy containers evaluate elements as the iterator reaches them.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns `true` iff at least one element satisfies `predicate`.
    ///
    /// Always `false` on an empty sequence.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` iff exactly one element satisfies `predicate`.
    ///
    /// Continues past the first match to rule out a second one, and stops as
    /// soon as a second match is found. Duplicate-valued matches count
    /// separately.
    fn exists_unique<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.iter().filter(|&element| predicate(element));
        matches.next().is_some() && matches.next().is_none()
    }

    /// Returns `true` iff every element satisfies `predicate`.
    ///
    /// Vacuously `true` on an empty sequence.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns a sequence equal to the receiver, running `action` on each
    /// element as part of producing (or, for lazy containers, forcing) it.
    ///
    /// Once the result is fully consumed, `action` has run exactly once per
    /// element. The order of those calls, and therefore which element is
    /// observed last, belongs to the implementation and is published through
    /// [`SeqFactory::peek_last_observed`](crate::SeqFactory::peek_last_observed).
    #[must_use]
    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
        Self: Sized;
}

/// Content equality between any two traversables: same elements, same order.
///
/// Both sides are traversed in lockstep, so lazy sequences are forced only as
/// far as the first difference.
pub fn elements_eq<T, A, B>(left: &A, right: &B) -> bool
where
    T: PartialEq,
    A: TraversableOnce<T> + ?Sized,
    B: TraversableOnce<T> + ?Sized,
{
    left.iter().eq(right.iter())
}
