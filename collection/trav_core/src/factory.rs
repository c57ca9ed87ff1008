//! The construction surface a container exposes to the conformance harness.

use std::iter;

use crate::builder::SeqBuilder;
use crate::primitive::Primitive;
use crate::traversable::TraversableOnce;

/// Construction entry points for one concrete container type.
///
/// Implemented once per container, usually on a zero-sized marker type. The
/// harness builds every fixture through this trait, so a behavior written
/// once against `F: SeqFactory` runs against every registered container.
///
/// All construction paths describing the same logical sequence must produce
/// results equal under [`elements_eq`](crate::elements_eq).
pub trait SeqFactory {
    /// Display name of the container, used to attribute harness failures.
    const NAME: &'static str;

    /// The container this factory builds.
    type Seq<T: Clone + 'static>: TraversableOnce<T>;

    /// The empty sequence.
    fn empty<T: Clone + 'static>() -> Self::Seq<T>;

    /// A sequence of exactly one element.
    fn of<T: Clone + 'static>(element: T) -> Self::Seq<T> {
        Self::of_all(iter::once(element))
    }

    /// A sequence of a fixed number of elements, in argument order.
    fn of_elements<T: Clone + 'static, const N: usize>(elements: [T; N]) -> Self::Seq<T> {
        Self::of_all(elements)
    }

    /// A sequence of every element yielded by `elements`, in iteration order.
    fn of_all<T, I>(elements: I) -> Self::Seq<T>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>;

    /// A sequence of the values of a primitive array, in array order.
    fn of_primitives<P: Primitive>(array: &[P]) -> Self::Seq<P> {
        Self::of_all(array.iter().copied())
    }

    /// The reduction target: an accumulator an external pipeline feeds element
    /// by element and finally turns into `Self::Seq<T>`.
    fn builder<T: Clone + 'static>() -> SeqBuilder<Self, T>
    where
        Self: Sized,
    {
        SeqBuilder::new()
    }

    /// The element this container's `peek` leaves as last observed, once a
    /// sequence built by `of_all(elements)` has been fully consumed.
    ///
    /// `None` for an empty `elements`. Strict and lazy containers visit
    /// elements in different orders, so there is no shared default.
    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T>;
}
