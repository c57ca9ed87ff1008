//! Reduction target for assembling a sequence from an external accumulation.
//!
//! Mirrors the four stages of a collecting reduction:
//!
//! | stage       | method                          |
//! |-------------|---------------------------------|
//! | supplier    | [`SeqBuilder::new`]             |
//! | accumulator | [`SeqBuilder::push`] / `Extend` |
//! | combiner    | [`SeqBuilder::combine`]         |
//! | finisher    | [`SeqBuilder::finish`]          |
//!
//! Elements are buffered in order and handed to the factory's `of_all` once,
//! so the resulting container never sees partial state.

use std::fmt;
use std::marker::PhantomData;

use crate::factory::SeqFactory;

/// Ordered accumulator that finishes into `F::Seq<T>`.
pub struct SeqBuilder<F, T> {
    buffer: Vec<T>,
    factory: PhantomData<fn() -> F>,
}

impl<F: SeqFactory, T: Clone + 'static> SeqBuilder<F, T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        SeqBuilder {
            buffer: Vec::new(),
            factory: PhantomData,
        }
    }

    /// Append one element.
    pub fn push(&mut self, element: T) {
        self.buffer.push(element);
    }

    /// Merge a partial accumulation produced elsewhere, keeping `self`'s
    /// elements before `other`'s.
    #[must_use]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.buffer.append(&mut other.buffer);
        self
    }

    /// Number of elements accumulated so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Build the container from everything accumulated, in order.
    pub fn finish(self) -> F::Seq<T> {
        F::of_all(self.buffer)
    }
}

impl<F: SeqFactory, T: Clone + 'static> Default for SeqBuilder<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SeqFactory, T: Clone + 'static> Extend<T> for SeqBuilder<F, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.buffer.extend(elements);
    }
}

impl<F: SeqFactory, T: fmt::Debug> fmt::Debug for SeqBuilder<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqBuilder")
            .field("target", &F::NAME)
            .field("buffer", &self.buffer)
            .finish()
    }
}
