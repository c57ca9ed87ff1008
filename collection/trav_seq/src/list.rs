//! Persistent singly linked list.
//!
//! Cells are shared via `Arc`, so `clone()` and `tail()` are O(1) and never
//! copy elements. `peek` walks the cells front to back and hands back the same
//! cells, so the last element observed is the last element of the list.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use trav_core::{SeqFactory, TraversableOnce};

struct Cons<T> {
    value: T,
    next: Option<Arc<Cons<T>>>,
}

/// Immutable cons list with structural sharing.
pub struct List<T> {
    head: Option<Arc<Cons<T>>>,
    len: usize,
}

impl<T> List<T> {
    /// The empty list.
    pub const fn empty() -> Self {
        List { head: None, len: 0 }
    }

    /// A list of one element.
    pub fn of(value: T) -> Self {
        List::empty().prepend(value)
    }

    /// A new list with `value` in front of `self`'s elements.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        List {
            head: Some(Arc::new(Cons {
                value,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// First element, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|cell| &cell.value)
    }

    /// Everything after the first element; `None` on the empty list.
    pub fn tail(&self) -> Option<List<T>> {
        self.head.as_deref().map(|cell| List {
            head: cell.next.clone(),
            len: self.len - 1,
        })
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

// Unlink uniquely owned cells one at a time; the default recursive drop
// overflows the stack on long lists.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(cell) = next {
            next = match Arc::try_unwrap(cell) {
                Ok(mut cons) => cons.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buffer: Vec<T> = iter.into_iter().collect();
        buffer
            .into_iter()
            .rev()
            .fold(List::empty(), |list, value| list.prepend(value))
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("List()");
        }
        let mut tuple = f.debug_tuple("List");
        for value in self {
            tuple.field(value);
        }
        tuple.finish()
    }
}

/// Borrowing iterator over a [`List`].
pub struct ListIter<'a, T> {
    next: Option<&'a Cons<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let cell = self.next?;
        self.next = cell.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&cell.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<T> FusedIterator for ListIter<'_, T> {}

impl<T> TraversableOnce<T> for List<T> {
    type Iter<'a>
        = ListIter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> ListIter<'_, T> {
        List::iter(self)
    }

    fn is_empty(&self) -> bool {
        List::is_empty(self)
    }

    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.iter().for_each(action);
        self.clone()
    }
}

/// Factory for [`List`].
pub struct ListFactory;

impl SeqFactory for ListFactory {
    const NAME: &'static str = "List";

    type Seq<T: Clone + 'static> = List<T>;

    fn empty<T: Clone + 'static>() -> List<T> {
        List::empty()
    }

    fn of<T: Clone + 'static>(element: T) -> List<T> {
        List::of(element)
    }

    fn of_all<T, I>(elements: I) -> List<T>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T> {
        elements.last().cloned()
    }
}
