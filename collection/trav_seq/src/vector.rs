//! Immutable vector over a shared slice.
//!
//! Elements live in one contiguous `Arc<[T]>`; clones share it. Built once,
//! never resized.

use std::fmt;
use std::ops::Deref;
use std::slice;
use std::sync::Arc;

use trav_core::{Primitive, SeqFactory, TraversableOnce};

/// Contiguous immutable sequence with O(1) indexing.
pub struct Vector<T> {
    items: Arc<[T]>,
}

impl<T> Vector<T> {
    /// The empty vector.
    pub fn empty() -> Self {
        Vector {
            items: Arc::from(Vec::new()),
        }
    }

    /// A vector of one element.
    pub fn of(value: T) -> Self {
        Vector {
            items: Arc::from(vec![value]),
        }
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Vector<T> {
    /// A vector copying the elements of `slice`, in order.
    pub fn from_slice(slice: &[T]) -> Self {
        Vector {
            items: Arc::from(slice),
        }
    }
}

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::empty()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Vector {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("Vector()");
        }
        let mut tuple = f.debug_tuple("Vector");
        for value in self.items.iter() {
            tuple.field(value);
        }
        tuple.finish()
    }
}

impl<T> TraversableOnce<T> for Vector<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.items.iter().for_each(action);
        self.clone()
    }
}

/// Factory for [`Vector`].
pub struct VectorFactory;

impl SeqFactory for VectorFactory {
    const NAME: &'static str = "Vector";

    type Seq<T: Clone + 'static> = Vector<T>;

    fn empty<T: Clone + 'static>() -> Vector<T> {
        Vector::empty()
    }

    fn of<T: Clone + 'static>(element: T) -> Vector<T> {
        Vector::of(element)
    }

    fn of_all<T, I>(elements: I) -> Vector<T>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    fn of_primitives<P: Primitive>(array: &[P]) -> Vector<P> {
        Vector::from_slice(array)
    }

    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T> {
        elements.last().cloned()
    }
}
