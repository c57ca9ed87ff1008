//! Lazily evaluated, memoized stream.
//!
//! A stream is a chain of thunks. Each thunk computes its cell (empty, or a
//! head plus the tail stream) the first time it is forced and keeps the result,
//! so every element is evaluated at most once no matter how often the stream
//! is traversed. Streams may be infinite; `exists` and `for_all` terminate on
//! infinite input once the decisive element is reached.
//!
//! `peek` is lazy as well: nothing is observed until the peeked stream is
//! forced, and each element is observed as the traversal reaches it. After
//! full consumption the last element observed is the last element.
//!
//! Thunks are reference counted with `Rc`, so streams stay on one thread.

use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use trav_core::{SeqFactory, TraversableOnce};

type Compute<T> = Box<dyn FnOnce() -> Node<T>>;

enum Node<T> {
    Nil,
    Cons(T, Stream<T>),
}

struct Thunk<T> {
    node: OnceCell<Node<T>>,
    pending: Cell<Option<Compute<T>>>,
}

// Forced tails form a chain of uniquely owned thunks; unlink it iteratively.
impl<T> Drop for Thunk<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(Node::Cons(head, tail)) = next {
            drop(head);
            next = match Rc::try_unwrap(tail.thunk) {
                Ok(mut thunk) => thunk.node.take(),
                Err(_) => None,
            };
        }
    }
}

/// Lazy sequence with memoized, at-most-once element evaluation.
pub struct Stream<T> {
    thunk: Rc<Thunk<T>>,
}

impl<T> Stream<T> {
    fn evaluated(node: Node<T>) -> Self {
        Stream {
            thunk: Rc::new(Thunk {
                node: OnceCell::from(node),
                pending: Cell::new(None),
            }),
        }
    }

    /// The empty stream.
    pub fn empty() -> Self {
        Stream::evaluated(Node::Nil)
    }

    /// A stream whose first element is `head`, followed by `tail`.
    pub fn cons(head: T, tail: Stream<T>) -> Self {
        Stream::evaluated(Node::Cons(head, tail))
    }

    /// A stream of one element.
    pub fn of(value: T) -> Self {
        Stream::cons(value, Stream::empty())
    }

    /// Returns `true` if the first cell has been evaluated.
    pub fn is_forced(&self) -> bool {
        self.thunk.node.get().is_some()
    }

    /// Number of leading elements already evaluated. Forces nothing.
    pub fn forced_len(&self) -> usize {
        let mut count = 0;
        let mut current = self;
        while let Some(Node::Cons(_, tail)) = current.thunk.node.get() {
            count += 1;
            current = tail;
        }
        count
    }

    /// Evaluate the first cell if needed and return it.
    ///
    /// # Panics
    ///
    /// If an earlier evaluation of this cell panicked. The computation is
    /// consumed by its first run, so the cell can never be filled.
    fn force(&self) -> &Node<T> {
        self.thunk
            .node
            .get_or_init(|| match self.thunk.pending.take() {
                Some(compute) => compute(),
                None => panic!("stream cell forced after its computation panicked"),
            })
    }

    /// First element, forcing only the first cell.
    pub fn head(&self) -> Option<&T> {
        match self.force() {
            Node::Nil => None,
            Node::Cons(head, _) => Some(head),
        }
    }

    /// Everything after the first element; `None` on the empty stream.
    pub fn tail(&self) -> Option<&Stream<T>> {
        match self.force() {
            Node::Nil => None,
            Node::Cons(_, tail) => Some(tail),
        }
    }

    /// Iterate, forcing each cell as it is reached.
    pub fn iter(&self) -> StreamIter<'_, T> {
        StreamIter {
            current: Some(self),
        }
    }

    /// Number of elements. Forces the whole stream; never returns on an
    /// infinite one.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the stream has no elements. Forces the first cell.
    pub fn is_empty(&self) -> bool {
        matches!(self.force(), Node::Nil)
    }
}

impl<T: 'static> Stream<T> {
    /// A stream whose first cell is produced by `compute` when first forced.
    ///
    /// `compute` returns the head and the tail, or `None` for an empty stream.
    pub fn lazy(compute: impl FnOnce() -> Option<(T, Stream<T>)> + 'static) -> Self {
        Stream {
            thunk: Rc::new(Thunk {
                node: OnceCell::new(),
                pending: Cell::new(Some(Box::new(move || match compute() {
                    Some((head, tail)) => Node::Cons(head, tail),
                    None => Node::Nil,
                }))),
            }),
        }
    }

    /// A stream over `iter`, pulling one element each time a cell is forced.
    pub fn from_iter_lazy<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Stream::pulling(Rc::new(RefCell::new(iter)))
    }

    fn pulling<I>(source: Rc<RefCell<I>>) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Stream::lazy(move || {
            let head = source.borrow_mut().next()?;
            Some((head, Stream::pulling(source)))
        })
    }

    /// The infinite stream `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate(seed: T, mut step: impl FnMut(&T) -> T + 'static) -> Self {
        Stream::from_iter_lazy(std::iter::successors(Some(seed), move |current| {
            Some(step(current))
        }))
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T: 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buffer: Vec<T> = iter.into_iter().collect();
        Stream::from_iter_lazy(buffer.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = StreamIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forces both streams as far as the first difference.
impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stream<T> {}

/// Shows the evaluated prefix only; `?` marks an unevaluated remainder.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream(")?;
        let mut current = self;
        let mut first = true;
        loop {
            let Some(node) = current.thunk.node.get() else {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str("?")?;
                break;
            };
            let Node::Cons(head, tail) = node else {
                break;
            };
            if !first {
                f.write_str(", ")?;
            }
            fmt::Debug::fmt(head, f)?;
            first = false;
            current = tail;
        }
        f.write_str(")")
    }
}

/// Iterator over a [`Stream`], forcing each cell as it is reached.
pub struct StreamIter<'a, T> {
    current: Option<&'a Stream<T>>,
}

impl<'a, T> Iterator for StreamIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let stream = self.current?;
        match stream.force() {
            Node::Nil => {
                self.current = None;
                None
            }
            Node::Cons(head, tail) => {
                self.current = Some(tail);
                Some(head)
            }
        }
    }
}

impl<T> FusedIterator for StreamIter<'_, T> {}

type SharedAction<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Lazily mirror `source`, running `action` on each head as its cell is forced.
fn peeking<T: Clone + 'static>(source: Stream<T>, action: SharedAction<T>) -> Stream<T> {
    Stream::lazy(move || {
        let (head, tail) = match source.force() {
            Node::Nil => return None,
            Node::Cons(head, tail) => (head.clone(), tail.clone()),
        };
        (&mut *action.borrow_mut())(&head);
        Some((head, peeking(tail, action)))
    })
}

impl<T: Clone + 'static> TraversableOnce<T> for Stream<T> {
    type Iter<'a>
        = StreamIter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> StreamIter<'_, T> {
        Stream::iter(self)
    }

    fn is_empty(&self) -> bool {
        Stream::is_empty(self)
    }

    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        let action: SharedAction<T> = Rc::new(RefCell::new(action));
        peeking(self.clone(), action)
    }
}

/// Factory for [`Stream`].
pub struct StreamFactory;

impl SeqFactory for StreamFactory {
    const NAME: &'static str = "Stream";

    type Seq<T: Clone + 'static> = Stream<T>;

    fn empty<T: Clone + 'static>() -> Stream<T> {
        Stream::empty()
    }

    fn of<T: Clone + 'static>(element: T) -> Stream<T> {
        Stream::of(element)
    }

    fn of_all<T, I>(elements: I) -> Stream<T>
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
