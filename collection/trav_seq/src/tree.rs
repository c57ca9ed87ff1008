//! Balanced binary tree holding a sequence in in-order position.
//!
//! Built once from its elements: the middle element (`elements[len / 2]`)
//! becomes the root and each half recursively forms a subtree, so the height
//! is `ceil(log2(len + 1))` and all recursion below is logarithmic in depth.
//!
//! Iteration is in-order (sequence order). `peek` walks the tree
//! structurally, children before their node, so the root is the last element
//! observed.
//!
//! ```text
//! of_all([1, 2, 3, 4, 5])        iter: 1 2 3 4 5
//!
//!           3                    peek: 1 2 4 5 3
//!         /   \
//!        2     5
//!       /     /
//!      1     4
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use smallvec::SmallVec;
use trav_core::{SeqFactory, TraversableOnce};

type Link<T> = Option<Arc<Node<T>>>;

struct Node<T> {
    left: Link<T>,
    value: T,
    right: Link<T>,
}

/// Immutable sequence stored as a balanced binary tree.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// Build a subtree from the next `len` elements of `items`.
fn build<T>(len: usize, items: &mut impl Iterator<Item = T>) -> Link<T> {
    if len == 0 {
        return None;
    }
    let left_len = len / 2;
    let left = build(left_len, items);
    let value = items.next()?;
    let right = build(len - left_len - 1, items);
    Some(Arc::new(Node { left, value, right }))
}

/// Visit children before their node.
fn visit_post_order<T>(link: &Link<T>, action: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        visit_post_order(&node.left, action);
        visit_post_order(&node.right, action);
        action(&node.value);
    }
}

fn height_of<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, |node| {
        1 + height_of(&node.left).max(height_of(&node.right))
    })
}

impl<T> Tree<T> {
    /// The empty tree.
    pub const fn empty() -> Self {
        Tree { root: None, len: 0 }
    }

    /// A tree of one element.
    pub fn of(value: T) -> Self {
        Tree {
            root: Some(Arc::new(Node {
                left: None,
                value,
                right: None,
            })),
            len: 1,
        }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Element at the root, if any: `elements[len / 2]` of the building input.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Number of levels; 0 for the empty tree.
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }

    /// Iterate in sequence (in-order) order.
    pub fn iter(&self) -> TreeIter<'_, T> {
        let mut iter = TreeIter {
            stack: SmallVec::new(),
            remaining: self.len,
        };
        iter.descend_left(self.root.as_deref());
        iter
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::empty()
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buffer: Vec<T> = iter.into_iter().collect();
        let len = buffer.len();
        Tree {
            root: build(len, &mut buffer.into_iter()),
            len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Tree()");
        }
        let mut tuple = f.debug_tuple("Tree");
        for value in self {
            tuple.field(value);
        }
        tuple.finish()
    }
}

/// In-order iterator over a [`Tree`].
///
/// Holds the path of nodes whose left subtree is being visited. Balanced
/// trees keep it short enough to stay inline.
pub struct TreeIter<'a, T> {
    stack: SmallVec<[&'a Node<T>; 16]>,
    remaining: usize,
}

impl<'a, T> TreeIter<'a, T> {
    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for TreeIter<'_, T> {}

impl<T> FusedIterator for TreeIter<'_, T> {}

impl<T> TraversableOnce<T> for Tree<T> {
    type Iter<'a>
        = TreeIter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> TreeIter<'_, T> {
        Tree::iter(self)
    }

    fn is_empty(&self) -> bool {
        Tree::is_empty(self)
    }

    fn peek<F>(&self, mut action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        visit_post_order(&self.root, &mut action);
        self.clone()
    }
}

/// Factory for [`Tree`].
pub struct TreeFactory;

impl SeqFactory for TreeFactory {
    const NAME: &'static str = "Tree";

    type Seq<T: Clone + 'static> = Tree<T>;

    fn empty<T: Clone + 'static>() -> Tree<T> {
        Tree::empty()
    }

    fn of<T: Clone + 'static>(element: T) -> Tree<T> {
        Tree::of(element)
    }

    fn of_all<T, I>(elements: I) -> Tree<T>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T> {
        elements.get(elements.len() / 2).cloned()
    }
}
