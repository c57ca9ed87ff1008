//! Trav Seq - concrete sequence containers implementing `TraversableOnce`.
//!
//! | container   | storage                         | evaluation |
//! |-------------|---------------------------------|------------|
//! | [`List`]    | persistent `Arc` cons cells     | strict     |
//! | [`Vector`]  | shared `Arc<[T]>` slice         | strict     |
//! | [`Tree`]    | balanced binary tree, in-order  | strict     |
//! | [`Stream`]  | memoized `Rc` thunks            | lazy       |
//!
//! Each container comes with a zero-sized factory (`ListFactory`, ...)
//! implementing [`SeqFactory`](trav_core::SeqFactory), which is all the
//! conformance harness needs to run its full behavior matrix against it.
//!
//! All four compare by content: two containers are equal iff they hold the
//! same elements in the same order.

mod list;
mod stream;
mod tree;
mod vector;

pub use list::{List, ListFactory, ListIter};
pub use stream::{Stream, StreamFactory, StreamIter};
pub use tree::{Tree, TreeFactory, TreeIter};
pub use vector::{Vector, VectorFactory};

pub use trav_core::{elements_eq, SeqFactory, TraversableOnce};
