//! Trav Core - the `TraversableOnce` contract and the sequence factory abstraction.
//!
//! This crate provides:
//! - The capability contract every sequence container implements
//!   (`TraversableOnce`: `exists`, `exists_unique`, `for_all`, `peek`)
//! - Content equality across container representations (`elements_eq`)
//! - The factory surface a container exposes to the conformance harness
//!   (`SeqFactory`), including the reduction target (`SeqBuilder`)
//! - The eight primitive element kinds accepted by `SeqFactory::of_primitives`
//!
//! # Architecture
//!
//! The contract is split from its implementations:
//! - Containers (`trav_seq`) implement `TraversableOnce` and `SeqFactory`
//! - The harness (`trav_conformance`) is generic over `SeqFactory` only
//! - Neither depends on the other, so a new container needs no harness changes
//!   and a new behavior needs no container changes

mod builder;
mod factory;
mod primitive;
mod traversable;

#[cfg(test)]
mod test_helpers;

pub use builder::SeqBuilder;
pub use factory::SeqFactory;
pub use primitive::{Primitive, PrimitiveKind};
pub use traversable::{elements_eq, TraversableOnce};
