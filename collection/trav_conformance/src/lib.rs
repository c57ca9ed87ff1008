//! Trav Conformance - one behavior suite for every `TraversableOnce` container.
//!
//! This crate provides:
//! - Behavior checks for `exists`, `exists_unique`, `for_all`, `peek`, and the
//!   factory's construction paths (`checks`)
//! - Property checks over generated fixtures (`properties`)
//! - The assertion adapter comparing sequences by content (`Expectation`)
//! - A registry of every behavior (`behaviors`), a runner executing it against
//!   a target (`ConformanceRunner`), and the resulting reports
//! - `conformance_suite!`, which expands to one `#[test]` per behavior
//!
//! # Architecture
//!
//! Every check is a generic function over [`SeqFactory`](trav_core::SeqFactory).
//! The factory supplies fixtures and publishes its peek traversal order; the
//! check applies contract operations and verifies results through an
//! [`Expectation`]. A mismatch surfaces as a [`ConformanceFailure`] naming the
//! operation, the target container, and the fixture.
//!
//! Adding a container means implementing `SeqFactory`. Adding a behavior means
//! writing one check and registering it; every container picks it up.
//!
//! # Usage
//!
//! ```text
//! mod list {
//!     trav_conformance::conformance_suite!(trav_seq::ListFactory);
//! }
//! ```

mod assertion;
pub mod checks;
mod config;
mod failure;
pub mod properties;
mod registry;
mod report;
mod runner;
mod suite;

#[cfg(test)]
mod test_helpers;

pub use assertion::{render, Expectation};
pub use config::HarnessConfig;
pub use failure::{CheckResult, ConformanceFailure, Operation};
pub use registry::{behaviors, Behavior};
pub use report::{BehaviorResult, ConformanceSummary, Outcome, TargetReport};
pub use runner::ConformanceRunner;
pub use suite::assert_passes;
