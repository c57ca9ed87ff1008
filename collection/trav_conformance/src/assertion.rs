//! Assertion adapter: compares expected and actual results independent of a
//! container's representation or laziness.
//!
//! Sequences are compared with [`elements_eq`], element by element in
//! traversal order, which also forces lazy containers. Mismatches render
//! sequences as `[a, b, c]` regardless of the container's own `Debug`.

use std::fmt::{self, Write as _};

use trav_core::{elements_eq, SeqFactory, TraversableOnce};

use crate::failure::{CheckResult, ConformanceFailure, Operation};

/// The (operation, target, fixture) a check is verifying.
#[derive(Clone, Debug)]
pub struct Expectation {
    operation: Operation,
    target: &'static str,
    fixture: String,
}

impl Expectation {
    /// An expectation about `operation` on a fixture built by factory `F`.
    pub fn new<F: SeqFactory>(operation: Operation, fixture: impl Into<String>) -> Self {
        Expectation {
            operation,
            target: F::NAME,
            fixture: fixture.into(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Verify a boolean query result.
    pub fn bool_is(&self, expected: bool, actual: bool) -> CheckResult {
        if expected == actual {
            Ok(())
        } else {
            Err(self.mismatch(expected.to_string(), actual.to_string()))
        }
    }

    /// Verify a plain value.
    pub fn value_is<V>(&self, expected: &V, actual: &V) -> CheckResult
    where
        V: PartialEq + fmt::Debug + ?Sized,
    {
        if expected == actual {
            Ok(())
        } else {
            Err(self.mismatch(format!("{expected:?}"), format!("{actual:?}")))
        }
    }

    /// Verify that two sequences hold the same elements in the same order.
    pub fn seq_matches<T, A, B>(&self, expected: &A, actual: &B) -> CheckResult
    where
        T: PartialEq + fmt::Debug,
        A: TraversableOnce<T> + ?Sized,
        B: TraversableOnce<T> + ?Sized,
    {
        if elements_eq(expected, actual) {
            Ok(())
        } else {
            Err(self.mismatch(render(expected), render(actual)))
        }
    }

    /// Verify a sequence against a reference slice.
    pub fn elements_are<T, S>(&self, expected: &[T], actual: &S) -> CheckResult
    where
        T: PartialEq + fmt::Debug,
        S: TraversableOnce<T> + ?Sized,
    {
        if actual.iter().eq(expected.iter()) {
            Ok(())
        } else {
            Err(self.mismatch(format!("{expected:?}"), render(actual)))
        }
    }

    #[cold]
    fn mismatch(&self, expected: String, actual: String) -> ConformanceFailure {
        ConformanceFailure::Mismatch {
            operation: self.operation,
            target: self.target,
            fixture: self.fixture.clone(),
            expected,
            actual,
        }
    }
}

/// Render a sequence's elements as `[a, b, c]`, forcing lazy containers.
pub fn render<T, S>(seq: &S) -> String
where
    T: fmt::Debug,
    S: TraversableOnce<T> + ?Sized,
{
    let mut out = String::from("[");
    for (index, element) in seq.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{element:?}");
    }
    out.push(']');
    out
}
