//! Conformance failure types.

use std::fmt;

/// Contract operation a behavior exercises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Exists,
    ExistsUnique,
    ForAll,
    Peek,
    /// Factory construction paths (`empty`, `of`, `of_all`, primitives, builder).
    Construction,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Exists => "exists",
            Operation::ExistsUnique => "exists_unique",
            Operation::ForAll => "for_all",
            Operation::Peek => "peek",
            Operation::Construction => "construction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A contract violation, attributed to (operation, target, fixture).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConformanceFailure {
    /// A fixed-fixture check saw a different result than expected.
    #[error("{target}: {operation} on {fixture}: expected {expected}, got {actual}")]
    Mismatch {
        operation: Operation,
        target: &'static str,
        fixture: String,
        expected: String,
        actual: String,
    },

    /// A property check failed; `fixture` is the minimal failing input.
    #[error("{target}: {operation} property failed on {fixture}: {message}")]
    Property {
        operation: Operation,
        target: &'static str,
        fixture: String,
        message: String,
    },
}

impl ConformanceFailure {
    pub fn operation(&self) -> Operation {
        match self {
            ConformanceFailure::Mismatch { operation, .. }
            | ConformanceFailure::Property { operation, .. } => *operation,
        }
    }

    pub fn target(&self) -> &'static str {
        match self {
            ConformanceFailure::Mismatch { target, .. }
            | ConformanceFailure::Property { target, .. } => target,
        }
    }

    pub fn fixture(&self) -> &str {
        match self {
            ConformanceFailure::Mismatch { fixture, .. }
            | ConformanceFailure::Property { fixture, .. } => fixture,
        }
    }
}

/// Result of a single behavior check.
pub type CheckResult = Result<(), ConformanceFailure>;

#[cfg(test)]
mod tests;
