//! Run results and report rendering.

use std::fmt::Write as _;
use std::time::Duration;

use crate::failure::{ConformanceFailure, Operation};

/// Outcome of a single behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(ConformanceFailure),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Result of running one behavior against one target.
#[derive(Clone, Debug)]
pub struct BehaviorResult {
    pub behavior: &'static str,
    pub operation: Operation,
    pub outcome: Outcome,
    pub duration: Duration,
}

/// Every behavior result for one target container.
#[derive(Clone, Debug)]
pub struct TargetReport {
    pub target: &'static str,
    pub results: Vec<BehaviorResult>,
    pub duration: Duration,
}

impl TargetReport {
    pub fn new(target: &'static str) -> Self {
        TargetReport {
            target,
            results: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failed()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConformanceFailure> {
        self.results.iter().filter_map(|result| match &result.outcome {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        })
    }
}

/// Aggregate over every target in a run.
#[derive(Clone, Debug, Default)]
pub struct ConformanceSummary {
    pub targets: Vec<TargetReport>,
}

impl ConformanceSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, report: TargetReport) {
        self.targets.push(report);
    }

    pub fn passed(&self) -> usize {
        self.targets.iter().map(TargetReport::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.targets.iter().map(TargetReport::failed).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Render a plain-text report. `verbose` lists passing behaviors too.
    ///
    /// ```text
    /// List: 27 passed, 0 failed (3.10ms)
    /// Stream: 26 passed, 1 failed (5.02ms)
    ///   FAIL peek::visits_each_element_once
    ///        Stream: peek on of(1, 2, 3) consumed twice: expected 3, got 6
    ///
    /// 53 passed, 1 failed across 2 targets
    /// ```
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        for report in &self.targets {
            let _ = writeln!(
                out,
                "{}: {} passed, {} failed ({:.2?})",
                report.target,
                report.passed(),
                report.failed(),
                report.duration
            );
            for result in &report.results {
                match &result.outcome {
                    Outcome::Passed if verbose => {
                        let _ = writeln!(out, "  ok   {} ({:.2?})", result.behavior, result.duration);
                    }
                    Outcome::Passed => {}
                    Outcome::Failed(failure) => {
                        let _ = writeln!(out, "  FAIL {}", result.behavior);
                        let _ = writeln!(out, "       {failure}");
                    }
                }
            }
        }
        let _ = write!(
            out,
            "\n{} passed, {} failed across {} targets",
            self.passed(),
            self.failed(),
            self.targets.len()
        );
        out
    }
}
