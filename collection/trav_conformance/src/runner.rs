//! Conformance execution engine.
//!
//! Runs the registry for one target and collects a [`TargetReport`].
//! Fixtures are built inside each behavior, so running behaviors on rayon
//! worker threads never moves a container across threads.

use std::time::Instant;

use rayon::prelude::*;
use trav_core::SeqFactory;

use crate::registry::{behaviors, Behavior};
use crate::report::{BehaviorResult, Outcome, TargetReport};
use crate::HarnessConfig;

/// Runs every registered behavior against a target factory.
#[derive(Clone, Debug, Default)]
pub struct ConformanceRunner {
    config: HarnessConfig,
}

impl ConformanceRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        ConformanceRunner { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run the behaviors selected by the filter against `F`.
    ///
    /// A panic inside a fixed-fixture check propagates. Property checks run
    /// under proptest, which reports a panicking case as a
    /// [`ConformanceFailure::Property`](crate::ConformanceFailure::Property)
    /// with the shrunk input that triggered it.
    pub fn run<F: SeqFactory>(&self) -> TargetReport {
        let selected: Vec<Behavior> = behaviors::<F>()
            .into_iter()
            .filter(|behavior| self.config.matches(behavior.name))
            .collect();
        tracing::debug!(container = F::NAME, behaviors = selected.len(), "running conformance");

        let start = Instant::now();
        let results = if self.config.parallel && !self.config.fail_fast {
            self.run_parallel(&selected)
        } else {
            self.run_sequential(&selected)
        };

        let mut report = TargetReport::new(F::NAME);
        report.results = results;
        report.duration = start.elapsed();
        tracing::info!(
            container = F::NAME,
            passed = report.passed(),
            failed = report.failed(),
            "conformance finished"
        );
        report
    }

    fn run_sequential(&self, selected: &[Behavior]) -> Vec<BehaviorResult> {
        let mut results = Vec::with_capacity(selected.len());
        for behavior in selected {
            let result = self.run_behavior(behavior);
            let failed = result.outcome.is_failed();
            results.push(result);
            if failed && self.config.fail_fast {
                break;
            }
        }
        results
    }

    fn run_parallel(&self, selected: &[Behavior]) -> Vec<BehaviorResult> {
        selected
            .par_iter()
            .map(|behavior| self.run_behavior(behavior))
            .collect()
    }

    fn run_behavior(&self, behavior: &Behavior) -> BehaviorResult {
        let start = Instant::now();
        let outcome = match behavior.run(&self.config) {
            Ok(()) => Outcome::Passed,
            Err(failure) => {
                tracing::warn!(behavior = behavior.name, %failure, "behavior failed");
                Outcome::Failed(failure)
            }
        };
        let duration = start.elapsed();
        tracing::debug!(behavior = behavior.name, ?duration, passed = outcome.is_passed());
        BehaviorResult {
            behavior: behavior.name,
            operation: behavior.operation,
            outcome,
            duration,
        }
    }
}

#[cfg(test)]
mod tests;
