use pretty_assertions::assert_eq;

use super::*;
use crate::checks::peek;
use crate::test_helpers::{
    DuplicateBlind, FlawedFactory, MisreportedPeek, NoShortCircuit, Reversed, Sound,
    TruncatedPeek,
};
use crate::{ConformanceFailure, Operation};

fn sequential() -> ConformanceRunner {
    ConformanceRunner::with_config(HarnessConfig {
        parallel: false,
        property_cases: 32,
        ..HarnessConfig::default()
    })
}

fn failed_behaviors(report: &TargetReport) -> Vec<&'static str> {
    report
        .results
        .iter()
        .filter(|result| result.outcome.is_failed())
        .map(|result| result.behavior)
        .collect()
}

#[test]
fn sound_container_passes_everything() {
    let report = sequential().run::<FlawedFactory<Sound>>();
    assert_eq!(failed_behaviors(&report), Vec::<&str>::new());
    assert_eq!(report.total(), behaviors::<FlawedFactory<Sound>>().len());
    assert_eq!(report.target, "Flawed<Sound>");
}

#[test]
fn parallel_run_matches_sequential() {
    let runner = ConformanceRunner::with_config(HarnessConfig {
        property_cases: 32,
        ..HarnessConfig::default()
    });
    let parallel = runner.run::<FlawedFactory<DuplicateBlind>>();
    let sequential = sequential().run::<FlawedFactory<DuplicateBlind>>();
    assert_eq!(failed_behaviors(&parallel), failed_behaviors(&sequential));
    assert_eq!(parallel.total(), sequential.total());
}

#[test]
fn duplicate_blind_fails_only_exists_unique() {
    let report = sequential().run::<FlawedFactory<DuplicateBlind>>();
    assert_eq!(
        failed_behaviors(&report),
        vec![
            "exists_unique::rejects_duplicate_match",
            "exists_unique::rejects_separated_duplicates",
            "exists_unique::scans_past_first_match",
            "exists_unique::stops_at_second_match",
            "properties::exists_unique_agrees_with_reference",
        ]
    );
    assert!(report
        .failures()
        .all(|failure| failure.operation() == Operation::ExistsUnique
            && failure.target() == "Flawed<DuplicateBlind>"));
}

#[test]
fn failure_names_the_fixture() {
    let report = sequential().run::<FlawedFactory<DuplicateBlind>>();
    let first = report.failures().next().cloned();
    assert_eq!(
        first,
        Some(ConformanceFailure::Mismatch {
            operation: Operation::ExistsUnique,
            target: "Flawed<DuplicateBlind>",
            fixture: "of(1, 1, 2) with x == 1".to_string(),
            expected: "false".to_string(),
            actual: "true".to_string(),
        })
    );
}

#[test]
fn no_short_circuit_is_caught_by_call_counts() {
    let report = sequential().run::<FlawedFactory<NoShortCircuit>>();
    assert_eq!(
        failed_behaviors(&report),
        vec![
            "exists::stops_at_first_match",
            "for_all::stops_at_first_violation",
        ]
    );
}

#[test]
fn misreported_peek_fails_peek_checks() {
    let report = sequential().run::<FlawedFactory<MisreportedPeek>>();
    assert_eq!(
        failed_behaviors(&report),
        vec![
            "peek::observes_published_last_element",
            "properties::peek_reports_published_element",
        ]
    );
}

#[test]
fn truncated_peek_is_caught_by_content_checks() {
    let report = sequential().run::<FlawedFactory<TruncatedPeek>>();
    assert_eq!(
        failed_behaviors(&report),
        vec![
            "peek::singleton_without_action",
            "peek::observes_published_last_element",
            "peek::preserves_queries",
            "properties::peek_reports_published_element",
        ]
    );
}

#[test]
fn published_last_element_check_compares_content() {
    assert_eq!(
        peek::observes_published_last_element::<FlawedFactory<TruncatedPeek>>(),
        Err(ConformanceFailure::Mismatch {
            operation: Operation::Peek,
            target: "Flawed<TruncatedPeek>",
            fixture: "of(1, 2, 3)".to_string(),
            expected: "[1, 2, 3]".to_string(),
            actual: "[1, 2]".to_string(),
        })
    );
}

#[test]
fn reversed_construction_is_caught() {
    let report = sequential().run::<FlawedFactory<Reversed>>();
    let failed = failed_behaviors(&report);
    assert!(failed.contains(&"construction::paths_agree"));
    assert!(failed.contains(&"construction::primitive_arrays_match_boxed_elements"));
    assert!(failed.contains(&"properties::construction_preserves_order"));
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let runner = ConformanceRunner::with_config(HarnessConfig {
        fail_fast: true,
        ..HarnessConfig::default()
    });
    let report = runner.run::<FlawedFactory<NoShortCircuit>>();
    assert_eq!(report.failed(), 1);
    assert_eq!(
        report.results.last().map(|result| result.behavior),
        Some("exists::stops_at_first_match")
    );
}

#[test]
fn filter_selects_behaviors() {
    let runner = ConformanceRunner::with_config(HarnessConfig {
        filter: Some("for_all::".to_string()),
        ..HarnessConfig::default()
    });
    let report = runner.run::<FlawedFactory<Sound>>();
    assert_eq!(report.total(), 4);
    assert!(report
        .results
        .iter()
        .all(|result| result.operation == Operation::ForAll));
    assert_eq!(runner.config().filter.as_deref(), Some("for_all::"));
}
