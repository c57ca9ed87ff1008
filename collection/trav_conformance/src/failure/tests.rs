use pretty_assertions::assert_eq;

use super::*;

fn mismatch() -> ConformanceFailure {
    ConformanceFailure::Mismatch {
        operation: Operation::Exists,
        target: "List",
        fixture: "of(1, 2, 3)".to_string(),
        expected: "true".to_string(),
        actual: "false".to_string(),
    }
}

#[test]
fn mismatch_display_names_operation_target_and_fixture() {
    assert_eq!(
        mismatch().to_string(),
        "List: exists on of(1, 2, 3): expected true, got false"
    );
}

#[test]
fn property_display_carries_message() {
    let failure = ConformanceFailure::Property {
        operation: Operation::ForAll,
        target: "Stream",
        fixture: "[0, 3]".to_string(),
        message: "disagrees with slice reference".to_string(),
    };
    assert_eq!(
        failure.to_string(),
        "Stream: for_all property failed on [0, 3]: disagrees with slice reference"
    );
}

#[test]
fn accessors_expose_attribution() {
    let failure = mismatch();
    assert_eq!(failure.operation(), Operation::Exists);
    assert_eq!(failure.target(), "List");
    assert_eq!(failure.fixture(), "of(1, 2, 3)");
}

#[test]
fn operation_names() {
    let names: Vec<_> = [
        Operation::Exists,
        Operation::ExistsUnique,
        Operation::ForAll,
        Operation::Peek,
        Operation::Construction,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(
        names,
        ["exists", "exists_unique", "for_all", "peek", "construction"]
    );
}
