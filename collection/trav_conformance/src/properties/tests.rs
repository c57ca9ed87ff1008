use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{FlawedFactory, MisreportedPeek, Sound};

fn config() -> HarnessConfig {
    HarnessConfig {
        property_cases: 48,
        ..HarnessConfig::default()
    }
}

#[test]
fn sound_container_satisfies_every_property() {
    type Target = FlawedFactory<Sound>;
    let config = config();
    assert_eq!(exists_agrees_with_reference::<Target>(&config), Ok(()));
    assert_eq!(exists_unique_agrees_with_reference::<Target>(&config), Ok(()));
    assert_eq!(for_all_agrees_with_reference::<Target>(&config), Ok(()));
    assert_eq!(peek_reports_published_element::<Target>(&config), Ok(()));
    assert_eq!(construction_preserves_order::<Target>(&config), Ok(()));
}

#[test]
fn failure_reports_shrunk_fixture() {
    let Err(failure) = peek_reports_published_element::<FlawedFactory<MisreportedPeek>>(&config())
    else {
        panic!("misreported peek should fail");
    };
    assert_eq!(failure.operation(), Operation::Peek);
    assert_eq!(failure.target(), "Flawed<MisreportedPeek>");
    // Shrinks to two distinct elements; which one ends up 0 depends on the draw.
    assert!(
        ["[0, 1] with pivot 0", "[1, 0] with pivot 0"].contains(&failure.fixture()),
        "{}",
        failure.fixture()
    );
}

#[test]
fn panicking_case_becomes_property_failure() {
    let result = holds::<FlawedFactory<Sound>>(&config(), Operation::Peek, |elements, _| {
        assert!(elements.len() < 3, "too long");
        Ok(())
    });
    let Err(failure) = result else {
        panic!("a panicking property should fail");
    };
    assert!(matches!(failure, ConformanceFailure::Property { .. }));
    assert_eq!(failure.operation(), Operation::Peek);
    assert_eq!(failure.target(), "Flawed<Sound>");
}
