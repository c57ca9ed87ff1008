use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::*;

fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|&(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults() {
    let config = HarnessConfig::default();
    assert_eq!(config.filter, None);
    assert!(config.parallel);
    assert!(!config.fail_fast);
    assert_eq!(config.property_cases, 64);
}

#[test]
fn empty_environment_gives_defaults() {
    assert_eq!(
        HarnessConfig::from_lookup(lookup_in(&[])),
        HarnessConfig::default()
    );
}

#[test]
fn reads_every_variable() {
    let config = HarnessConfig::from_lookup(lookup_in(&[
        ("TRAV_FILTER", "peek"),
        ("TRAV_SEQUENTIAL", "1"),
        ("TRAV_FAIL_FAST", "true"),
        ("TRAV_PROPERTY_CASES", "200"),
    ]));
    assert_eq!(
        config,
        HarnessConfig {
            filter: Some("peek".to_string()),
            parallel: false,
            fail_fast: true,
            property_cases: 200,
        }
    );
}

#[test]
fn flags_accept_common_spellings() {
    for (raw, sequential) in [("YES", true), ("on", true), ("0", false), ("off", false)] {
        let config = HarnessConfig::from_lookup(lookup_in(&[("TRAV_SEQUENTIAL", raw)]));
        assert_eq!(config.parallel, !sequential, "TRAV_SEQUENTIAL={raw}");
    }
}

#[test]
fn invalid_values_are_ignored() {
    let config = HarnessConfig::from_lookup(lookup_in(&[
        ("TRAV_FAIL_FAST", "sometimes"),
        ("TRAV_PROPERTY_CASES", "0"),
        ("TRAV_FILTER", ""),
    ]));
    assert_eq!(config, HarnessConfig::default());

    let config = HarnessConfig::from_lookup(lookup_in(&[("TRAV_PROPERTY_CASES", "-3")]));
    assert_eq!(config.property_cases, HarnessConfig::DEFAULT_PROPERTY_CASES);
}

#[test]
fn filter_is_substring_match() {
    let config = HarnessConfig {
        filter: Some("exists".to_string()),
        ..HarnessConfig::default()
    };
    assert!(config.matches("exists::stops_at_first_match"));
    assert!(config.matches("exists_unique::is_false_on_empty"));
    assert!(!config.matches("for_all::is_vacuous_on_empty"));
    assert!(HarnessConfig::default().matches("anything"));
}
