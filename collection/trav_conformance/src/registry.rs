//! The registry of every conformance behavior.
//!
//! A behavior is a named, monomorphized check for one target. Adding a check
//! to the table in `__with_behaviors!` registers it here and generates its
//! `#[test]` in every `conformance_suite!`.

use std::fmt;

use trav_core::SeqFactory;

use crate::{CheckResult, HarnessConfig, Operation};

#[derive(Copy, Clone)]
enum Run {
    Check(fn() -> CheckResult),
    Property(fn(&HarnessConfig) -> CheckResult),
}

/// One named behavior, ready to run against its target.
#[derive(Copy, Clone)]
pub struct Behavior {
    /// `group::check`, e.g. `exists::stops_at_first_match`.
    pub name: &'static str,
    pub operation: Operation,
    run: Run,
}

impl Behavior {
    pub fn run(&self, config: &HarnessConfig) -> CheckResult {
        match self.run {
            Run::Check(check) => check(),
            Run::Property(property) => property(config),
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self.run, Run::Property(_))
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("name", &self.name)
            .field("operation", &self.operation)
            .field("property", &self.is_property())
            .finish()
    }
}

/// Expands `$callback! { <args> checks { .. } properties { .. } }` with the
/// table of every behavior, so the registry and `conformance_suite!` share one
/// list.
///
/// `checks` groups check names by operation and module under `checks`;
/// `properties` pairs each property under `properties` with its operation.
#[doc(hidden)]
#[macro_export]
macro_rules! __with_behaviors {
    ([$($callback:tt)*] $($args:tt)*) => {
        $($callback)*! {
            $($args)*
            checks {
                Exists: exists::{
                    finds_present_element,
                    is_false_on_empty,
                    is_false_without_match,
                    stops_at_first_match,
                },
                ExistsUnique: exists_unique::{
                    finds_single_match,
                    is_false_on_empty,
                    rejects_duplicate_match,
                    rejects_separated_duplicates,
                    scans_past_first_match,
                    stops_at_second_match,
                },
                ForAll: for_all::{
                    holds_for_every_element,
                    fails_on_violation,
                    is_vacuous_on_empty,
                    stops_at_first_violation,
                },
                Peek: peek::{
                    empty_yields_empty,
                    singleton_without_action,
                    observes_published_last_element,
                    visits_each_element_once,
                    preserves_queries,
                },
                Construction: construction::{
                    primitive_arrays_match_boxed_elements,
                    paths_agree,
                    builder_combine_preserves_order,
                },
            }
            properties {
                Exists: exists_agrees_with_reference,
                ExistsUnique: exists_unique_agrees_with_reference,
                ForAll: for_all_agrees_with_reference,
                Peek: peek_reports_published_element,
                Construction: construction_preserves_order,
            }
        }
    };
}

macro_rules! registry {
    (
        $factory:ty;
        checks { $($op:ident: $group:ident::{ $($check:ident),* $(,)? }),* $(,)? }
        properties { $($prop_op:ident: $property:ident),* $(,)? }
    ) => {
        vec![
            $($(Behavior {
                name: concat!(stringify!($group), "::", stringify!($check)),
                operation: Operation::$op,
                run: Run::Check($crate::checks::$group::$check::<$factory>),
            },)*)*
            $(Behavior {
                name: concat!("properties::", stringify!($property)),
                operation: Operation::$prop_op,
                run: Run::Property($crate::properties::$property::<$factory>),
            },)*
        ]
    };
}

/// Every behavior, instantiated for factory `F`, in registration order.
pub fn behaviors<F: SeqFactory>() -> Vec<Behavior> {
    crate::__with_behaviors!([registry] F;)
}
