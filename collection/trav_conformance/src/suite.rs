//! `#[test]` integration: one cargo test per behavior.

use crate::CheckResult;

/// Panic with the failure's attribution if `result` is an error.
#[track_caller]
pub fn assert_passes(result: CheckResult) {
    if let Err(failure) = result {
        panic!("{failure}");
    }
}

/// Expand to one `#[test]` per conformance behavior for a factory.
///
/// Tests are laid out like behavior names: `exists::stops_at_first_match`
/// becomes `<mod>::exists::stops_at_first_match`. Property checks read their
/// case count from `TRAV_PROPERTY_CASES`.
///
/// ```text
/// mod stream {
///     trav_conformance::conformance_suite!(trav_seq::StreamFactory);
/// }
/// ```
#[macro_export]
macro_rules! conformance_suite {
    (
        @expand $factory:ty;
        checks { $($op:ident: $group:ident::{ $($check:ident),* $(,)? }),* $(,)? }
        properties { $($prop_op:ident: $property:ident),* $(,)? }
    ) => {
        $(
            mod $group {
                #[allow(unused_imports)]
                use super::*;

                $(
                    #[test]
                    fn $check() {
                        $crate::assert_passes($crate::checks::$group::$check::<$factory>());
                    }
                )*
            }
        )*

        mod properties {
            #[allow(unused_imports)]
            use super::*;

            $(
                #[test]
                fn $property() {
                    let config = $crate::HarnessConfig::from_env();
                    $crate::assert_passes($crate::properties::$property::<$factory>(&config));
                }
            )*
        }
    };

    ($factory:ty) => {
        $crate::__with_behaviors!([$crate::conformance_suite] @expand $factory;);
    };
}
