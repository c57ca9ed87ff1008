//! Construction paths: every way of building the same logical sequence agrees.

use std::fmt::Debug;

use trav_core::{Primitive, SeqFactory};

use crate::{CheckResult, Expectation, Operation};

fn expect<F: SeqFactory>(fixture: impl Into<String>) -> Expectation {
    Expectation::new::<F>(Operation::Construction, fixture)
}

fn primitive_matches<F: SeqFactory, P: Primitive>(array: &[P]) -> CheckResult {
    let expect = expect::<F>(format!("{} array {array:?}", P::KIND));
    let unboxed = F::of_primitives(array);
    expect.elements_are(array, &unboxed)?;
    expect.seq_matches(&F::of_all(array.iter().copied()), &unboxed)
}

/// `of_primitives` over each of the eight kinds equals the sequence built
/// from the same values one by one.
pub fn primitive_arrays_match_boxed_elements<F: SeqFactory>() -> CheckResult {
    primitive_matches::<F, bool>(&[true, false, true])?;
    primitive_matches::<F, i8>(&[1, -2, i8::MAX])?;
    primitive_matches::<F, char>(&['a', 'b', 'c'])?;
    primitive_matches::<F, f64>(&[1.5, -0.25, 1e10])?;
    primitive_matches::<F, f32>(&[0.5, 2.0, -3.75])?;
    primitive_matches::<F, i32>(&[1, 2, 3])?;
    primitive_matches::<F, i64>(&[i64::MIN, 0, i64::MAX])?;
    primitive_matches::<F, i16>(&[7, -7, 300])?;
    primitive_matches::<F, i32>(&[])
}

fn agrees_with<F, T>(fixture: &str, expected: &[T], actual: &F::Seq<T>) -> CheckResult
where
    F: SeqFactory,
    T: Clone + PartialEq + Debug + 'static,
{
    expect::<F>(fixture).elements_are(expected, actual)
}

/// `empty`, `of`, `of_elements`, `of_all`, and the builder all preserve order
/// and agree with each other.
pub fn paths_agree<F: SeqFactory>() -> CheckResult {
    agrees_with::<F, i32>("empty()", &[], &F::empty())?;
    agrees_with::<F, i32>("of_all([])", &[], &F::of_all(Vec::new()))?;
    agrees_with::<F, i32>("of(7)", &[7], &F::of(7))?;
    agrees_with::<F, i32>("of(1, 2, 3)", &[1, 2, 3], &F::of_elements([1, 2, 3]))?;
    agrees_with::<F, i32>("of_all([1, 2, 3])", &[1, 2, 3], &F::of_all(vec![1, 2, 3]))?;
    agrees_with::<F, &str>("of(\"b\", \"a\")", &["b", "a"], &F::of_elements(["b", "a"]))?;

    let mut builder = F::builder();
    builder.push(1);
    builder.push(2);
    builder.push(3);
    let built = builder.finish();
    expect::<F>("builder [1, 2, 3]").seq_matches(&F::of_elements([1, 2, 3]), &built)
}

/// Combining partial accumulations keeps the left part before the right.
pub fn builder_combine_preserves_order<F: SeqFactory>() -> CheckResult {
    let mut left = F::builder();
    left.extend([1, 2]);
    let mut right = F::builder();
    right.extend([3, 4]);
    let combined = left.combine(right).combine(F::builder()).finish();
    expect::<F>("builder [1, 2] + [3, 4] + []").elements_are(&[1, 2, 3, 4], &combined)
}
