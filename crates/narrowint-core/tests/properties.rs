// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Property tests pinning the saturation contract against independently
//! computed exact results.

use narrowint_core::bounds::{Bounds, Signedness};
use narrowint_core::ops;
use narrowint_core::outcome::Outcome;
use num_bigint::BigInt;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn signedness() -> impl Strategy<Value = Signedness> {
    prop_oneof![Just(Signedness::Signed), Just(Signedness::Unsigned)]
}

/// Asserts that `outcome` is the exact result when in range and the nearer
/// bound with the flag set otherwise.
fn assert_clamped_exactly(
    outcome: Outcome,
    exact: BigInt,
    bounds: &Bounds,
) -> Result<(), TestCaseError> {
    if bounds.contains(&exact) {
        prop_assert_eq!(outcome.value(), &exact);
        prop_assert!(!outcome.saturated());
    } else {
        prop_assert!(outcome.saturated());
        let nearer = if &exact > bounds.max() {
            bounds.max()
        } else {
            bounds.min()
        };
        prop_assert_eq!(outcome.value(), nearer);
    }
    Ok(())
}

proptest! {
    #[test]
    fn add_saturates_iff_exact_sum_out_of_range(
        a in any::<i64>(),
        b in any::<i64>(),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        let bounds = Bounds::new(bits, s).unwrap();
        let outcome = ops::saturating_add(a, b, bits, s).unwrap();
        assert_clamped_exactly(outcome, BigInt::from(a) + BigInt::from(b), &bounds)?;
    }

    #[test]
    fn sub_saturates_iff_exact_difference_out_of_range(
        a in any::<i64>(),
        b in any::<i64>(),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        let bounds = Bounds::new(bits, s).unwrap();
        let outcome = ops::saturating_sub(a, b, bits, s).unwrap();
        assert_clamped_exactly(outcome, BigInt::from(a) - BigInt::from(b), &bounds)?;
    }

    #[test]
    fn mul_saturates_iff_exact_product_out_of_range(
        a in any::<i64>(),
        b in any::<i64>(),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        let bounds = Bounds::new(bits, s).unwrap();
        let outcome = ops::saturating_mul(a, b, bits, s).unwrap();
        assert_clamped_exactly(outcome, BigInt::from(a) * BigInt::from(b), &bounds)?;
    }

    #[test]
    fn div_matches_primitive_truncation(
        a in any::<i64>(),
        b in any::<i64>().prop_filter("nonzero divisor", |v| *v != 0),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        // Exact quotient computed independently in i128, which cannot
        // overflow for i64 operands.
        let exact = BigInt::from(i128::from(a) / i128::from(b));
        let bounds = Bounds::new(bits, s).unwrap();
        let outcome = ops::saturating_div(a, b, bits, s).unwrap();
        assert_clamped_exactly(outcome, exact, &bounds)?;
    }

    #[test]
    fn rem_matches_primitive_truncation(
        a in any::<i64>(),
        b in any::<i64>().prop_filter("nonzero divisor", |v| *v != 0),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        let exact = BigInt::from(i128::from(a) % i128::from(b));
        let bounds = Bounds::new(bits, s).unwrap();
        let outcome = ops::saturating_rem(a, b, bits, s).unwrap();
        assert_clamped_exactly(outcome, exact, &bounds)?;
    }

    #[test]
    fn rem_of_in_range_operands_never_saturates(
        a in any::<i64>(),
        b in any::<i64>(),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        // Narrow both operands into range first; a remainder of valid
        // operands is always smaller in magnitude than the divisor.
        let a = ops::clamp(a, bits, s).unwrap().into_value();
        let b = ops::clamp(b, bits, s).unwrap().into_value();
        prop_assume!(b != BigInt::from(0));
        let outcome = ops::saturating_rem(a, b, bits, s).unwrap();
        prop_assert!(!outcome.saturated());
    }

    #[test]
    fn clamp_is_idempotent(
        value in any::<i128>(),
        bits in 1u32..=63,
        s in signedness(),
    ) {
        let first = ops::clamp(value, bits, s).unwrap();
        let again = ops::clamp(first.value(), bits, s).unwrap();
        prop_assert_eq!(again.value(), first.value());
        prop_assert!(!again.saturated());
    }

    #[test]
    fn unsigned_max_relates_to_signed_max(bits in 1u32..=63) {
        let signed = Bounds::new(bits, Signedness::Signed).unwrap();
        let unsigned = Bounds::new(bits, Signedness::Unsigned).unwrap();
        prop_assert_eq!(unsigned.max(), &(signed.max() * 2 + 1));
    }
}
