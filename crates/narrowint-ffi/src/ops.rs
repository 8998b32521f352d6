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

use narrowint_core::bounds::{Bounds, Signedness};
use narrowint_core::ops;
use narrowint_core::outcome::Outcome;
use num_traits::ToPrimitive;

/// Result of a saturating operation as seen from C: the clamped value and
/// whether saturation occurred.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrowOutcome {
    /// The clamped result.
    pub value: i64,
    /// Whether the exact result was out of range and clamped.
    pub saturated: bool,
}

/// Narrows a core outcome to the C result struct. Clamped values always fit
/// an `i64` because widths are capped at 63 bits.
fn to_c(outcome: Outcome) -> NarrowOutcome {
    let (value, saturated) = outcome.into_parts();
    NarrowOutcome {
        value: value.to_i64().expect("clamped value exceeds i64"),
        saturated,
    }
}

/// Computes the representable range for `bits` and writes it through the
/// provided out-pointers. Null out-pointers are skipped.
///
/// # Panics
///
/// Panics (aborting the process) if `bits` is zero or greater than 63.
///
/// # Safety
///
/// This function is unsafe because it writes through raw pointers. The
/// caller must ensure that any non-null pointer is valid for writing an
/// `i64`.
#[no_mangle]
pub unsafe extern "C" fn narrowint_bounds(
    bits: u32,
    is_signed: bool,
    min_out: *mut i64,
    max_out: *mut i64,
) {
    let bounds = match Bounds::new(bits, Signedness::from_flag(is_signed)) {
        Ok(bounds) => bounds,
        Err(e) => panic!("called `narrowint_bounds` with an invalid width: {}", e),
    };
    if !min_out.is_null() {
        *min_out = bounds.min().to_i64().expect("bound exceeds i64");
    }
    if !max_out.is_null() {
        *max_out = bounds.max().to_i64().expect("bound exceeds i64");
    }
}

/// Clamps `value` into the representable range of `bits`.
///
/// # Panics
///
/// Panics (aborting the process) if `bits` is zero or greater than 63.
#[no_mangle]
pub extern "C" fn narrowint_clamp(value: i64, bits: u32, is_signed: bool) -> NarrowOutcome {
    match ops::clamp(value, bits, Signedness::from_flag(is_signed)) {
        Ok(outcome) => to_c(outcome),
        Err(e) => panic!("called `narrowint_clamp` with invalid input: {}", e),
    }
}

macro_rules! ffi_binary_op {
    ($name:ident, $core_fn:ident, $doc:literal) => {
        #[doc = $doc]
        ///
        /// # Panics
        ///
        /// Panics (aborting the process) if `bits` is zero or greater than
        /// 63, or if the operation rejects its operands (zero divisor).
        #[no_mangle]
        pub extern "C" fn $name(a: i64, b: i64, bits: u32, is_signed: bool) -> NarrowOutcome {
            match ops::$core_fn(a, b, bits, Signedness::from_flag(is_signed)) {
                Ok(outcome) => to_c(outcome),
                Err(e) => panic!(concat!("called `", stringify!($name), "` with invalid input: {}"), e),
            }
        }
    };
}

ffi_binary_op!(
    narrowint_saturating_add,
    saturating_add,
    "Saturating addition over the requested width."
);
ffi_binary_op!(
    narrowint_saturating_sub,
    saturating_sub,
    "Saturating subtraction over the requested width."
);
ffi_binary_op!(
    narrowint_saturating_mul,
    saturating_mul,
    "Saturating multiplication over the requested width."
);
ffi_binary_op!(
    narrowint_saturating_div,
    saturating_div,
    "Saturating division over the requested width, truncating toward zero."
);
ffi_binary_op!(
    narrowint_saturating_rem,
    saturating_rem,
    "Saturating remainder over the requested width, sign following the dividend."
);
