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

//! Result carrier for clamping operations.

use num_bigint::BigInt;

/// The result of a clamping operation: the narrowed value together with a
/// flag reporting whether clamping occurred.
///
/// Producers guarantee the value lies within the bounds of the requested
/// width and signedness. `saturated` is `true` exactly when the true
/// mathematical result fell outside those bounds and was replaced by the
/// nearer bound. Each `Outcome` is a fresh, independently owned value with
/// no relation to prior calls.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::{Bounds, Signedness};
/// # use num_bigint::BigInt;
///
/// let bounds = Bounds::new(8, Signedness::Signed).unwrap();
/// let outcome = bounds.clamp(BigInt::from(300));
/// assert_eq!(outcome.value(), &BigInt::from(127));
/// assert!(outcome.saturated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    value: BigInt,
    saturated: bool,
}

impl Outcome {
    /// Creates an `Outcome` from a value and its saturation flag.
    #[inline]
    pub fn new(value: BigInt, saturated: bool) -> Self {
        Self { value, saturated }
    }

    /// Returns the clamped value.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Returns `true` if the exact result was out of range and clamped.
    #[inline]
    pub fn saturated(&self) -> bool {
        self.saturated
    }

    /// Consumes the outcome and returns the clamped value.
    #[inline]
    pub fn into_value(self) -> BigInt {
        self.value
    }

    /// Consumes the outcome and returns `(value, saturated)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, bool) {
        (self.value, self.saturated)
    }
}
