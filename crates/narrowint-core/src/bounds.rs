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

//! # Representable Ranges
//!
//! Width validation and the inclusive representable range for emulated
//! fixed-width integers. A `Bounds` value describes the `[min, max]` range of
//! a given bit width under a chosen `Signedness`, using arbitrary-precision
//! integers so that the range itself never truncates.
//!
//! Widths are restricted to 1 through 63 bits. Everything in-bounds for any
//! supported width therefore fits an `i64`, which keeps foreign bindings on
//! plain machine words while the arithmetic itself stays exact.

use crate::outcome::Outcome;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt::{self, Display};

/// The largest supported bit width.
pub const MAX_BITS: u32 = 63;

/// Whether an emulated integer range includes negative values.
///
/// The default is `Signed`, matching two's-complement hardware ranges.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
///
/// assert_eq!(Signedness::default(), Signedness::Signed);
/// assert!(Signedness::Signed.is_signed());
/// assert!(!Signedness::Unsigned.is_signed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signedness {
    /// Two's-complement range: `-2^(bits-1)` through `2^(bits-1) - 1`.
    #[default]
    Signed,
    /// Non-negative range: `0` through `2^bits - 1`.
    Unsigned,
}

impl Signedness {
    /// Returns `true` for the signed variant.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }

    /// Maps a boolean flag to a `Signedness`, `true` meaning signed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use narrowint_core::bounds::Signedness;
    ///
    /// assert_eq!(Signedness::from_flag(true), Signedness::Signed);
    /// assert_eq!(Signedness::from_flag(false), Signedness::Unsigned);
    /// ```
    #[inline]
    pub const fn from_flag(signed: bool) -> Self {
        if signed {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        }
    }
}

/// The error type for bit width validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    /// The requested width was zero.
    NotPositive,
    /// The requested width exceeds `MAX_BITS`.
    TooWide,
}

impl Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive => write!(f, "bits must be positive"),
            Self::TooWide => write!(f, "bits must be 63 or less"),
        }
    }
}

impl std::error::Error for WidthError {}

/// The inclusive representable range `[min, max]` for a bit width and
/// signedness.
///
/// # Invariants
///
/// `min <= max` and `max >= 0` always hold. For the signed range,
/// `min <= 0 <= max`; for the unsigned range, `min == 0`.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::{Bounds, Signedness};
///
/// let signed = Bounds::new(8, Signedness::Signed).unwrap();
/// assert_eq!(signed.min().to_string(), "-128");
/// assert_eq!(signed.max().to_string(), "127");
///
/// let unsigned = Bounds::new(8, Signedness::Unsigned).unwrap();
/// assert_eq!(unsigned.min().to_string(), "0");
/// assert_eq!(unsigned.max().to_string(), "255");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: BigInt,
    max: BigInt,
}

impl Bounds {
    /// Computes the representable range for `bits` under `signedness`.
    ///
    /// # Errors
    ///
    /// Returns `WidthError::NotPositive` if `bits` is zero and
    /// `WidthError::TooWide` if `bits` exceeds `MAX_BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use narrowint_core::bounds::{Bounds, Signedness, WidthError};
    ///
    /// assert!(Bounds::new(63, Signedness::Signed).is_ok());
    /// assert_eq!(Bounds::new(0, Signedness::Signed), Err(WidthError::NotPositive));
    /// assert_eq!(Bounds::new(64, Signedness::Signed), Err(WidthError::TooWide));
    /// ```
    pub fn new(bits: u32, signedness: Signedness) -> Result<Self, WidthError> {
        if bits == 0 {
            return Err(WidthError::NotPositive);
        }
        if bits > MAX_BITS {
            return Err(WidthError::TooWide);
        }
        let (min, max) = match signedness {
            Signedness::Signed => {
                let half: BigInt = BigInt::one() << (bits - 1);
                (-half.clone(), half - 1)
            }
            Signedness::Unsigned => (BigInt::zero(), (BigInt::one() << bits) - 1),
        };
        Ok(Self { min, max })
    }

    /// Shorthand for `Bounds::new(bits, Signedness::Signed)`.
    #[inline]
    pub fn signed(bits: u32) -> Result<Self, WidthError> {
        Self::new(bits, Signedness::Signed)
    }

    /// Shorthand for `Bounds::new(bits, Signedness::Unsigned)`.
    #[inline]
    pub fn unsigned(bits: u32) -> Result<Self, WidthError> {
        Self::new(bits, Signedness::Unsigned)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> &BigInt {
        &self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(&self) -> &BigInt {
        &self.max
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use narrowint_core::bounds::{Bounds, Signedness};
    /// # use num_bigint::BigInt;
    ///
    /// let bounds = Bounds::new(8, Signedness::Signed).unwrap();
    /// assert!(bounds.contains(&BigInt::from(-128)));
    /// assert!(bounds.contains(&BigInt::from(127)));
    /// assert!(!bounds.contains(&BigInt::from(128)));
    /// ```
    #[inline]
    pub fn contains(&self, value: &BigInt) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    ///
    /// The comparison runs at full precision, so values far outside the
    /// range (for example, the product of two near-max operands) clamp
    /// correctly without any intermediate truncation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use narrowint_core::bounds::{Bounds, Signedness};
    /// # use num_bigint::BigInt;
    ///
    /// let bounds = Bounds::new(8, Signedness::Signed).unwrap();
    ///
    /// let kept = bounds.clamp(BigInt::from(100));
    /// assert_eq!(kept.value().to_string(), "100");
    /// assert!(!kept.saturated());
    ///
    /// let clamped = bounds.clamp(BigInt::from(1000));
    /// assert_eq!(clamped.value().to_string(), "127");
    /// assert!(clamped.saturated());
    /// ```
    pub fn clamp(&self, value: BigInt) -> Outcome {
        if value > self.max {
            Outcome::new(self.max.clone(), true)
        } else if value < self.min {
            Outcome::new(self.min.clone(), true)
        } else {
            Outcome::new(value, false)
        }
    }

    /// Consumes the bounds and returns `(min, max)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.min, self.max)
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
