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

//! # Saturating Operations
//!
//! The saturating arithmetic surface: addition, subtraction, multiplication,
//! division, and remainder over emulated fixed-width integers, plus the
//! free-function `clamp`. Every operation computes its exact result at
//! unbounded precision and narrows only at the final clamp, so no internal
//! overflow is possible.
//!
//! ## Error ordering
//!
//! Width validation runs before any arithmetic is attempted. For division
//! and remainder it also runs before the zero-divisor check, so an invalid
//! width combined with a zero divisor reports the width error.
//!
//! ## Division semantics
//!
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend, matching primitive `/` and `%`. Truncation toward zero is what
//! makes division saturation reachable at all: the most negative signed
//! value divided by -1 lands one past the maximum and clamps to it.

use crate::{
    bounds::{Bounds, Signedness, WidthError},
    operand::{ConversionError, IntoOperand},
    outcome::Outcome,
};
use num_traits::Zero;
use std::fmt::{self, Display};

/// The error type for saturating operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// The requested bit width is unsupported.
    Width(WidthError),
    /// An operand could not be converted losslessly.
    Conversion(ConversionError),
    /// The divisor of a division was zero.
    DivisionByZero,
    /// The divisor of a remainder operation was zero.
    RemainderByZero,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(e) => write!(f, "Invalid bit width: {}", e),
            Self::Conversion(e) => write!(f, "Conversion error: {}", e),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::RemainderByZero => write!(f, "integer remainder by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

impl From<WidthError> for ArithmeticError {
    fn from(e: WidthError) -> Self {
        Self::Width(e)
    }
}

impl From<ConversionError> for ArithmeticError {
    fn from(e: ConversionError) -> Self {
        Self::Conversion(e)
    }
}

/// Clamps `value` into the representable range of `bits` under `signedness`.
///
/// # Errors
///
/// Propagates the width error for unsupported widths and the conversion
/// error for lossy operands.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::clamp;
///
/// let kept = clamp(100, 8, Signedness::Signed).unwrap();
/// assert_eq!(kept.value().to_string(), "100");
/// assert!(!kept.saturated());
///
/// let clamped = clamp(-1, 8, Signedness::Unsigned).unwrap();
/// assert_eq!(clamped.value().to_string(), "0");
/// assert!(clamped.saturated());
/// ```
pub fn clamp<V>(value: V, bits: u32, signedness: Signedness) -> Result<Outcome, ArithmeticError>
where
    V: IntoOperand,
{
    let bounds = Bounds::new(bits, signedness)?;
    Ok(bounds.clamp(value.into_operand()?))
}

/// Adds `a` and `b` with saturating semantics.
///
/// The sum is exact; the `saturated` flag on the outcome is `true` exactly
/// when that sum lies outside the representable range.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::saturating_add;
///
/// let sum = saturating_add(10, 20, 8, Signedness::Signed).unwrap();
/// assert_eq!(sum.value().to_string(), "30");
/// assert!(!sum.saturated());
///
/// let clamped = saturating_add(127, 1, 8, Signedness::Signed).unwrap();
/// assert_eq!(clamped.value().to_string(), "127");
/// assert!(clamped.saturated());
/// ```
pub fn saturating_add<A, B>(
    a: A,
    b: B,
    bits: u32,
    signedness: Signedness,
) -> Result<Outcome, ArithmeticError>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let total = a.into_operand()? + b.into_operand()?;
    let bounds = Bounds::new(bits, signedness)?;
    Ok(bounds.clamp(total))
}

/// Subtracts `b` from `a` with saturating semantics.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::saturating_sub;
///
/// let clamped = saturating_sub(0, 1, 8, Signedness::Unsigned).unwrap();
/// assert_eq!(clamped.value().to_string(), "0");
/// assert!(clamped.saturated());
/// ```
pub fn saturating_sub<A, B>(
    a: A,
    b: B,
    bits: u32,
    signedness: Signedness,
) -> Result<Outcome, ArithmeticError>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let total = a.into_operand()? - b.into_operand()?;
    let bounds = Bounds::new(bits, signedness)?;
    Ok(bounds.clamp(total))
}

/// Multiplies `a` and `b` with saturating semantics.
///
/// The product is formed at full precision before narrowing, so operands
/// near the range limits clamp correctly instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::saturating_mul;
///
/// let clamped = saturating_mul(100, 2, 8, Signedness::Signed).unwrap();
/// assert_eq!(clamped.value().to_string(), "127");
/// assert!(clamped.saturated());
/// ```
pub fn saturating_mul<A, B>(
    a: A,
    b: B,
    bits: u32,
    signedness: Signedness,
) -> Result<Outcome, ArithmeticError>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let total = a.into_operand()? * b.into_operand()?;
    let bounds = Bounds::new(bits, signedness)?;
    Ok(bounds.clamp(total))
}

/// Divides `a` by `b` with saturating semantics, truncating toward zero.
///
/// The width is validated before the divisor, so an invalid width combined
/// with a zero divisor reports the width error.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::saturating_div;
///
/// let quotient = saturating_div(-7, 2, 8, Signedness::Signed).unwrap();
/// assert_eq!(quotient.value().to_string(), "-3");
/// assert!(!quotient.saturated());
///
/// let clamped = saturating_div(-128, -1, 8, Signedness::Signed).unwrap();
/// assert_eq!(clamped.value().to_string(), "127");
/// assert!(clamped.saturated());
/// ```
pub fn saturating_div<A, B>(
    a: A,
    b: B,
    bits: u32,
    signedness: Signedness,
) -> Result<Outcome, ArithmeticError>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let bounds = Bounds::new(bits, signedness)?;
    let dividend = a.into_operand()?;
    let divisor = b.into_operand()?;
    if divisor.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(bounds.clamp(dividend / divisor))
}

/// Computes the remainder of `a` divided by `b` with saturating semantics.
///
/// The remainder takes the sign of the dividend. A valid remainder is
/// always smaller in magnitude than the divisor, so the final clamp never
/// fires for in-range operands; it is applied anyway to keep every
/// operation on the same path.
///
/// # Errors
///
/// Returns `ArithmeticError::RemainderByZero` if `b` is zero. The width is
/// validated first, as for division.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::bounds::Signedness;
/// # use narrowint_core::ops::saturating_rem;
///
/// let rem = saturating_rem(-7, 2, 8, Signedness::Signed).unwrap();
/// assert_eq!(rem.value().to_string(), "-1");
/// assert!(!rem.saturated());
/// ```
pub fn saturating_rem<A, B>(
    a: A,
    b: B,
    bits: u32,
    signedness: Signedness,
) -> Result<Outcome, ArithmeticError>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let bounds = Bounds::new(bits, signedness)?;
    let dividend = a.into_operand()?;
    let divisor = b.into_operand()?;
    if divisor.is_zero() {
        return Err(ArithmeticError::RemainderByZero);
    }
    Ok(bounds.clamp(dividend % divisor))
}
