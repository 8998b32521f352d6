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

//! # Operand Conversion
//!
//! The `IntoOperand` trait admits anything that converts losslessly into an
//! arbitrary-precision integer: the integer primitives, `BigInt` itself,
//! digit strings with an optional sign, and floating-point values that carry
//! no fractional part. Inputs that would lose precision are rejected with a
//! `ConversionError`, which is distinct from the arithmetic errors so a bad
//! input is never mistaken for a saturating result.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::fmt::{self, Display};

/// Details about a digit string that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDigitsError {
    /// The string token that failed to parse.
    pub token: String,
}

impl Display for ParseDigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not parse token '{}' as an integer", self.token)
    }
}

impl std::error::Error for ParseDigitsError {}

/// The error type for lossy or malformed operand conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A floating-point input was NaN or infinite.
    NotFinite(f64),
    /// A floating-point input carried a non-zero fractional part.
    Fractional(f64),
    /// A digit string could not be parsed.
    Parse(ParseDigitsError),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite(value) => {
                write!(f, "Cannot convert non-finite value {} to an integer", value)
            }
            Self::Fractional(value) => {
                write!(f, "Cannot convert {} to an integer without losing its fractional part", value)
            }
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<ParseDigitsError> for ConversionError {
    fn from(e: ParseDigitsError) -> Self {
        Self::Parse(e)
    }
}

/// Lossless conversion into an arbitrary-precision operand.
///
/// # Examples
///
/// ```rust
/// # use narrowint_core::operand::IntoOperand;
///
/// assert_eq!(42i64.into_operand().unwrap().to_string(), "42");
/// assert_eq!("-9000000000000000000".into_operand().unwrap().to_string(), "-9000000000000000000");
/// assert_eq!(4.0f64.into_operand().unwrap().to_string(), "4");
/// assert!(4.5f64.into_operand().is_err());
/// assert!(f64::NAN.into_operand().is_err());
/// ```
pub trait IntoOperand {
    /// Converts `self` into a `BigInt`, rejecting any lossy conversion.
    fn into_operand(self) -> Result<BigInt, ConversionError>;
}

impl IntoOperand for BigInt {
    #[inline]
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        Ok(self)
    }
}

impl IntoOperand for &BigInt {
    #[inline]
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        Ok(self.clone())
    }
}

macro_rules! operand_impl_int {
    ($t:ty) => {
        impl IntoOperand for $t {
            #[inline]
            fn into_operand(self) -> Result<BigInt, ConversionError> {
                Ok(BigInt::from(self))
            }
        }
    };
}

operand_impl_int!(u8);
operand_impl_int!(u16);
operand_impl_int!(u32);
operand_impl_int!(u64);
operand_impl_int!(u128);
operand_impl_int!(usize);

operand_impl_int!(i8);
operand_impl_int!(i16);
operand_impl_int!(i32);
operand_impl_int!(i64);
operand_impl_int!(i128);
operand_impl_int!(isize);

impl IntoOperand for &str {
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        self.parse::<BigInt>().map_err(|_| {
            ConversionError::Parse(ParseDigitsError {
                token: self.to_string(),
            })
        })
    }
}

impl IntoOperand for String {
    #[inline]
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        self.as_str().into_operand()
    }
}

impl IntoOperand for f64 {
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        if !self.is_finite() {
            return Err(ConversionError::NotFinite(self));
        }
        if self.fract() != 0.0 {
            return Err(ConversionError::Fractional(self));
        }
        // Exact for any finite float with a zero fractional part.
        BigInt::from_f64(self).ok_or(ConversionError::NotFinite(self))
    }
}

impl IntoOperand for f32 {
    #[inline]
    fn into_operand(self) -> Result<BigInt, ConversionError> {
        f64::from(self).into_operand()
    }
}
