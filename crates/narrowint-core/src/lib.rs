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

//! # Narrowint Core
//!
//! Saturating integer arithmetic over arbitrary bit widths (1 to 63 bits,
//! signed or unsigned). Every operation computes its exact mathematical
//! result at unbounded precision first and only then narrows to the
//! requested width, clamping out-of-range results to the nearer bound and
//! reporting whether clamping occurred.
//!
//! ## Modules
//!
//! - `bounds`: Width validation and the inclusive representable range
//!   (`Bounds`) for a given bit width and `Signedness`.
//! - `outcome`: The `Outcome` value pair (clamped result, saturation flag)
//!   produced by every clamping operation.
//! - `operand`: The `IntoOperand` conversion trait admitting anything that
//!   converts losslessly into an arbitrary-precision integer, with
//!   `ConversionError` for inputs that would lose precision.
//! - `ops`: The saturating operations themselves (`saturating_add`,
//!   `saturating_sub`, `saturating_mul`, `saturating_div`, `saturating_rem`)
//!   and the free-function `clamp`, all returning `Result<Outcome, _>`.
//!
//! ## Design
//!
//! Saturation is never an error. Exceeding the representable range is an
//! expected outcome reported through the `saturated` flag, while invalid
//! widths, zero divisors, and lossy operand conversions surface as
//! distinguishable errors before any result is produced. All types are plain
//! immutable values with no shared state, so every call is independent and
//! safe to issue from any number of threads.

pub mod bounds;
pub mod operand;
pub mod ops;
pub mod outcome;
