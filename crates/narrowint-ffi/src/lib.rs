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

//! # Narrowint FFI
//!
//! **C-Compatible Bindings for the Narrowint Saturating Arithmetic Core.**
//!
//! This crate bridges the Rust core to C, C++, Python, C#, and similar hosts.
//! Operands and results travel as plain `i64` values: every in-range value of
//! every supported width (1 to 63 bits) fits an `i64`, while the arithmetic
//! itself still runs at unbounded precision inside the core before clamping.
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Values**: No handles and no allocation. Results are returned
//!     by value as a `#[repr(C)]` struct of the clamped value and the
//!     saturation flag.
//! 2.  **Fail-Fast Safety**: To protect the integrity of the host
//!     application, invalid inputs (unsupported bit width, zero divisor)
//!     abort the process with a descriptive panic message rather than
//!     returning indeterminate values.

pub mod ops;
