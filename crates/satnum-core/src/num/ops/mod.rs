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
//! Conversion and arithmetic across numeric kinds that clamp instead of
//! wrapping, trapping or invoking undefined float-to-int conversions.
//!
//! ## Submodules
//!
//! - `saturating_cast`: `saturate_cast::<Tout, Tin>` and the `SaturateCast`
//!   extension trait, clamping a value to the range shared by both kinds.
//! - `saturating_arithmetic`: in-place `saturate_add`, `saturate_subtract`,
//!   `saturate_multiply` and `saturate_divide` with a right operand of any
//!   kind, plus the `SaturatingMixedOps` extension trait.
//!
//! All operations are total except integer division by zero, which panics
//! like the native operator. Callers holding runtime-tagged values can use
//! `Scalar::checked_saturating_div` to reject zero divisors up front.

pub mod saturating_arithmetic;
pub mod saturating_cast;
