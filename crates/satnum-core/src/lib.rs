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

//! # satnum Core
//!
//! Saturating conversion and arithmetic between heterogeneous numeric kinds:
//! signed and unsigned integers from 8 to 64 bits and IEEE754 `f32`/`f64`.
//! Values move between any two kinds, and operands of different kinds combine,
//! without wrapping, without out-of-range float-to-int conversions, and
//! without losing more precision than the target kind forces.
//!
//! ## Modules
//!
//! - `num`: Kind descriptors (`NumericKind`, `Numeric`), the float safe-cast
//!   calculator, the cached range union, saturating casts and arithmetic, and
//!   the runtime-tagged `Scalar`.
//!
//! ## Example
//!
//! ```rust
//! use satnum_core::num::ops::{
//!     saturating_arithmetic::saturate_add, saturating_cast::saturate_cast,
//! };
//!
//! assert_eq!(saturate_cast::<u8, i32>(-40), 0);
//!
//! let mut acc: i8 = 100;
//! saturate_add(&mut acc, 1_000u32);
//! assert_eq!(acc, i8::MAX);
//! ```
//!
//! ## Logging
//!
//! The first computation of every cached fact emits a `tracing` event at
//! `TRACE` level. No subscriber is installed by this crate.

pub mod num;
