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

//! # IEEE754 Bit Fields
//!
//! Explicit access to the sign, exponent and mantissa fields of `f32` and
//! `f64`, operating on the bit pattern obtained from `to_bits` rather than on
//! arithmetic. The main consumer is the safe-cast calculator, which needs the
//! representable float one unit in the last place closer to zero.

use crate::num::primitive::Numeric;

/// A floating-point type whose bit layout is
/// `{sign: 1, exponent: EXPONENT_BITS, mantissa: MANTISSA_BITS}`.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::float_bits::FloatBits;
/// let below = 1.0f32.next_toward_zero();
/// assert!(below < 1.0);
/// assert_eq!(below.to_bits(), 1.0f32.to_bits() - 1);
/// ```
pub trait FloatBits: Numeric {
    /// Width of the biased exponent field.
    const EXPONENT_BITS: u32;
    /// Width of the stored (fraction) mantissa field.
    const MANTISSA_BITS: u32;

    /// Mask for the exponent field after shifting it down.
    const EXPONENT_MASK: u64 = (1u64 << Self::EXPONENT_BITS) - 1;
    /// Mask for the mantissa field.
    const MANTISSA_MASK: u64 = (1u64 << Self::MANTISSA_BITS) - 1;
    /// Position of the sign bit.
    const SIGN_SHIFT: u32 = Self::EXPONENT_BITS + Self::MANTISSA_BITS;

    /// Splits the value into its bit fields.
    #[inline]
    fn to_parts(self) -> FloatParts {
        let bits = self.to_raw();
        FloatParts {
            negative: (bits >> Self::SIGN_SHIFT) & 1 == 1,
            exponent: (bits >> Self::MANTISSA_BITS) & Self::EXPONENT_MASK,
            mantissa: bits & Self::MANTISSA_MASK,
        }
    }

    /// Reassembles a value from its bit fields. Fields wider than their
    /// slot are masked.
    #[inline]
    fn from_parts(parts: FloatParts) -> Self {
        let sign = (parts.negative as u64) << Self::SIGN_SHIFT;
        let exponent = (parts.exponent & Self::EXPONENT_MASK) << Self::MANTISSA_BITS;
        let mantissa = parts.mantissa & Self::MANTISSA_MASK;
        Self::from_raw(sign | exponent | mantissa)
    }

    /// Returns the adjacent representable value with smaller magnitude.
    ///
    /// Signed zeros and NaN are returned unchanged. An infinity steps to the
    /// largest finite value of the same sign.
    fn next_toward_zero(self) -> Self {
        let mut parts = self.to_parts();

        if parts.exponent == Self::EXPONENT_MASK && parts.mantissa != 0 {
            return self;
        }
        if parts.exponent == 0 && parts.mantissa == 0 {
            return self;
        }

        if parts.mantissa == 0 {
            // borrow from the exponent
            parts.exponent -= 1;
            parts.mantissa = Self::MANTISSA_MASK;
        } else {
            parts.mantissa -= 1;
        }
        Self::from_parts(parts)
    }
}

/// The three fields of an IEEE754 binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatParts {
    /// Sign bit.
    pub negative: bool,
    /// Biased exponent.
    pub exponent: u64,
    /// Stored mantissa, without the implicit leading bit.
    pub mantissa: u64,
}

impl FloatBits for f32 {
    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;
}

impl FloatBits for f64 {
    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;
}
