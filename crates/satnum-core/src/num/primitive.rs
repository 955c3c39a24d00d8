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

//! # Primitive Numeric Types
//!
//! The `Numeric` trait ties each supported Rust primitive to its
//! [`NumericKind`] and exposes the handful of conversions the saturating core
//! is built on. All of them are plain `as` casts; the core only invokes them
//! where the value is known to be representable in the target, so none of
//! them ever wraps in practice.
//!
//! The trait is sealed: the set of kinds is closed, and an unsupported type
//! is rejected by the compiler rather than at runtime.

use crate::num::{kind::NumericKind, scalar::Scalar};
use num_traits::{Bounded, One, Zero};
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer or floating-point type with a known [`NumericKind`].
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::{kind::NumericKind, primitive::Numeric};
/// assert_eq!(<u16 as Numeric>::KIND, NumericKind::U16);
/// assert_eq!(300i32.convert::<f64>(), 300.0);
/// ```
pub trait Numeric:
    Copy + PartialOrd + Bounded + Zero + One + Debug + Display + Send + Sync + 'static + sealed::Sealed
{
    /// The runtime tag of this type.
    const KIND: NumericKind;

    /// Returns a lossless 64-bit pattern of the value (IEEE754 bits for
    /// floats, sign-extended two's complement for signed integers).
    fn to_raw(self) -> u64;

    /// Inverse of [`Numeric::to_raw`].
    fn from_raw(raw: u64) -> Self;

    /// Widens into the integer domain. Exact for integers; floats truncate
    /// toward zero and saturate.
    fn widen_int(self) -> i128;

    /// Widens into the floating-point domain, rounding to nearest.
    fn widen_float(self) -> f64;

    /// Narrows from the integer domain. The caller guarantees that `value`
    /// is representable, integers would otherwise wrap.
    fn narrow_int(value: i128) -> Self;

    /// Narrows from the floating-point domain with Rust `as` semantics.
    fn narrow_float(value: f64) -> Self;

    /// Wraps the value into its runtime-tagged form.
    fn into_scalar(self) -> Scalar;

    /// Converts into another numeric type through whichever wide domain
    /// holds `self` exactly.
    ///
    /// This is an unchecked `as`-style conversion; use
    /// [`crate::num::ops::saturating_cast::saturate_cast`] when the value
    /// may be out of range.
    #[inline]
    fn convert<U>(self) -> U
    where
        U: Numeric,
    {
        if Self::KIND.is_floating() {
            U::narrow_float(self.widen_float())
        } else {
            U::narrow_int(self.widen_int())
        }
    }
}

macro_rules! impl_numeric_int_for {
    ($t:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                raw as $t
            }

            #[inline(always)]
            fn widen_int(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn widen_float(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn narrow_int(value: i128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn narrow_float(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn into_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }
        }
    };
}

macro_rules! impl_numeric_float_for {
    ($t:ty, $kind:ident, $bits:ty) => {
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self.to_bits() as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                <$t>::from_bits(raw as $bits)
            }

            #[inline(always)]
            fn widen_int(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn widen_float(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn narrow_int(value: i128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn narrow_float(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn into_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }
        }
    };
}

impl_numeric_int_for!(i8, I8);
impl_numeric_int_for!(i16, I16);
impl_numeric_int_for!(i32, I32);
impl_numeric_int_for!(i64, I64);
impl_numeric_int_for!(isize, Isize);

impl_numeric_int_for!(u8, U8);
impl_numeric_int_for!(u16, U16);
impl_numeric_int_for!(u32, U32);
impl_numeric_int_for!(u64, U64);
impl_numeric_int_for!(usize, Usize);

impl_numeric_float_for!(f32, F32, u32);
impl_numeric_float_for!(f64, F64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_round_trip<T: Numeric>(v: T) -> T {
        T::from_raw(v.to_raw())
    }

    #[test]
    fn test_kind_constants() {
        assert_eq!(<i8 as Numeric>::KIND, NumericKind::I8);
        assert_eq!(<usize as Numeric>::KIND, NumericKind::Usize);
        assert_eq!(<f64 as Numeric>::KIND, NumericKind::F64);
    }

    #[test]
    fn test_raw_round_trip_preserves_bits() {
        assert_eq!(raw_round_trip(i8::MIN), i8::MIN);
        assert_eq!(raw_round_trip(-1i64), -1i64);
        assert_eq!(raw_round_trip(u64::MAX), u64::MAX);
        assert_eq!(raw_round_trip(-0.0f32).to_bits(), (-0.0f32).to_bits());
        assert_eq!(raw_round_trip(f64::MIN_POSITIVE), f64::MIN_POSITIVE);
        assert!(raw_round_trip(f32::NAN).is_nan());
    }

    #[test]
    fn test_widen_is_exact_for_integers() {
        assert_eq!(i64::MIN.widen_int(), -(1i128 << 63));
        assert_eq!(u64::MAX.widen_int(), (1i128 << 64) - 1);
    }

    #[test]
    fn test_float_widen_int_truncates() {
        assert_eq!(2.9f32.widen_int(), 2);
        assert_eq!((-2.9f64).widen_int(), -2);
    }

    #[test]
    fn test_convert() {
        assert_eq!((-5i8).convert::<i64>(), -5);
        assert_eq!(200u8.convert::<f32>(), 200.0);
        assert_eq!(7.75f64.convert::<u16>(), 7);
        assert_eq!(0.5f32.convert::<f64>(), 0.5);
        assert_eq!(u32::MAX.convert::<u64>(), u32::MAX as u64);
    }

    #[test]
    fn test_into_scalar() {
        assert_eq!(42u16.into_scalar(), Scalar::U16(42));
        assert_eq!((-1isize).into_scalar(), Scalar::Isize(-1));
    }
}
