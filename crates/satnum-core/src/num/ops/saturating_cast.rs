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

use crate::num::{primitive::Numeric, range::range_union};

/// Converts `value` into `Tout`, clamping it to the range both kinds can
/// represent.
///
/// The result always lies within both `Tin`'s and `Tout`'s limits and equals
/// `value` exactly whenever both can represent it. A NaN input compares false
/// against both bounds and converts with `as` semantics (`0` for integer
/// outputs).
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_cast::saturate_cast;
/// assert_eq!(saturate_cast::<u8, i32>(-7), 0);
/// assert_eq!(saturate_cast::<i8, u64>(1_000), 127);
/// assert_eq!(saturate_cast::<i32, f32>(3.0e10), 2_147_483_520);
/// assert_eq!(saturate_cast::<f32, f64>(1.0e300), f32::MAX);
/// assert_eq!(saturate_cast::<i16, i16>(-5), -5);
/// ```
#[inline]
pub fn saturate_cast<Tout, Tin>(value: Tin) -> Tout
where
    Tout: Numeric,
    Tin: Numeric,
{
    let (min, max) = range_union::<Tin, Tout>();
    if value > max {
        max.convert()
    } else if value < min {
        min.convert()
    } else {
        value.convert()
    }
}

/// Saturating conversion by value.
///
/// Method form of [`saturate_cast`], usable on any supported primitive.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_cast::SaturateCast;
/// let big: i64 = 70_000;
/// assert_eq!(big.saturate_into::<u16>(), 65_535);
/// assert_eq!((-1i8).saturate_into::<usize>(), 0);
/// ```
pub trait SaturateCast: Numeric {
    /// Converts into `T`, clamping to the range both kinds can represent.
    #[inline]
    fn saturate_into<T>(self) -> T
    where
        T: Numeric,
    {
        saturate_cast::<T, Self>(self)
    }
}

impl<T> SaturateCast for T where T: Numeric {}
