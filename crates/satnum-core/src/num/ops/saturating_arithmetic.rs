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

//! Saturating arithmetic between operands of different numeric kinds.
//!
//! The left operand is updated in place and keeps its kind. Both operands are
//! first promoted into a domain where the overflow test itself cannot
//! overflow:
//!
//! - two integers are combined in `i128`;
//! - an integer left operand and a finite float right operand are combined
//!   exactly in `i128`, with the float split into `mantissa * 2^exponent` and
//!   the result truncated toward zero;
//! - everything else runs in `f64`, tested against the left kind's limits in
//!   that domain (its safe-cast bounds for an integer left operand).
//!
//! A saturated result is always the left kind's own minimum or maximum, never
//! a promotion-domain bound narrowed back.

use crate::num::{
    float_bits::FloatBits, kind::NumericClass, primitive::Numeric, range::range_union,
};
use num_traits::Signed;

/// The left operand's limits and classification, expressed in domain `D`.
#[derive(Debug, Clone, Copy)]
struct Bounds<D> {
    min: D,
    max: D,
    class: NumericClass,
}

/// What a kernel decided, before it is written back in the left kind.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Saturated<D> {
    Min,
    Max,
    Value(D),
}

impl<D> Saturated<D> {
    /// Writes the outcome in the left kind. Only `Value` is narrowed.
    #[inline(always)]
    fn resolve<L, F>(self, narrow: F) -> L
    where
        L: Numeric,
        F: FnOnce(D) -> L,
    {
        match self {
            Saturated::Min => L::min_value(),
            Saturated::Max => L::max_value(),
            Saturated::Value(v) => narrow(v),
        }
    }
}

/// A finite float as `mantissa * 2^exponent`, `|mantissa| < 2^53`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dyadic {
    mantissa: i128,
    exponent: i32,
}

/// A float with a larger exponent is beyond every kind; up to it, the whole
/// part still fits an `i128`.
const MAX_WHOLE_SHIFT: i32 = 70;

impl Dyadic {
    /// Returns `None` for infinities and NaN.
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let parts = value.to_parts();
        let bias = (f64::EXPONENT_MASK >> 1) as i32 + f64::MANTISSA_BITS as i32;
        let (magnitude, exponent) = if parts.exponent == 0 {
            (parts.mantissa, 1 - bias)
        } else {
            (
                parts.mantissa | (1u64 << f64::MANTISSA_BITS),
                parts.exponent as i32 - bias,
            )
        };
        let magnitude = magnitude as i128;
        Some(Dyadic {
            mantissa: if parts.negative { -magnitude } else { magnitude },
            exponent,
        })
    }

    #[inline]
    fn negate(self) -> Self {
        Dyadic {
            mantissa: -self.mantissa,
            ..self
        }
    }

    /// Splits into the whole part truncated toward zero and the sign of the
    /// fractional remainder. `None` if the whole part is beyond every kind.
    fn split(self) -> Option<(i128, i128)> {
        if self.exponent >= 0 {
            if self.mantissa != 0 && self.exponent > MAX_WHOLE_SHIFT {
                return None;
            }
            return Some((self.mantissa << self.exponent, 0));
        }
        let shift = self.exponent.unsigned_abs();
        let whole = scale_down(self.mantissa, shift);
        let rest = self.mantissa - scale_up(whole, shift).unwrap_or(0);
        Some((whole, rest.signum()))
    }
}

/// `2^shift`, if it fits in an `i128`.
#[inline(always)]
fn scale_factor(shift: u32) -> Option<i128> {
    (shift < 127).then(|| 1i128 << shift)
}

/// `value * 2^shift`, or `None` when it overflows `i128`.
#[inline(always)]
fn scale_up(value: i128, shift: u32) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    scale_factor(shift).and_then(|f| value.checked_mul(f))
}

/// `value / 2^shift`, truncated toward zero.
#[inline(always)]
fn scale_down(value: i128, shift: u32) -> i128 {
    scale_factor(shift).map_or(0, |f| value / f)
}

/// Truncates `whole + f` toward zero, where `0 < |f| < 1` has sign `fraction`.
#[inline(always)]
fn truncate(whole: i128, fraction: i128) -> i128 {
    if whole > 0 && fraction < 0 {
        whole - 1
    } else if whole < 0 && fraction > 0 {
        whole + 1
    } else {
        whole
    }
}

#[inline(always)]
fn saturate_toward(sign: i128) -> Saturated<i128> {
    if sign > 0 {
        Saturated::Max
    } else {
        Saturated::Min
    }
}

/// One saturating operation, written once for every promotion domain.
trait Kernel: Copy {
    fn run<D>(self, left: D, right: D, bounds: Bounds<D>) -> Saturated<D>
    where
        D: Signed + Copy + PartialOrd;

    /// Integer `left`, finite float `right`, computed without rounding.
    /// `None` hands the operation to the `f64` domain.
    fn run_exact(self, left: i128, right: Dyadic, bounds: Bounds<i128>)
    -> Option<Saturated<i128>>;
}

#[derive(Debug, Clone, Copy)]
struct AddKernel;

impl Kernel for AddKernel {
    #[inline(always)]
    fn run<D>(self, left: D, right: D, b: Bounds<D>) -> Saturated<D>
    where
        D: Signed + Copy + PartialOrd,
    {
        if right > D::zero() && left > b.max - right {
            Saturated::Max
        } else if right < D::zero() && left < b.min - right {
            Saturated::Min
        } else {
            Saturated::Value(left + right)
        }
    }

    fn run_exact(self, left: i128, right: Dyadic, b: Bounds<i128>) -> Option<Saturated<i128>> {
        Some(match right.split() {
            Some((whole, fraction)) => clamp(truncate(left + whole, fraction), b.min, b.max),
            None => saturate_toward(right.mantissa),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct SubKernel;

impl Kernel for SubKernel {
    #[inline(always)]
    fn run<D>(self, left: D, right: D, b: Bounds<D>) -> Saturated<D>
    where
        D: Signed + Copy + PartialOrd,
    {
        if right < D::zero() && left > b.max + right {
            Saturated::Max
        } else if right > D::zero() && left < b.min + right {
            Saturated::Min
        } else {
            Saturated::Value(left - right)
        }
    }

    fn run_exact(self, left: i128, right: Dyadic, b: Bounds<i128>) -> Option<Saturated<i128>> {
        AddKernel.run_exact(left, right.negate(), b)
    }
}

#[derive(Debug, Clone, Copy)]
struct MulKernel;

impl Kernel for MulKernel {
    #[inline(always)]
    fn run<D>(self, left: D, right: D, b: Bounds<D>) -> Saturated<D>
    where
        D: Signed + Copy + PartialOrd,
    {
        let zero = D::zero();

        // -MIN has no representation in a two's-complement kind
        if b.class == NumericClass::SignedInteger && left == b.min && right == -D::one() {
            return Saturated::Max;
        }

        if left > zero && right > zero {
            if left > b.max / right {
                return Saturated::Max;
            }
        } else if left < zero && right < zero {
            if -left > b.max / -right {
                return Saturated::Max;
            }
        } else if left < zero && right > zero {
            if left < b.min / right {
                return Saturated::Min;
            }
        } else if left > zero && right < zero && -left < b.min / -right {
            return Saturated::Min;
        }

        Saturated::Value(left * right)
    }

    fn run_exact(self, left: i128, right: Dyadic, b: Bounds<i128>) -> Option<Saturated<i128>> {
        // |left| < 2^64 and |mantissa| < 2^53
        let product = left * right.mantissa;
        let scaled = if right.exponent >= 0 {
            match scale_up(product, right.exponent.unsigned_abs()) {
                Some(v) => v,
                None => return Some(saturate_toward(product)),
            }
        } else {
            scale_down(product, right.exponent.unsigned_abs())
        };
        Some(clamp(scaled, b.min, b.max))
    }
}

#[derive(Debug, Clone, Copy)]
struct DivKernel;

impl Kernel for DivKernel {
    #[inline(always)]
    fn run<D>(self, left: D, right: D, b: Bounds<D>) -> Saturated<D>
    where
        D: Signed + Copy + PartialOrd,
    {
        match b.class {
            NumericClass::SignedInteger if left == b.min && right == -D::one() => Saturated::Max,
            NumericClass::UnsignedInteger if right < D::zero() => Saturated::Min,
            NumericClass::FloatingPoint => Saturated::Value(left / right),
            // only a fractional float divisor can push an integer quotient out of range
            _ => clamp(left / right, b.min, b.max),
        }
    }

    fn run_exact(self, left: i128, right: Dyadic, b: Bounds<i128>) -> Option<Saturated<i128>> {
        if right.mantissa == 0 {
            // signed zero and NaN quotients follow IEEE754
            return None;
        }
        if b.class == NumericClass::UnsignedInteger && right.mantissa < 0 {
            return Some(Saturated::Min);
        }
        let shift = right.exponent.unsigned_abs();
        let quotient = if right.exponent >= 0 {
            match scale_up(right.mantissa, shift) {
                Some(divisor) => left / divisor,
                None => 0,
            }
        } else {
            // left * 2^shift / mantissa
            match scale_up(left, shift) {
                Some(numerator) => numerator / right.mantissa,
                None => return Some(saturate_toward(left.signum() * right.mantissa.signum())),
            }
        };
        Some(clamp(quotient, b.min, b.max))
    }
}

#[inline(always)]
fn clamp<D>(value: D, min: D, max: D) -> Saturated<D>
where
    D: PartialOrd,
{
    if value > max {
        Saturated::Max
    } else if value < min {
        Saturated::Min
    } else {
        Saturated::Value(value)
    }
}

#[inline]
fn apply<L, R, K>(left: &mut L, right: R, kernel: K)
where
    L: Numeric,
    R: Numeric,
    K: Kernel,
{
    let class = L::KIND.class();
    let int_bounds = Bounds {
        min: L::min_value().widen_int(),
        max: L::max_value().widen_int(),
        class,
    };

    if L::KIND.is_integer() {
        if R::KIND.is_integer() {
            *left = kernel
                .run(left.widen_int(), right.widen_int(), int_bounds)
                .resolve(L::narrow_int);
            return;
        }
        let exact = Dyadic::from_f64(right.widen_float())
            .and_then(|r| kernel.run_exact(left.widen_int(), r, int_bounds));
        if let Some(outcome) = exact {
            *left = outcome.resolve(L::narrow_int);
            return;
        }
    }

    let (min, max) = range_union::<f64, L>();
    let bounds = Bounds { min, max, class };
    *left = kernel
        .run(left.widen_float(), right.widen_float(), bounds)
        .resolve(L::narrow_float);
}


/// Adds `right` to `left` in place, saturating at `left`'s limits.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::saturate_add;
/// let mut a: i8 = 120;
/// saturate_add(&mut a, 20i8);
/// assert_eq!(a, 127);
///
/// let mut b: u8 = 10;
/// saturate_add(&mut b, -50i64);
/// assert_eq!(b, 0);
/// ```
#[inline]
pub fn saturate_add<L, R>(left: &mut L, right: R)
where
    L: Numeric,
    R: Numeric,
{
    apply(left, right, AddKernel);
}

/// Subtracts `right` from `left` in place, saturating at `left`'s limits.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::saturate_subtract;
/// let mut a: u16 = 5;
/// saturate_subtract(&mut a, 10u64);
/// assert_eq!(a, 0);
///
/// let mut b: i32 = i32::MAX - 1;
/// saturate_subtract(&mut b, -3i8);
/// assert_eq!(b, i32::MAX);
/// ```
#[inline]
pub fn saturate_subtract<L, R>(left: &mut L, right: R)
where
    L: Numeric,
    R: Numeric,
{
    apply(left, right, SubKernel);
}

/// Multiplies `left` by `right` in place, saturating at `left`'s limits.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::saturate_multiply;
/// let mut a: i8 = -128;
/// saturate_multiply(&mut a, -1i8);
/// assert_eq!(a, 127);
///
/// let mut b: u32 = 3;
/// saturate_multiply(&mut b, 2.5f64);
/// assert_eq!(b, 7);
/// ```
#[inline]
pub fn saturate_multiply<L, R>(left: &mut L, right: R)
where
    L: Numeric,
    R: Numeric,
{
    apply(left, right, MulKernel);
}

/// Divides `left` by `right` in place, saturating at `left`'s limits.
///
/// An unsigned `left` divided by a negative `right` saturates to zero.
///
/// # Panics
///
/// The divisor is not checked. When both operands are integers a zero
/// `right` panics exactly like native integer division. With a float operand
/// nothing panics: an integer `left` saturates, a float `left` takes the
/// IEEE754 result.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::saturate_divide;
/// let mut a: i8 = -128;
/// saturate_divide(&mut a, -1i8);
/// assert_eq!(a, 127);
///
/// let mut b: u8 = 50;
/// saturate_divide(&mut b, -1i8);
/// assert_eq!(b, 0);
/// ```
#[inline]
pub fn saturate_divide<L, R>(left: &mut L, right: R)
where
    L: Numeric,
    R: Numeric,
{
    apply(left, right, DivKernel);
}

/// In-place saturating arithmetic with a right operand of any numeric kind.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::SaturatingMixedOps;
/// let mut total: u8 = 250;
/// total.saturating_add_mixed(10i32);
/// assert_eq!(total, 255);
///
/// total.saturating_sub_mixed(300u16);
/// assert_eq!(total, 0);
/// ```
pub trait SaturatingMixedOps: Numeric {
    /// See [`saturate_add`].
    #[inline]
    fn saturating_add_mixed<R>(&mut self, rhs: R)
    where
        R: Numeric,
    {
        saturate_add(self, rhs);
    }

    /// See [`saturate_subtract`].
    #[inline]
    fn saturating_sub_mixed<R>(&mut self, rhs: R)
    where
        R: Numeric,
    {
        saturate_subtract(self, rhs);
    }

    /// See [`saturate_multiply`].
    #[inline]
    fn saturating_mul_mixed<R>(&mut self, rhs: R)
    where
        R: Numeric,
    {
        saturate_multiply(self, rhs);
    }

    /// See [`saturate_divide`].
    #[inline]
    fn saturating_div_mixed<R>(&mut self, rhs: R)
    where
        R: Numeric,
    {
        saturate_divide(self, rhs);
    }
}

impl<T> SaturatingMixedOps for T where T: Numeric {}
