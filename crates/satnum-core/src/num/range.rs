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

//! # Range Union
//!
//! The range of values two numeric kinds can both represent, expressed in
//! the first kind. Casting and arithmetic clamp against this range, so it has
//! to be exact: every value inside it must convert into either kind without
//! leaving that kind's limits.
//!
//! | `T`      | `U`      | min                      | max                                       |
//! |----------|----------|--------------------------|-------------------------------------------|
//! | signed   | signed   | `max(T::MIN, U::MIN)`    | `min(T::MAX, U::MAX)`                     |
//! | unsigned | unsigned | `max(T::MIN, U::MIN)`    | `min(T::MAX, U::MAX)`                     |
//! | signed   | unsigned | `0`                      | `T::MAX` if `width(T) <= width(U)` else `U::MAX` |
//! | unsigned | signed   | `0`                      | `U::MAX` if `width(T) >= width(U)` else `T::MAX` |
//! | float    | float    | limits of the narrower   | limits of the narrower                    |
//! | float    | integer  | safe cast bounds of `U` at `T`'s width | |
//! | integer  | float    | safe cast bounds of `T` at `U`'s width, truncated | |

use crate::num::{
    cache::{OnceTable, PAIR_SLOTS, pair_slot},
    kind::NumericClass,
    primitive::Numeric,
    safe_cast::{Bound, safe_cast_bound},
};
use std::cmp::{max, min};
use tracing::trace;

static RANGE_UNION_CACHE: OnceTable<(u64, u64), PAIR_SLOTS> = OnceTable::new();

/// Returns, in `T`'s representation, the tightest `(min, max)` pair that both
/// `T` and `U` can represent.
///
/// The result is computed once per `(T, U)` pair and cached.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::range::range_union;
/// assert_eq!(range_union::<i32, i8>(), (-128, 127));
/// assert_eq!(range_union::<u32, i32>(), (0, 2_147_483_647));
/// assert_eq!(range_union::<i64, u32>(), (0, 4_294_967_295));
/// assert_eq!(range_union::<f32, i32>(), (-2_147_483_648.0, 2_147_483_520.0));
/// ```
pub fn range_union<T, U>() -> (T, T)
where
    T: Numeric,
    U: Numeric,
{
    let (min, max) = RANGE_UNION_CACHE.get_or_init(pair_slot(T::KIND, U::KIND), || {
        let (min, max) = compute_range_union::<T, U>();
        trace!(
            lhs = %T::KIND,
            rhs = %U::KIND,
            min = %min,
            max = %max,
            "computed range union"
        );
        (min.to_raw(), max.to_raw())
    });
    (T::from_raw(min), T::from_raw(max))
}

fn compute_range_union<T, U>() -> (T, T)
where
    T: Numeric,
    U: Numeric,
{
    let t = T::KIND;
    let u = U::KIND;

    match (t.class(), u.class()) {
        (NumericClass::SignedInteger, NumericClass::SignedInteger)
        | (NumericClass::UnsignedInteger, NumericClass::UnsignedInteger) => {
            let lo = max(T::min_value().widen_int(), U::min_value().widen_int());
            let hi = min(T::max_value().widen_int(), U::max_value().widen_int());
            (T::narrow_int(lo), T::narrow_int(hi))
        }
        (NumericClass::SignedInteger, NumericClass::UnsignedInteger) => {
            let hi = if t.width() <= u.width() {
                T::max_value()
            } else {
                T::narrow_int(U::max_value().widen_int())
            };
            (T::zero(), hi)
        }
        (NumericClass::UnsignedInteger, NumericClass::SignedInteger) => {
            let hi = if t.width() >= u.width() {
                T::narrow_int(U::max_value().widen_int())
            } else {
                T::max_value()
            };
            (T::zero(), hi)
        }
        (NumericClass::FloatingPoint, NumericClass::FloatingPoint) => {
            if t.width() <= u.width() {
                (T::min_value(), T::max_value())
            } else {
                (
                    T::narrow_float(U::min_value().widen_float()),
                    T::narrow_float(U::max_value().widen_float()),
                )
            }
        }
        (NumericClass::FloatingPoint, _) => {
            if t.width() == 4 {
                (
                    T::narrow_float(safe_cast_bound::<U, f32>(Bound::Min).widen_float()),
                    T::narrow_float(safe_cast_bound::<U, f32>(Bound::Max).widen_float()),
                )
            } else {
                (
                    T::narrow_float(safe_cast_bound::<U, f64>(Bound::Min)),
                    T::narrow_float(safe_cast_bound::<U, f64>(Bound::Max)),
                )
            }
        }
        (_, NumericClass::FloatingPoint) => {
            if u.width() == 4 {
                (
                    T::narrow_float(safe_cast_bound::<T, f32>(Bound::Min).widen_float()),
                    T::narrow_float(safe_cast_bound::<T, f32>(Bound::Max).widen_float()),
                )
            } else {
                (
                    T::narrow_float(safe_cast_bound::<T, f64>(Bound::Min)),
                    T::narrow_float(safe_cast_bound::<T, f64>(Bound::Max)),
                )
            }
        }
    }
}
