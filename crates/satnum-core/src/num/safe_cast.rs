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

//! # Safe Float Cast Boundaries
//!
//! The float nearest an integer kind's limit that still truncates back into
//! that kind without exceeding it. `i32::MAX as f32` rounds up to `2^31`,
//! which is outside `i32`; the safe maximum is the next float toward zero,
//! `2147483520.0`.
//!
//! The round-trip check runs through `i128` rather than through the integer
//! kind itself. Rust's float-to-int `as` saturates, so converting `2^64` back
//! to `u64` would silently land on `u64::MAX` and hide the overflow.
//!
//! Every boundary is computed once per (kind, float width, bound) and cached
//! for the rest of the process.

use crate::num::{
    cache::OnceTable,
    float_bits::FloatBits,
    kind::{KIND_COUNT, NumericKind},
    primitive::Numeric,
};
use num_traits::PrimInt;
use tracing::trace;

/// Which end of a range is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bound {
    Min,
    Max,
}

static SAFE_CAST_CACHE: OnceTable<u64, { KIND_COUNT * 4 }> = OnceTable::new();

#[inline(always)]
fn safe_cast_slot(kind: NumericKind, float: NumericKind, bound: Bound) -> usize {
    let width = match float {
        NumericKind::F32 => 0,
        _ => 1,
    };
    let end = match bound {
        Bound::Min => 0,
        Bound::Max => 1,
    };
    kind.ordinal() * 4 + width * 2 + end
}

/// Cached safe boundary of `T` expressed in the float type `F`.
pub(crate) fn safe_cast_bound<T, F>(bound: Bound) -> F
where
    T: Numeric,
    F: FloatBits,
{
    let slot = safe_cast_slot(T::KIND, F::KIND, bound);
    let raw = SAFE_CAST_CACHE.get_or_init(slot, || {
        let value = compute_safe_cast_bound::<T, F>(bound);
        trace!(
            kind = %T::KIND,
            float = %F::KIND,
            ?bound,
            value = %value,
            "computed safe cast bound"
        );
        value.to_raw()
    });
    F::from_raw(raw)
}

fn compute_safe_cast_bound<T, F>(bound: Bound) -> F
where
    T: Numeric,
    F: FloatBits,
{
    let limit = match bound {
        Bound::Min => T::min_value(),
        Bound::Max => T::max_value(),
    };

    if T::KIND.is_floating() {
        // A float limit narrowed into a smaller float overflows to infinity;
        // the narrower type's own limit is the tightest safe value.
        let direct = F::narrow_float(limit.widen_float());
        return match (direct.widen_float().is_infinite(), bound) {
            (true, Bound::Min) => F::min_value(),
            (true, Bound::Max) => F::max_value(),
            (false, _) => direct,
        };
    }

    let exact = limit.widen_int();
    let direct = F::narrow_int(exact);
    if direct.widen_int() == exact {
        direct
    } else {
        direct.next_toward_zero()
    }
}

/// Smallest `f32` that converts into `T` without going below `T::MIN`.
///
/// ```rust
/// # use satnum_core::num::safe_cast::min_safe_cast32;
/// assert_eq!(min_safe_cast32::<i32>(), -2_147_483_648.0);
/// assert_eq!(min_safe_cast32::<u64>(), 0.0);
/// ```
#[inline]
pub fn min_safe_cast32<T>() -> f32
where
    T: Numeric + PrimInt,
{
    safe_cast_bound::<T, f32>(Bound::Min)
}

/// Largest `f32` that converts into `T` without exceeding `T::MAX`.
///
/// ```rust
/// # use satnum_core::num::safe_cast::max_safe_cast32;
/// assert_eq!(max_safe_cast32::<i32>(), 2_147_483_520.0);
/// assert_eq!(max_safe_cast32::<u8>(), 255.0);
/// ```
#[inline]
pub fn max_safe_cast32<T>() -> f32
where
    T: Numeric + PrimInt,
{
    safe_cast_bound::<T, f32>(Bound::Max)
}

/// Smallest `f64` that converts into `T` without going below `T::MIN`.
#[inline]
pub fn min_safe_cast64<T>() -> f64
where
    T: Numeric + PrimInt,
{
    safe_cast_bound::<T, f64>(Bound::Min)
}

/// Largest `f64` that converts into `T` without exceeding `T::MAX`.
///
/// ```rust
/// # use satnum_core::num::safe_cast::max_safe_cast64;
/// assert_eq!(max_safe_cast64::<i32>(), 2_147_483_647.0);
/// assert_eq!(max_safe_cast64::<i64>(), 9_223_372_036_854_774_784.0);
/// ```
#[inline]
pub fn max_safe_cast64<T>() -> f64
where
    T: Numeric + PrimInt,
{
    safe_cast_bound::<T, f64>(Bound::Max)
}
