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

//! Property-based tests for saturating casts, arithmetic and range unions.

use proptest::prelude::*;
use satnum_core::num::{
    kind::NumericKind,
    ops::{
        saturating_arithmetic::{
            saturate_add, saturate_divide, saturate_multiply, saturate_subtract,
        },
        saturating_cast::saturate_cast,
    },
    range::range_union,
    scalar::Scalar,
};

fn clamp_i128(v: i128, lo: i128, hi: i128) -> i128 {
    v.clamp(lo, hi)
}

/// `m * 2^e`, exact for `|m| < 2^53` and moderate `e`.
fn dyadic(m: i64, e: i32) -> f64 {
    m as f64 * f64::from_bits(((1023 + e) as u64) << 52)
}

/// `l + m * 2^e` truncated toward zero, for `|e| <= 60`.
fn exact_sum(l: i128, m: i128, e: i32) -> i128 {
    if e >= 0 {
        l + (m << e)
    } else {
        let d = 1i128 << -e;
        (l * d + m) / d
    }
}

fn any_kind() -> impl Strategy<Value = NumericKind> {
    prop::sample::select(NumericKind::ALL.to_vec())
}

fn any_scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<i8>().prop_map(Scalar::I8),
        any::<i16>().prop_map(Scalar::I16),
        any::<i32>().prop_map(Scalar::I32),
        any::<i64>().prop_map(Scalar::I64),
        any::<isize>().prop_map(Scalar::Isize),
        any::<u8>().prop_map(Scalar::U8),
        any::<u16>().prop_map(Scalar::U16),
        any::<u32>().prop_map(Scalar::U32),
        any::<u64>().prop_map(Scalar::U64),
        any::<usize>().prop_map(Scalar::Usize),
        any::<f32>().prop_map(Scalar::F32),
        any::<f64>().prop_map(Scalar::F64),
    ]
}

// ===== SATURATING CAST =====

proptest! {
    #[test]
    fn cast_i64_to_i32_is_clamped_or_exact(v in any::<i64>()) {
        let out = saturate_cast::<i32, i64>(v);
        match i32::try_from(v) {
            Ok(exact) => prop_assert_eq!(out, exact),
            Err(_) => prop_assert!(out == i32::MIN || out == i32::MAX),
        }
    }

    #[test]
    fn cast_u64_to_i16_is_clamped_or_exact(v in any::<u64>()) {
        let out = saturate_cast::<i16, u64>(v);
        match i16::try_from(v) {
            Ok(exact) => prop_assert_eq!(out, exact),
            Err(_) => prop_assert_eq!(out, i16::MAX),
        }
    }

    #[test]
    fn cast_i64_to_u32_is_clamped_or_exact(v in any::<i64>()) {
        let out = saturate_cast::<u32, i64>(v);
        match u32::try_from(v) {
            Ok(exact) => prop_assert_eq!(out, exact),
            Err(_) => prop_assert!(out == 0 || out == u32::MAX),
        }
    }

    #[test]
    fn cast_f64_to_i32_never_exceeds_limits(v in any::<f64>()) {
        let out = saturate_cast::<i32, f64>(v);
        if v.is_finite() && v.trunc() >= i32::MIN as f64 && v.trunc() <= i32::MAX as f64 {
            prop_assert_eq!(out, v.trunc() as i32);
        }
    }

    #[test]
    fn cast_f32_to_f64_is_exact(v in any::<f32>()) {
        let out = saturate_cast::<f64, f32>(v);
        if v.is_finite() {
            prop_assert_eq!(out, v as f64);
        }
    }

    #[test]
    fn cast_i32_to_f32_round_trips_when_representable(v in -(1i32 << 24)..=(1i32 << 24)) {
        let out = saturate_cast::<f32, i32>(v);
        prop_assert_eq!(out as i32, v);
    }

    #[test]
    fn scalar_cast_stays_within_target(value in any_scalar(), kind in any_kind()) {
        let out = value.cast(kind);
        prop_assert_eq!(out.kind(), kind);
        let is_nan = matches!(out, Scalar::F32(f) if f.is_nan()) || matches!(out, Scalar::F64(f) if f.is_nan());
        if !is_nan {
            prop_assert!(out >= kind.minimum(), "{} below {}", out, kind.minimum());
            prop_assert!(out <= kind.maximum(), "{} above {}", out, kind.maximum());
        }
    }
}

// ===== SATURATING ARITHMETIC =====

proptest! {
    #[test]
    fn add_i32_i64_matches_wide_result(l in any::<i32>(), r in any::<i64>()) {
        let mut got = l;
        saturate_add(&mut got, r);
        let want = clamp_i128(l as i128 + r as i128, i32::MIN as i128, i32::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn subtract_i64_u64_matches_wide_result(l in any::<i64>(), r in any::<u64>()) {
        let mut got = l;
        saturate_subtract(&mut got, r);
        let want = clamp_i128(l as i128 - r as i128, i64::MIN as i128, i64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn multiply_u32_i64_matches_wide_result(l in any::<u32>(), r in any::<i64>()) {
        let mut got = l;
        saturate_multiply(&mut got, r);
        let want = clamp_i128(l as i128 * r as i128, 0, u32::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn multiply_i64_i64_matches_wide_result(l in any::<i64>(), r in any::<i64>()) {
        let mut got = l;
        saturate_multiply(&mut got, r);
        let want = clamp_i128(l as i128 * r as i128, i64::MIN as i128, i64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn divide_i16_i32_matches_wide_result(l in any::<i16>(), r in any::<i32>()) {
        prop_assume!(r != 0);
        let mut got = l;
        saturate_divide(&mut got, r);
        let want = clamp_i128(l as i128 / r as i128, i16::MIN as i128, i16::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn add_i64_f64_is_truncated_or_saturated(
        l in any::<i64>(),
        m in -(1i64 << 52)..(1i64 << 52),
        e in -60i32..=60,
    ) {
        let mut got = l;
        saturate_add(&mut got, dyadic(m, e));
        let want = clamp_i128(exact_sum(l as i128, m as i128, e), i64::MIN as i128, i64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn subtract_u64_f64_is_truncated_or_saturated(
        l in any::<u64>(),
        m in -(1i64 << 52)..(1i64 << 52),
        e in -60i32..=60,
    ) {
        let mut got = l;
        saturate_subtract(&mut got, dyadic(m, e));
        let want = clamp_i128(exact_sum(l as i128, -(m as i128), e), 0, u64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn multiply_u64_by_quarters_is_truncated_or_saturated(
        l in any::<u64>(),
        q in -(1i64 << 52)..(1i64 << 52),
    ) {
        let mut got = l;
        saturate_multiply(&mut got, q as f64 / 4.0);
        let want = clamp_i128(l as i128 * q as i128 / 4, 0, u64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn divide_i64_by_quarters_is_truncated_or_saturated(
        l in any::<i64>(),
        q in -(1i64 << 52)..(1i64 << 52),
    ) {
        prop_assume!(q != 0);
        let mut got = l;
        saturate_divide(&mut got, q as f64 / 4.0);
        let want = clamp_i128(l as i128 * 4 / q as i128, i64::MIN as i128, i64::MAX as i128);
        prop_assert_eq!(got as i128, want);
    }

    #[test]
    fn add_f32_f64_stays_finite(l in prop::num::f32::NORMAL, r in prop::num::f64::NORMAL) {
        let mut got = l;
        saturate_add(&mut got, r);
        prop_assert!(got.is_finite());
    }
}

// ===== RANGE UNION =====

#[test]
fn test_integer_unions_describe_the_same_interval_both_ways() {
    fn same<T, U>()
    where
        T: satnum_core::num::primitive::Numeric,
        U: satnum_core::num::primitive::Numeric,
    {
        let (a_lo, a_hi) = range_union::<T, U>();
        let (b_lo, b_hi) = range_union::<U, T>();
        assert_eq!(a_lo.widen_int(), b_lo.widen_int(), "{} x {}", T::KIND, U::KIND);
        assert_eq!(a_hi.widen_int(), b_hi.widen_int(), "{} x {}", T::KIND, U::KIND);
    }

    same::<i8, u8>();
    same::<i8, u64>();
    same::<i16, u8>();
    same::<i32, u32>();
    same::<i64, u16>();
    same::<u64, i64>();
    same::<isize, usize>();
    same::<i8, i64>();
    same::<u16, u32>();
}

#[test]
fn test_dynamic_union_matches_generic() {
    assert_eq!(
        NumericKind::I32.range_union(NumericKind::I8),
        (Scalar::I32(-128), Scalar::I32(127))
    );
    assert_eq!(
        NumericKind::U32.range_union(NumericKind::I32),
        (Scalar::U32(0), Scalar::U32(2_147_483_647))
    );
    assert_eq!(
        NumericKind::I64.range_union(NumericKind::U32),
        (Scalar::I64(0), Scalar::I64(4_294_967_295))
    );
}
