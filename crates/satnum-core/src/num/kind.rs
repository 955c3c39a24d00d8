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

//! # Numeric Kinds
//!
//! The closed set of numeric representations understood by this crate and the
//! facts every other module derives from: byte width, classification, limits
//! and a diagnostic name.
//!
//! `NumericKind` is the runtime tag. Generic code reaches the same facts
//! statically through `Numeric::KIND`. A `KindVisitor` turns a runtime tag back
//! into a monomorphized call, so runtime-tagged callers share the generic core.
//!
//! ```rust
//! # use satnum_core::num::kind::{NumericClass, NumericKind};
//! let kind: NumericKind = "int32".parse().unwrap();
//! assert_eq!(kind, NumericKind::I32);
//! assert_eq!(kind.width(), 4);
//! assert_eq!(kind.class(), NumericClass::SignedInteger);
//! ```

use crate::num::{error::ParseNumericKindError, primitive::Numeric, scalar::Scalar};
use std::{fmt, marker::PhantomData, str::FromStr};

/// Number of supported numeric kinds.
pub const KIND_COUNT: usize = 12;

/// Coarse classification of a numeric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericClass {
    /// Two's-complement signed integer.
    SignedInteger,
    /// Unsigned integer.
    UnsignedInteger,
    /// IEEE754 binary floating point.
    FloatingPoint,
}

/// A concrete numeric representation.
///
/// The discriminant doubles as the kind's ordinal in the memoization tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl NumericKind {
    /// Every supported kind, ordered by ordinal.
    pub const ALL: [NumericKind; KIND_COUNT] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::Isize,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::Usize,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// Returns the dense index of this kind in `[0, KIND_COUNT)`.
    #[inline(always)]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the width of the representation in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            NumericKind::I8 | NumericKind::U8 => 1,
            NumericKind::I16 | NumericKind::U16 => 2,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 4,
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 => 8,
            NumericKind::Isize | NumericKind::Usize => core::mem::size_of::<usize>(),
        }
    }

    /// Returns the classification of this kind.
    #[inline]
    pub const fn class(self) -> NumericClass {
        match self {
            NumericKind::I8
            | NumericKind::I16
            | NumericKind::I32
            | NumericKind::I64
            | NumericKind::Isize => NumericClass::SignedInteger,
            NumericKind::U8
            | NumericKind::U16
            | NumericKind::U32
            | NumericKind::U64
            | NumericKind::Usize => NumericClass::UnsignedInteger,
            NumericKind::F32 | NumericKind::F64 => NumericClass::FloatingPoint,
        }
    }

    /// Returns `true` for signed integer kinds.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self.class(), NumericClass::SignedInteger)
    }

    /// Returns `true` for unsigned integer kinds.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self.class(), NumericClass::UnsignedInteger)
    }

    /// Returns `true` for floating-point kinds.
    #[inline]
    pub const fn is_floating(self) -> bool {
        matches!(self.class(), NumericClass::FloatingPoint)
    }

    /// Returns `true` for signed and unsigned integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_floating()
    }

    /// Returns the Rust spelling of the kind, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    /// Returns the smallest representable value (the most negative finite
    /// value for floating-point kinds).
    pub fn minimum(self) -> Scalar {
        self.descriptor().minimum
    }

    /// Returns the largest representable finite value.
    pub fn maximum(self) -> Scalar {
        self.descriptor().maximum
    }

    /// Returns the full descriptor of this kind.
    pub fn descriptor(self) -> KindDescriptor {
        self.visit(DescribeKind)
    }

    /// Returns the zero value of this kind.
    pub fn zero(self) -> Scalar {
        self.visit(ZeroOf)
    }

    /// Computes the range both `self` and `other` can represent, expressed in
    /// `self`'s representation.
    ///
    /// Runtime-tagged counterpart of [`crate::num::range::range_union`].
    ///
    /// ```rust
    /// # use satnum_core::num::{kind::NumericKind, scalar::Scalar};
    /// let (min, max) = NumericKind::U32.range_union(NumericKind::I32);
    /// assert_eq!(min, Scalar::U32(0));
    /// assert_eq!(max, Scalar::U32(2_147_483_647));
    /// ```
    pub fn range_union(self, other: NumericKind) -> (Scalar, Scalar) {
        self.visit(UnionOf(other))
    }

    /// Dispatches `visitor` with the Rust type that corresponds to this kind.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: KindVisitor,
    {
        match self {
            NumericKind::I8 => visitor.visit::<i8>(),
            NumericKind::I16 => visitor.visit::<i16>(),
            NumericKind::I32 => visitor.visit::<i32>(),
            NumericKind::I64 => visitor.visit::<i64>(),
            NumericKind::Isize => visitor.visit::<isize>(),
            NumericKind::U8 => visitor.visit::<u8>(),
            NumericKind::U16 => visitor.visit::<u16>(),
            NumericKind::U32 => visitor.visit::<u32>(),
            NumericKind::U64 => visitor.visit::<u64>(),
            NumericKind::Usize => visitor.visit::<usize>(),
            NumericKind::F32 => visitor.visit::<f32>(),
            NumericKind::F64 => visitor.visit::<f64>(),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = ParseNumericKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "i8" | "int8" | "char" => NumericKind::I8,
            "i16" | "int16" | "short" => NumericKind::I16,
            "i32" | "int32" | "int" => NumericKind::I32,
            "i64" | "int64" | "long" => NumericKind::I64,
            "isize" => NumericKind::Isize,
            "u8" | "uint8" | "byte" => NumericKind::U8,
            "u16" | "uint16" => NumericKind::U16,
            "u32" | "uint32" => NumericKind::U32,
            "u64" | "uint64" => NumericKind::U64,
            "usize" => NumericKind::Usize,
            "f32" | "float" => NumericKind::F32,
            "f64" | "double" => NumericKind::F64,
            _ => return Err(ParseNumericKindError::new(s)),
        };
        Ok(kind)
    }
}

/// Everything known about a numeric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindDescriptor {
    /// The described kind.
    pub kind: NumericKind,
    /// Width in bytes.
    pub width: usize,
    /// Signed, unsigned or floating point.
    pub class: NumericClass,
    /// Smallest representable value.
    pub minimum: Scalar,
    /// Largest representable finite value.
    pub maximum: Scalar,
}

impl fmt::Display for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, {:?}, [{}, {}])",
            self.kind, self.width, self.class, self.minimum, self.maximum
        )
    }
}

/// A computation that is generic over the numeric type selected by a
/// runtime [`NumericKind`].
pub trait KindVisitor {
    /// The result of the visit.
    type Output;

    /// Runs the computation for the numeric type `T`.
    fn visit<T>(self) -> Self::Output
    where
        T: Numeric;
}

struct DescribeKind;

impl KindVisitor for DescribeKind {
    type Output = KindDescriptor;

    fn visit<T>(self) -> KindDescriptor
    where
        T: Numeric,
    {
        KindDescriptor {
            kind: T::KIND,
            width: T::KIND.width(),
            class: T::KIND.class(),
            minimum: T::min_value().into_scalar(),
            maximum: T::max_value().into_scalar(),
        }
    }
}

struct ZeroOf;

impl KindVisitor for ZeroOf {
    type Output = Scalar;

    fn visit<T>(self) -> Scalar
    where
        T: Numeric,
    {
        T::zero().into_scalar()
    }
}

struct UnionOf(NumericKind);

impl KindVisitor for UnionOf {
    type Output = (Scalar, Scalar);

    fn visit<T>(self) -> (Scalar, Scalar)
    where
        T: Numeric,
    {
        self.0.visit(UnionWith::<T>(PhantomData))
    }
}

struct UnionWith<T>(PhantomData<T>);

impl<T> KindVisitor for UnionWith<T>
where
    T: Numeric,
{
    type Output = (Scalar, Scalar);

    fn visit<U>(self) -> (Scalar, Scalar)
    where
        U: Numeric,
    {
        let (min, max) = crate::num::range::range_union::<T, U>();
        (min.into_scalar(), max.into_scalar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_dense() {
        for (index, kind) in NumericKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), index);
        }
    }

    #[test]
    fn test_widths() {
        assert_eq!(NumericKind::I8.width(), 1);
        assert_eq!(NumericKind::U16.width(), 2);
        assert_eq!(NumericKind::F32.width(), 4);
        assert_eq!(NumericKind::I64.width(), 8);
        assert_eq!(NumericKind::Usize.width(), core::mem::size_of::<usize>());
    }

    #[test]
    fn test_classification() {
        assert!(NumericKind::I32.is_signed());
        assert!(!NumericKind::I32.is_unsigned());
        assert!(NumericKind::U64.is_unsigned());
        assert!(NumericKind::F64.is_floating());
        assert!(!NumericKind::F32.is_integer());
        assert!(NumericKind::Usize.is_integer());
    }

    #[test]
    fn test_descriptor_limits() {
        let d = NumericKind::I8.descriptor();
        assert_eq!(d.minimum, Scalar::I8(i8::MIN));
        assert_eq!(d.maximum, Scalar::I8(i8::MAX));
        assert_eq!(d.class, NumericClass::SignedInteger);

        assert_eq!(NumericKind::U32.minimum(), Scalar::U32(0));
        assert_eq!(NumericKind::F32.maximum(), Scalar::F32(f32::MAX));
        assert_eq!(NumericKind::F64.minimum(), Scalar::F64(f64::MIN));
    }

    #[test]
    fn test_descriptor_display() {
        let s = format!("{}", NumericKind::U8.descriptor());
        assert_eq!(s, "u8 (1 bytes, UnsignedInteger, [0, 255])");
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("i32".parse::<NumericKind>().unwrap(), NumericKind::I32);
        assert_eq!("Double".parse::<NumericKind>().unwrap(), NumericKind::F64);
        assert_eq!(" uint16 ".parse::<NumericKind>().unwrap(), NumericKind::U16);
        for kind in NumericKind::ALL {
            assert_eq!(kind.name().parse::<NumericKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "string".parse::<NumericKind>().unwrap_err();
        assert_eq!(err.token(), "string");
    }

    #[test]
    fn test_zero() {
        assert_eq!(NumericKind::U64.zero(), Scalar::U64(0));
        assert_eq!(NumericKind::F32.zero(), Scalar::F32(0.0));
    }

    #[test]
    fn test_dynamic_range_union() {
        assert_eq!(
            NumericKind::I32.range_union(NumericKind::I8),
            (Scalar::I32(-128), Scalar::I32(127))
        );
        assert_eq!(
            NumericKind::I64.range_union(NumericKind::U32),
            (Scalar::I64(0), Scalar::I64(4_294_967_295))
        );
    }
}
