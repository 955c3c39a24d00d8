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

//! # Runtime-Tagged Scalars
//!
//! `Scalar` carries one value of any supported kind together with its tag.
//! Every operation dispatches the tag to the generic core with two `match`
//! expressions, one per operand, so a dynamically-typed caller gets the same
//! saturating semantics as statically-typed code.
//!
//! ```rust
//! # use satnum_core::num::{kind::NumericKind, scalar::Scalar};
//! let mut total = Scalar::U8(200);
//! total.saturating_add(Scalar::I64(100));
//! assert_eq!(total, Scalar::U8(255));
//!
//! assert_eq!(Scalar::F64(-3.7).cast(NumericKind::U16), Scalar::U16(0));
//! ```

use crate::num::{
    error::{DivisionByZeroError, ScalarError},
    kind::{KindVisitor, NumericKind},
    ops::{saturating_arithmetic, saturating_cast::saturate_cast},
    primitive::Numeric,
};
use std::fmt;

/// A numeric value tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Scalar {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

/// A computation over the concrete value held by a [`Scalar`].
pub trait ValueVisitor {
    /// The result of the visit.
    type Output;

    /// Runs the computation for a value of type `T`.
    fn visit<T>(self, value: T) -> Self::Output
    where
        T: Numeric;
}

/// A computation that needs mutable access to the value held by a [`Scalar`].
trait ValueVisitorMut {
    fn visit_mut<T>(self, value: &mut T)
    where
        T: Numeric;
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Scalar {
    /// Wraps a primitive value.
    #[inline]
    pub fn new<T>(value: T) -> Scalar
    where
        T: Numeric,
    {
        value.into_scalar()
    }

    /// Returns the kind of the held value.
    pub const fn kind(&self) -> NumericKind {
        match self {
            Scalar::I8(_) => NumericKind::I8,
            Scalar::I16(_) => NumericKind::I16,
            Scalar::I32(_) => NumericKind::I32,
            Scalar::I64(_) => NumericKind::I64,
            Scalar::Isize(_) => NumericKind::Isize,
            Scalar::U8(_) => NumericKind::U8,
            Scalar::U16(_) => NumericKind::U16,
            Scalar::U32(_) => NumericKind::U32,
            Scalar::U64(_) => NumericKind::U64,
            Scalar::Usize(_) => NumericKind::Usize,
            Scalar::F32(_) => NumericKind::F32,
            Scalar::F64(_) => NumericKind::F64,
        }
    }

    /// Returns `true` if the held value is zero (either sign for floats).
    pub fn is_zero(&self) -> bool {
        self.visit(IsZero)
    }

    /// Dispatches `visitor` with the held value.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: ValueVisitor,
    {
        match self {
            Scalar::I8(v) => visitor.visit(v),
            Scalar::I16(v) => visitor.visit(v),
            Scalar::I32(v) => visitor.visit(v),
            Scalar::I64(v) => visitor.visit(v),
            Scalar::Isize(v) => visitor.visit(v),
            Scalar::U8(v) => visitor.visit(v),
            Scalar::U16(v) => visitor.visit(v),
            Scalar::U32(v) => visitor.visit(v),
            Scalar::U64(v) => visitor.visit(v),
            Scalar::Usize(v) => visitor.visit(v),
            Scalar::F32(v) => visitor.visit(v),
            Scalar::F64(v) => visitor.visit(v),
        }
    }

    fn visit_mut<V>(&mut self, visitor: V)
    where
        V: ValueVisitorMut,
    {
        match self {
            Scalar::I8(v) => visitor.visit_mut(v),
            Scalar::I16(v) => visitor.visit_mut(v),
            Scalar::I32(v) => visitor.visit_mut(v),
            Scalar::I64(v) => visitor.visit_mut(v),
            Scalar::Isize(v) => visitor.visit_mut(v),
            Scalar::U8(v) => visitor.visit_mut(v),
            Scalar::U16(v) => visitor.visit_mut(v),
            Scalar::U32(v) => visitor.visit_mut(v),
            Scalar::U64(v) => visitor.visit_mut(v),
            Scalar::Usize(v) => visitor.visit_mut(v),
            Scalar::F32(v) => visitor.visit_mut(v),
            Scalar::F64(v) => visitor.visit_mut(v),
        }
    }

    /// Converts into `kind`, saturating at the range both kinds share.
    pub fn cast(self, kind: NumericKind) -> Scalar {
        self.visit(CastTo(kind))
    }

    /// Converts into the kind named by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Parse`] if `kind` names no supported kind.
    pub fn cast_named(self, kind: &str) -> Result<Scalar, ScalarError> {
        let kind: NumericKind = kind.parse()?;
        Ok(self.cast(kind))
    }

    /// Adds `rhs` in place; the result keeps `self`'s kind.
    pub fn saturating_add(&mut self, rhs: Scalar) {
        self.apply(Operation::Add, rhs);
    }

    /// Subtracts `rhs` in place; the result keeps `self`'s kind.
    pub fn saturating_sub(&mut self, rhs: Scalar) {
        self.apply(Operation::Subtract, rhs);
    }

    /// Multiplies by `rhs` in place; the result keeps `self`'s kind.
    pub fn saturating_mul(&mut self, rhs: Scalar) {
        self.apply(Operation::Multiply, rhs);
    }

    /// Divides by `rhs` in place after checking the divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] and leaves `self` untouched
    /// when `rhs` is zero.
    ///
    /// ```rust
    /// # use satnum_core::num::scalar::Scalar;
    /// let mut v = Scalar::I8(-128);
    /// v.checked_saturating_div(Scalar::I32(-1)).unwrap();
    /// assert_eq!(v, Scalar::I8(127));
    /// assert!(v.checked_saturating_div(Scalar::U8(0)).is_err());
    /// ```
    pub fn checked_saturating_div(&mut self, rhs: Scalar) -> Result<(), ScalarError> {
        if rhs.is_zero() {
            return Err(DivisionByZeroError {
                dividend: self.kind(),
                divisor: rhs.kind(),
            }
            .into());
        }
        self.apply(Operation::Divide, rhs);
        Ok(())
    }

    fn apply(&mut self, op: Operation, rhs: Scalar) {
        self.visit_mut(ApplyWith { op, rhs });
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::Isize(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::Usize(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
        }
    }
}

struct IsZero;

impl ValueVisitor for IsZero {
    type Output = bool;

    fn visit<T>(self, value: T) -> bool
    where
        T: Numeric,
    {
        value.is_zero()
    }
}

struct CastTo(NumericKind);

impl ValueVisitor for CastTo {
    type Output = Scalar;

    fn visit<T>(self, value: T) -> Scalar
    where
        T: Numeric,
    {
        self.0.visit(CastValue(value))
    }
}

struct CastValue<Tin>(Tin);

impl<Tin> KindVisitor for CastValue<Tin>
where
    Tin: Numeric,
{
    type Output = Scalar;

    fn visit<Tout>(self) -> Scalar
    where
        Tout: Numeric,
    {
        saturate_cast::<Tout, Tin>(self.0).into_scalar()
    }
}

struct ApplyWith {
    op: Operation,
    rhs: Scalar,
}

impl ValueVisitorMut for ApplyWith {
    fn visit_mut<L>(self, left: &mut L)
    where
        L: Numeric,
    {
        self.rhs.visit(ApplyTo { op: self.op, left })
    }
}

struct ApplyTo<'a, L> {
    op: Operation,
    left: &'a mut L,
}

impl<L> ValueVisitor for ApplyTo<'_, L>
where
    L: Numeric,
{
    type Output = ();

    fn visit<R>(self, right: R)
    where
        R: Numeric,
    {
        match self.op {
            Operation::Add => saturating_arithmetic::saturate_add(self.left, right),
            Operation::Subtract => saturating_arithmetic::saturate_subtract(self.left, right),
            Operation::Multiply => saturating_arithmetic::saturate_multiply(self.left, right),
            Operation::Divide => saturating_arithmetic::saturate_divide(self.left, right),
        }
    }
}
