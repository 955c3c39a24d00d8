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

//! # Numeric Foundations
//!
//! Kind descriptors, float bit manipulation, cached range facts and the
//! saturating operations built on them.
//!
//! ## Submodules
//!
//! - `kind`: The closed `NumericKind` enumeration with width, classification,
//!   limits and names, plus `KindVisitor` for runtime-to-generic dispatch.
//! - `primitive`: The sealed `Numeric` trait implemented for every supported
//!   primitive.
//! - `float_bits`: IEEE754 field access and one-ULP stepping toward zero.
//! - `safe_cast`: Float values that truncate back into an integer kind
//!   without exceeding its limits.
//! - `range`: The range two kinds can both represent.
//! - `ops`: Saturating casts and arithmetic.
//! - `scalar`: A runtime-tagged value routed through the generic core.
//! - `error`: Errors raised at the runtime-tagged boundary.
//!
//! Derived facts are computed once per key and stored in `OnceLock` tables,
//! so they are safe to query from any thread.

mod cache;

pub mod error;
pub mod float_bits;
pub mod kind;
pub mod ops;
pub mod primitive;
pub mod range;
pub mod safe_cast;
pub mod scalar;
