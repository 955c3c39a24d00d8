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

//! Error types reported by the runtime-tagged layer.
//!
//! The generic core never fails: overflow and underflow are absorbed by
//! saturation. Errors only arise where runtime input enters the crate, such as
//! parsing a kind name or dividing through a `Scalar` whose divisor is zero.

use crate::num::kind::NumericKind;

/// A string did not name a supported numeric kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumericKindError {
    token: String,
}

impl ParseNumericKindError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// The rejected input.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for ParseNumericKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown numeric kind '{}'", self.token)
    }
}

impl std::error::Error for ParseNumericKindError {}

/// A division was requested with a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZeroError {
    /// Kind of the dividend.
    pub dividend: NumericKind,
    /// Kind of the zero divisor.
    pub divisor: NumericKind,
}

impl std::fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Division of {} by a zero {} divisor",
            self.dividend, self.divisor
        )
    }
}

impl std::error::Error for DivisionByZeroError {}

/// The error type for runtime-tagged arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// A kind name could not be parsed.
    Parse(ParseNumericKindError),
    /// A division had a zero divisor.
    DivisionByZero(DivisionByZeroError),
}

impl std::fmt::Display for ScalarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::DivisionByZero(e) => write!(f, "Arithmetic error: {}", e),
        }
    }
}

impl std::error::Error for ScalarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::DivisionByZero(e) => Some(e),
        }
    }
}

impl From<ParseNumericKindError> for ScalarError {
    fn from(e: ParseNumericKindError) -> Self {
        Self::Parse(e)
    }
}

impl From<DivisionByZeroError> for ScalarError {
    fn from(e: DivisionByZeroError) -> Self {
        Self::DivisionByZero(e)
    }
}
