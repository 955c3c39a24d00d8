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

//! # Memoization Tables
//!
//! Process-wide caches for facts derived purely from numeric kinds. Each cell
//! is a `OnceLock`, so the first computation of a fact is published atomically
//! and every later read observes the same bits. Cells are never reset.

use crate::num::kind::{KIND_COUNT, NumericKind};
use std::sync::OnceLock;

/// Number of cells in a table keyed by an ordered pair of kinds.
pub(crate) const PAIR_SLOTS: usize = KIND_COUNT * KIND_COUNT;

/// A fixed-size table of write-once cells.
pub(crate) struct OnceTable<V, const N: usize> {
    cells: [OnceLock<V>; N],
}

impl<V, const N: usize> OnceTable<V, N>
where
    V: Copy,
{
    /// Creates a table with every cell empty.
    pub(crate) const fn new() -> Self {
        Self {
            cells: [const { OnceLock::new() }; N],
        }
    }

    /// Returns the value in `slot`, computing it with `init` on first access.
    ///
    /// Concurrent first accesses run `init` at most once; the losers block
    /// until the winner has published.
    #[inline]
    pub(crate) fn get_or_init<F>(&self, slot: usize, init: F) -> V
    where
        F: FnOnce() -> V,
    {
        debug_assert!(slot < N, "slot {} out of bounds for table of {}", slot, N);
        *self.cells[slot].get_or_init(init)
    }

    /// Returns the value in `slot` if it has been computed.
    #[cfg(test)]
    pub(crate) fn get(&self, slot: usize) -> Option<V> {
        self.cells[slot].get().copied()
    }
}

/// Index of the ordered pair `(lhs, rhs)` in a pair table.
#[inline(always)]
pub(crate) const fn pair_slot(lhs: NumericKind, rhs: NumericKind) -> usize {
    lhs.ordinal() * KIND_COUNT + rhs.ordinal()
}
