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

use crate::num::CoefficientNum;

/// A column identifier as emitted by the external solver.
///
/// Identifiers are opaque strings to everything except the cover parser,
/// which reads the delimiter-separated row tokens out of them. `ColumnId`
/// borrows as `&str` so identifier-keyed maps can be queried without
/// allocating.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a new `ColumnId`.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColumnId({})", self.0)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The solver-assigned coefficients of a single column.
///
/// `value` is the amount the solver assigned to the column (typically in
/// `[0, 1]` or integral); `objective` is the column's objective coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<T> {
    value: T,
    objective: T,
}

impl<T> Column<T>
where
    T: CoefficientNum,
{
    /// Creates a new `Column`.
    #[inline]
    pub const fn new(value: T, objective: T) -> Self {
        Self { value, objective }
    }

    /// Returns the solver-assigned value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the objective coefficient.
    #[inline]
    pub fn objective(&self) -> T {
        self.objective
    }
}

impl<T> std::fmt::Display for Column<T>
where
    T: CoefficientNum,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (obj: {})", self.value, self.objective)
    }
}
