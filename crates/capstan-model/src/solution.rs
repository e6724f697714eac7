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

//! The immutable solution map and working-basis extraction.
//!
//! A `Solution` is the in-memory form of one persisted solver record: a
//! mapping from column identifier to coefficients, plus the objective value
//! from the record header when it was present. The working basis is the set
//! of columns the solver selected, i.e. those whose value matches `1.0`
//! under the configured tolerance.

use crate::{
    column::{Column, ColumnId},
    num::CoefficientNum,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// How a column value is matched against the selection value `1.0`.
///
/// The upstream solver emits clean integral values for selected columns of
/// an already-integral solution, which is why bit-exact equality is the
/// default. `Within` is for solvers that report near-integral values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasisTolerance<T> {
    /// Bit-exact equality with `1.0` (legacy solver convention).
    Exact,
    /// `|value - 1| <= eps`.
    Within(T),
}

impl<T> Default for BasisTolerance<T> {
    fn default() -> Self {
        Self::Exact
    }
}

impl<T> BasisTolerance<T>
where
    T: CoefficientNum,
{
    /// Returns `true` if `value` counts as selected under this tolerance.
    #[inline]
    pub fn selects(&self, value: T) -> bool {
        match self {
            Self::Exact => value == T::one(),
            Self::Within(eps) => (value - T::one()).abs() <= *eps,
        }
    }
}

/// An immutable mapping from column identifier to its solver coefficients.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution<T> {
    objective_value: Option<T>,
    columns: FxHashMap<ColumnId, Column<T>>,
}

impl<T> Solution<T>
where
    T: CoefficientNum,
{
    /// Creates an empty `Solution`.
    #[inline]
    pub fn new() -> Self {
        Self {
            objective_value: None,
            columns: FxHashMap::default(),
        }
    }

    /// Returns the objective value from the record header, if one was read.
    #[inline]
    pub fn objective_value(&self) -> Option<T> {
        self.objective_value
    }

    pub(crate) fn set_objective_value(&mut self, objective_value: T) {
        self.objective_value = Some(objective_value);
    }

    /// Inserts a column. A later insert under the same identifier replaces
    /// the earlier one (the record reflects a single import pass, so the
    /// last occurrence wins).
    #[inline]
    pub fn insert(&mut self, id: ColumnId, column: Column<T>) {
        self.columns.insert(id, column);
    }

    /// Returns the column registered under `id`.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.get(id)
    }

    /// Returns `true` if a column is registered under `id`.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.columns.contains_key(id)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the solution holds no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the column identifiers.
    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    /// Iterates over identifier/column pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Column<T>)> {
        self.columns.iter()
    }

    /// Extracts the working basis: every column whose value matches `1.0`
    /// under `tolerance`.
    pub fn working_basis(&self, tolerance: BasisTolerance<T>) -> WorkingBasis {
        let members = self
            .columns
            .iter()
            .filter(|(_, column)| tolerance.selects(column.value()))
            .map(|(id, _)| id.clone())
            .collect();
        WorkingBasis { members }
    }
}

/// The set of columns selected in a solution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingBasis {
    members: FxHashSet<ColumnId>,
}

impl WorkingBasis {
    /// Returns the number of basis members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the basis is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `id` is a basis member.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Iterates over the basis members.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ColumnId> {
        self.members.iter()
    }
}

impl FromIterator<ColumnId> for WorkingBasis {
    fn from_iter<I: IntoIterator<Item = ColumnId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
