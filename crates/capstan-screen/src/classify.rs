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

//! The coefficient classifier: the final partition of a solution into the
//! compatible and incompatible buckets consumed by the downstream restricted
//! pricing step. A column is compatible iff its value is positive AND its
//! identifier is in the compatible set; everything else is incompatible.
//! Every column lands in exactly one bucket.

use crate::relation::CompatibleSet;
use capstan_model::{
    column::{Column, ColumnId},
    num::CoefficientNum,
    solution::Solution,
};
use rustc_hash::FxHashMap;

/// The two disjoint coefficient buckets covering a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<T> {
    compatible: FxHashMap<ColumnId, Column<T>>,
    incompatible: FxHashMap<ColumnId, Column<T>>,
}

impl<T> Classification<T>
where
    T: CoefficientNum,
{
    /// Returns the compatible bucket.
    #[inline]
    pub fn compatible(&self) -> &FxHashMap<ColumnId, Column<T>> {
        &self.compatible
    }

    /// Returns the incompatible bucket.
    #[inline]
    pub fn incompatible(&self) -> &FxHashMap<ColumnId, Column<T>> {
        &self.incompatible
    }

    /// Returns the number of compatible columns.
    #[inline]
    pub fn compatible_count(&self) -> usize {
        self.compatible.len()
    }

    /// Returns the number of incompatible columns.
    #[inline]
    pub fn incompatible_count(&self) -> usize {
        self.incompatible.len()
    }

    /// Returns the total number of classified columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.compatible.len() + self.incompatible.len()
    }

    /// Returns `true` if nothing was classified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compatible.is_empty() && self.incompatible.is_empty()
    }
}

impl<T> Default for Classification<T> {
    fn default() -> Self {
        Self {
            compatible: FxHashMap::default(),
            incompatible: FxHashMap::default(),
        }
    }
}

/// Partitions `solution` against `compatible_set`.
pub fn classify<T>(solution: &Solution<T>, compatible_set: &CompatibleSet) -> Classification<T>
where
    T: CoefficientNum,
{
    let mut compatible = FxHashMap::default();
    let mut incompatible = FxHashMap::default();

    for (id, column) in solution.iter() {
        if column.value() > T::zero() && compatible_set.contains(id.as_str()) {
            compatible.insert(id.clone(), *column);
        } else {
            incompatible.insert(id.clone(), *column);
        }
    }

    Classification {
        compatible,
        incompatible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution_of(entries: &[(&str, f64, f64)]) -> Solution<f64> {
        let mut solution = Solution::new();
        for (id, value, objective) in entries {
            solution.insert(ColumnId::from(*id), Column::new(*value, *objective));
        }
        solution
    }

    fn set_of(ids: &[&str]) -> CompatibleSet {
        ids.iter().map(|id| ColumnId::from(*id)).collect()
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let solution = solution_of(&[
            ("A_1_2", 1.0, 5.0),
            ("B_3_4", 0.0, 7.0),
            ("C_5_6", 0.5, 2.0),
            ("D_7_8", 1.0, 1.0),
        ]);
        let set = set_of(&["A_1_2", "C_5_6"]);

        let classification = classify(&solution, &set);

        assert_eq!(classification.len(), solution.len());
        for (id, column) in solution.iter() {
            let in_compatible = classification.compatible().contains_key(id.as_str());
            let in_incompatible = classification.incompatible().contains_key(id.as_str());
            assert!(in_compatible ^ in_incompatible, "column {id} misplaced");
            let bucket = if in_compatible {
                classification.compatible()
            } else {
                classification.incompatible()
            };
            assert_eq!(bucket.get(id.as_str()).unwrap(), column);
        }
    }

    #[test]
    fn test_compatible_requires_positive_value_and_membership() {
        let solution = solution_of(&[
            ("IN_SET_POSITIVE", 0.5, 1.0),
            ("IN_SET_ZERO", 0.0, 1.0),
            ("OUT_OF_SET_POSITIVE", 1.0, 1.0),
        ]);
        let set = set_of(&["IN_SET_POSITIVE", "IN_SET_ZERO"]);

        let classification = classify(&solution, &set);

        assert!(classification
            .compatible()
            .contains_key("IN_SET_POSITIVE"));
        assert!(classification.incompatible().contains_key("IN_SET_ZERO"));
        assert!(classification
            .incompatible()
            .contains_key("OUT_OF_SET_POSITIVE"));
    }

    #[test]
    fn test_negative_values_are_incompatible_even_in_set() {
        let solution = solution_of(&[("N_1", -0.5, 1.0)]);
        let set = set_of(&["N_1"]);
        let classification = classify(&solution, &set);
        assert_eq!(classification.compatible_count(), 0);
        assert_eq!(classification.incompatible_count(), 1);
    }

    #[test]
    fn test_empty_solution_classifies_to_empty_buckets() {
        let solution: Solution<f64> = Solution::new();
        let classification = classify(&solution, &CompatibleSet::new());
        assert!(classification.is_empty());
    }
}
