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

//! # Compatibility Policies
//!
//! What it means for two basis-compatible candidates to be linked is a
//! policy decision, not a single fact. The historical pipeline links two
//! candidates because each independently scores zero against the working
//! basis; it never scores the two candidates against each other. That
//! interpretation ships as [`BasisSharedCompatibility`] and stays the
//! default. The direct reading, where a link requires the pair itself to be
//! compatible, ships as [`DirectPairwise`] so the two can be compared on the
//! same inputs.
//!
//! Both policies qualify candidates the same way: a candidate is
//! basis-compatible iff its degree against the whole working basis is zero.
//! Note that a basis member is scored against itself as part of that sum, so
//! a selected column whose own traversal contains a numeric gap never
//! qualifies.

use crate::degree::{degree_against_basis, DegreeOrientation};
use capstan_model::{column::ColumnId, cover::CoverMap, solution::WorkingBasis};

/// Decides which selected columns qualify as basis-compatible candidates and
/// which qualifying pairs are linked in the relation.
pub trait CompatibilityPolicy {
    /// Returns `true` if `column` qualifies as a basis-compatible candidate.
    fn qualifies(&self, column: &ColumnId, covers: &CoverMap, basis: &WorkingBasis) -> bool;

    /// Returns `true` if two qualifying candidates are linked.
    fn links(
        &self,
        first: &ColumnId,
        second: &ColumnId,
        covers: &CoverMap,
        basis: &WorkingBasis,
    ) -> bool;

    /// A short policy name for reports.
    fn name(&self) -> &'static str;
}

impl<'a, P> CompatibilityPolicy for &'a P
where
    P: CompatibilityPolicy + ?Sized,
{
    #[inline]
    fn qualifies(&self, column: &ColumnId, covers: &CoverMap, basis: &WorkingBasis) -> bool {
        (**self).qualifies(column, covers, basis)
    }

    #[inline]
    fn links(
        &self,
        first: &ColumnId,
        second: &ColumnId,
        covers: &CoverMap,
        basis: &WorkingBasis,
    ) -> bool {
        (**self).links(first, second, covers, basis)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The historical policy: candidates are linked by the shared property of
/// scoring zero against the working basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasisSharedCompatibility {
    orientation: DegreeOrientation,
}

impl BasisSharedCompatibility {
    /// Creates the policy with the default (directed) orientation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree orientation used for the basis qualification sum.
    #[inline]
    pub fn orientation(mut self, orientation: DegreeOrientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl CompatibilityPolicy for BasisSharedCompatibility {
    fn qualifies(&self, column: &ColumnId, covers: &CoverMap, basis: &WorkingBasis) -> bool {
        covers
            .get(column.as_str())
            .is_some_and(|cover| degree_against_basis(cover, covers, basis, self.orientation) == 0)
    }

    fn links(
        &self,
        _first: &ColumnId,
        _second: &ColumnId,
        _covers: &CoverMap,
        _basis: &WorkingBasis,
    ) -> bool {
        // Linkage is implied by shared qualification.
        true
    }

    fn name(&self) -> &'static str {
        "basis-shared"
    }
}

/// The direct reading: a link additionally requires the pair itself to score
/// zero under the configured orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectPairwise {
    orientation: DegreeOrientation,
}

impl DirectPairwise {
    /// Creates the policy with the default (directed) orientation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree orientation used for both qualification and links.
    #[inline]
    pub fn orientation(mut self, orientation: DegreeOrientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl CompatibilityPolicy for DirectPairwise {
    fn qualifies(&self, column: &ColumnId, covers: &CoverMap, basis: &WorkingBasis) -> bool {
        covers
            .get(column.as_str())
            .is_some_and(|cover| degree_against_basis(cover, covers, basis, self.orientation) == 0)
    }

    fn links(
        &self,
        first: &ColumnId,
        second: &ColumnId,
        covers: &CoverMap,
        _basis: &WorkingBasis,
    ) -> bool {
        match (covers.get(first.as_str()), covers.get(second.as_str())) {
            (Some(a), Some(b)) => self.orientation.degree(a, b) == 0,
            _ => false,
        }
    }

    fn name(&self) -> &'static str {
        "direct-pairwise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_model::{cover::CoverSequence, index::RowIndex};

    fn cover(rows: &[usize]) -> CoverSequence {
        CoverSequence::from_rows(rows.iter().map(|&r| RowIndex::new(r)))
    }

    fn id(s: &str) -> ColumnId {
        ColumnId::from(s)
    }

    #[test]
    fn test_qualification_requires_zero_against_whole_basis() {
        let mut covers = CoverMap::new();
        covers.insert(id("A_1_2"), cover(&[1, 2]));
        covers.insert(id("B_5_6"), cover(&[5, 6]));
        let basis: WorkingBasis = [id("A_1_2"), id("B_5_6")].into_iter().collect();

        let policy = BasisSharedCompatibility::new();
        assert!(policy.qualifies(&id("A_1_2"), &covers, &basis));
        assert!(policy.qualifies(&id("B_5_6"), &covers, &basis));
    }

    #[test]
    fn test_self_comparison_disqualifies_gapped_basis_member() {
        // The qualification sum includes the candidate against itself, so a
        // traversal with a numeric gap scores at least 2.
        let mut covers = CoverMap::new();
        covers.insert(id("C_2_5"), cover(&[2, 5]));
        let basis: WorkingBasis = [id("C_2_5")].into_iter().collect();

        let policy = BasisSharedCompatibility::new();
        assert!(!policy.qualifies(&id("C_2_5"), &covers, &basis));
    }

    #[test]
    fn test_unparsed_candidate_never_qualifies() {
        let covers = CoverMap::new();
        let basis = WorkingBasis::default();
        let policy = BasisSharedCompatibility::new();
        assert!(!policy.qualifies(&id("missing"), &covers, &basis));
    }

    #[test]
    fn test_basis_shared_links_every_qualifying_pair() {
        let covers = CoverMap::new();
        let basis = WorkingBasis::default();
        let policy = BasisSharedCompatibility::new();
        assert!(policy.links(&id("A"), &id("B"), &covers, &basis));
    }

    #[test]
    fn test_direct_pairwise_links_only_mutually_compatible_pairs() {
        let mut covers = CoverMap::new();
        covers.insert(id("A_1_2"), cover(&[1, 2]));
        covers.insert(id("B_5_6"), cover(&[5, 6]));
        // B breaks A's adjacency mid-way.
        covers.insert(id("M_2_7"), cover(&[2, 7]));
        let basis = WorkingBasis::default();

        let policy = DirectPairwise::new();
        assert!(policy.links(&id("A_1_2"), &id("B_5_6"), &covers, &basis));
        assert!(!policy.links(&id("M_2_7"), &id("A_1_2"), &covers, &basis));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(BasisSharedCompatibility::new().name(), "basis-shared");
        assert_eq!(DirectPairwise::new().name(), "direct-pairwise");
    }
}
