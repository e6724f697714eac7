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

//! # Incompatibility Degree
//!
//! The structural disagreement score between two row-covering sequences.
//! The score walks the REFERENCE column's adjacent row pairs and tests the
//! SUBJECT column's coverage of each endpoint:
//!
//! * exactly one endpoint covered: **+1** (a broken adjacency; the subject
//!   picks up the reference's sequence mid-way);
//! * both endpoints covered while the reference pair is not numerically
//!   consecutive: **+2** (the subject spans a reference adjacency that
//!   itself has a gap);
//! * anything else: **+0**.
//!
//! References with fewer than two covered rows have no adjacent pairs and
//! contribute nothing. A degree of 0 against a whole reference set means the
//! subject is fully compatible with every column in the set, in this
//! directional sense.
//!
//! ## Directionality
//!
//! `directed_degree(a, b)` iterates `b`'s pairs and tests `a`'s coverage;
//! nothing guarantees `directed_degree(a, b) == directed_degree(b, a)`.
//! [`DegreeOrientation`] names that asymmetry and lets callers opt into a
//! symmetric combination where a pairwise comparison wants one.

use capstan_model::{
    cover::{CoverMap, CoverSequence},
    solution::WorkingBasis,
};

/// How a pairwise score between two covers is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreeOrientation {
    /// Score the subject against the reference only (legacy behavior).
    #[default]
    Directed,
    /// Sum of both directions.
    SymmetricSum,
    /// Maximum of both directions.
    SymmetricMax,
}

impl DegreeOrientation {
    /// Scores `subject` against `reference` under this orientation.
    #[inline]
    pub fn degree(&self, subject: &CoverSequence, reference: &CoverSequence) -> u64 {
        match self {
            Self::Directed => directed_degree(subject, reference),
            Self::SymmetricSum => {
                directed_degree(subject, reference) + directed_degree(reference, subject)
            }
            Self::SymmetricMax => {
                directed_degree(subject, reference).max(directed_degree(reference, subject))
            }
        }
    }
}

impl std::fmt::Display for DegreeOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::SymmetricSum => write!(f, "symmetric-sum"),
            Self::SymmetricMax => write!(f, "symmetric-max"),
        }
    }
}

/// Directional incompatibility degree of `subject` with respect to
/// `reference`.
pub fn directed_degree(subject: &CoverSequence, reference: &CoverSequence) -> u64 {
    let mut degree = 0u64;
    for (first, second) in reference.adjacent_pairs() {
        let covers_first = subject.covers(first);
        let covers_second = subject.covers(second);

        if covers_first != covers_second {
            // Broken adjacency.
            degree += 1;
        } else if covers_first && (second.get() as i64) - (first.get() as i64) > 1 {
            // Spanned gap. Traversal order is not necessarily ascending; a
            // descending pair never counts as a gap.
            degree += 2;
        }
    }
    degree
}

/// Aggregate degree of `subject` against every member of `basis`, under
/// `orientation`.
///
/// Basis members without a parsed cover are skipped. An empty basis
/// contributes nothing.
pub fn degree_against_basis(
    subject: &CoverSequence,
    covers: &CoverMap,
    basis: &WorkingBasis,
    orientation: DegreeOrientation,
) -> u64 {
    basis
        .iter()
        .filter_map(|id| covers.get(id.as_str()))
        .map(|reference| orientation.degree(subject, reference))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_model::{column::ColumnId, index::RowIndex};

    fn cover(rows: &[usize]) -> CoverSequence {
        CoverSequence::from_rows(rows.iter().map(|&r| RowIndex::new(r)))
    }

    #[test]
    fn test_broken_adjacencies_score_one_each() {
        // Reference [2, 3, 9], subject covers {2, 9} but not 3:
        // pair (2, 3) is broken (+1), pair (3, 9) is broken (+1).
        let reference = cover(&[2, 3, 9]);
        let subject = cover(&[2, 9]);
        assert_eq!(directed_degree(&subject, &reference), 2);
    }

    #[test]
    fn test_consecutive_pair_fully_covered_scores_zero() {
        let reference = cover(&[2, 3]);
        let subject = cover(&[2, 3]);
        assert_eq!(directed_degree(&subject, &reference), 0);
    }

    #[test]
    fn test_spanned_gap_scores_two() {
        let reference = cover(&[2, 5]);
        let subject = cover(&[2, 5]);
        assert_eq!(directed_degree(&subject, &reference), 2);
    }

    #[test]
    fn test_uncovered_pairs_score_zero() {
        let reference = cover(&[2, 3, 9]);
        let subject = cover(&[40, 41]);
        assert_eq!(directed_degree(&subject, &reference), 0);
    }

    #[test]
    fn test_short_reference_contributes_nothing() {
        let reference = cover(&[7]);
        let subject = cover(&[7, 8]);
        assert_eq!(directed_degree(&subject, &reference), 0);
    }

    #[test]
    fn test_descending_pair_is_not_a_gap() {
        // Reference traverses 5 then 2; both covered. The signed difference
        // is negative, so no gap penalty applies.
        let reference = cover(&[5, 2]);
        let subject = cover(&[2, 5]);
        assert_eq!(directed_degree(&subject, &reference), 0);
    }

    #[test]
    fn test_degree_is_directional() {
        // Against [1, 2, 3] the single-row subject breaks two adjacencies;
        // the reverse direction has no pairs to walk.
        let a = cover(&[2]);
        let b = cover(&[1, 2, 3]);
        assert_eq!(directed_degree(&a, &b), 2);
        assert_eq!(directed_degree(&b, &a), 0);
    }

    #[test]
    fn test_orientation_combinations() {
        let a = cover(&[2]);
        let b = cover(&[1, 2, 3]);
        assert_eq!(DegreeOrientation::Directed.degree(&a, &b), 2);
        assert_eq!(DegreeOrientation::SymmetricSum.degree(&a, &b), 2);
        assert_eq!(DegreeOrientation::SymmetricMax.degree(&a, &b), 2);
        assert_eq!(DegreeOrientation::SymmetricSum.degree(&b, &a), 2);
        assert_eq!(DegreeOrientation::SymmetricMax.degree(&b, &a), 2);
    }

    #[test]
    fn test_degree_against_empty_basis_is_zero() {
        let subject = cover(&[1, 2]);
        let covers = CoverMap::new();
        let basis = WorkingBasis::default();
        assert_eq!(
            degree_against_basis(&subject, &covers, &basis, DegreeOrientation::Directed),
            0
        );
    }

    #[test]
    fn test_degree_against_basis_sums_members() {
        let mut covers = CoverMap::new();
        covers.insert(ColumnId::from("L1_2_3_9"), cover(&[2, 3, 9]));
        covers.insert(ColumnId::from("L2_2_5"), cover(&[2, 5]));
        let basis: WorkingBasis = [ColumnId::from("L1_2_3_9"), ColumnId::from("L2_2_5")]
            .into_iter()
            .collect();

        // Against L1: broken (2,3) and broken (3,9) => 2.
        // Against L2: both endpoints covered, gap 3 => 2.
        let subject = cover(&[2, 9, 5]);
        assert_eq!(
            degree_against_basis(&subject, &covers, &basis, DegreeOrientation::Directed),
            4
        );
    }

    #[test]
    fn test_basis_members_without_cover_are_skipped() {
        let mut covers = CoverMap::new();
        covers.insert(ColumnId::from("L1_2_3"), cover(&[2, 3]));
        // "L2" never parsed; only L1 is scored.
        let basis: WorkingBasis = [ColumnId::from("L1_2_3"), ColumnId::from("L2")]
            .into_iter()
            .collect();

        let subject = cover(&[2, 3]);
        assert_eq!(
            degree_against_basis(&subject, &covers, &basis, DegreeOrientation::Directed),
            0
        );
    }
}
