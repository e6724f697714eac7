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

//! The compatibility relation among basis-compatible candidates and its
//! builder. The relation maps every qualifying column to the other
//! qualifying columns it is linked to, excluding itself; which pairs count
//! as linked is the job of the configured [`CompatibilityPolicy`].

use crate::policy::CompatibilityPolicy;
use capstan_model::{column::ColumnId, cover::CoverMap, solution::WorkingBasis};
use rustc_hash::{FxHashMap, FxHashSet};

/// The derived graph linking basis-compatible candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityRelation {
    links: FxHashMap<ColumnId, Vec<ColumnId>>,
}

impl CompatibilityRelation {
    /// Creates an empty relation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of candidates (keys) in the relation.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the relation has no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the columns linked to `id`, if `id` is a candidate.
    #[inline]
    pub fn linked_to(&self, id: &str) -> Option<&[ColumnId]> {
        self.links.get(id).map(Vec::as_slice)
    }

    /// Returns `true` if `id` is a candidate.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.links.contains_key(id)
    }

    /// Registers a candidate with its linked columns.
    #[inline]
    pub fn insert(&mut self, id: ColumnId, linked: Vec<ColumnId>) {
        self.links.insert(id, linked);
    }

    /// Iterates over candidate/links pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &[ColumnId])> {
        self.links.iter().map(|(id, linked)| (id, linked.as_slice()))
    }

    /// Returns the identifier set implied by the relation: every candidate
    /// and every column a candidate is linked to.
    pub fn compatible_set(&self) -> CompatibleSet {
        let mut members = FxHashSet::default();
        for (id, linked) in &self.links {
            members.insert(id.clone());
            for other in linked {
                members.insert(other.clone());
            }
        }
        CompatibleSet { members }
    }
}

/// The identifier set implied by a compatibility relation, or loaded back
/// from a persisted compatibility record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibleSet {
    members: FxHashSet<ColumnId>,
}

impl CompatibleSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of identifiers in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `id` is in the set.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Inserts an identifier.
    #[inline]
    pub fn insert(&mut self, id: ColumnId) {
        self.members.insert(id);
    }

    /// Iterates over the identifiers.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ColumnId> {
        self.members.iter()
    }
}

impl FromIterator<ColumnId> for CompatibleSet {
    fn from_iter<I: IntoIterator<Item = ColumnId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Builds the compatibility relation over the selected columns of a
/// solution.
///
/// Candidates are drawn from the working basis (the selected columns);
/// qualification and linkage are delegated to the policy. Candidates are
/// walked in sorted identifier order so the built relation is deterministic
/// for a given input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationBuilder<P> {
    policy: P,
}

impl<P> RelationBuilder<P>
where
    P: CompatibilityPolicy,
{
    /// Creates a builder using `policy`.
    #[inline]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Builds the relation among the members of `basis`.
    ///
    /// An empty basis, or one with no qualifying member, yields an empty
    /// relation. A single qualifying candidate is kept as a key with an
    /// empty link list.
    pub fn build(&self, covers: &CoverMap, basis: &WorkingBasis) -> CompatibilityRelation {
        let mut candidates: Vec<&ColumnId> = basis
            .iter()
            .filter(|id| self.policy.qualifies(id, covers, basis))
            .collect();
        candidates.sort();

        let mut relation = CompatibilityRelation::new();
        for subject in &candidates {
            let linked: Vec<ColumnId> = candidates
                .iter()
                .filter(|other| **other != *subject)
                .filter(|other| self.policy.links(subject, other, covers, basis))
                .map(|other| (*other).clone())
                .collect();
            relation.insert((*subject).clone(), linked);
        }
        relation
    }
}
