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

use crate::stats::ScreeningStatistics;
use capstan_model::num::CoefficientNum;
use capstan_screen::{classify::Classification, relation::CompatibilityRelation};

/// Everything one screening run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningOutcome<T> {
    /// The instance name the run was keyed to.
    pub instance: String,
    /// The compatibility relation among basis-compatible candidates.
    pub relation: CompatibilityRelation,
    /// The coefficient partition of the full solution.
    pub classification: Classification<T>,
    /// Counters collected across the stages.
    pub statistics: ScreeningStatistics,
}

impl<T> ScreeningOutcome<T>
where
    T: CoefficientNum,
{
    /// Creates a new `ScreeningOutcome`.
    #[inline]
    pub fn new(
        instance: impl Into<String>,
        relation: CompatibilityRelation,
        classification: Classification<T>,
        statistics: ScreeningStatistics,
    ) -> Self {
        Self {
            instance: instance.into(),
            relation,
            classification,
            statistics,
        }
    }

    /// Returns `true` if the run saw no columns at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classification.is_empty()
    }

    /// Returns `true` if at least one column classified as compatible.
    #[inline]
    pub fn has_compatible_columns(&self) -> bool {
        self.classification.compatible_count() > 0
    }
}

impl<T> std::fmt::Display for ScreeningOutcome<T>
where
    T: CoefficientNum,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Screening Outcome for '{}'", self.instance)?;
        writeln!(
            f,
            "   Candidates: {}, Compatible: {}, Incompatible: {}",
            self.relation.len(),
            self.classification.compatible_count(),
            self.classification.incompatible_count()
        )?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ScreeningStatisticsBuilder;

    #[test]
    fn test_empty_outcome_predicates() {
        let outcome: ScreeningOutcome<f64> = ScreeningOutcome::new(
            "AS65-2",
            CompatibilityRelation::new(),
            Classification::default(),
            ScreeningStatisticsBuilder::new().build(),
        );

        assert!(outcome.is_empty());
        assert!(!outcome.has_compatible_columns());
        assert_eq!(outcome.instance, "AS65-2");
    }

    #[test]
    fn test_display_summarizes_run() {
        let outcome: ScreeningOutcome<f64> = ScreeningOutcome::new(
            "AS65-2",
            CompatibilityRelation::new(),
            Classification::default(),
            ScreeningStatisticsBuilder::new().columns_loaded(9).build(),
        );

        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Screening Outcome for 'AS65-2'"));
        assert!(rendered.contains("Candidates: 0"));
        assert!(rendered.contains("Columns Loaded: 9"));
    }
}
