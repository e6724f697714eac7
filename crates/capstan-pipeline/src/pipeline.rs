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

//! # Screening Pipeline
//!
//! The orchestrator wiring the stages end to end: load the solution record,
//! parse covers, extract the working basis, build the compatibility
//! relation, classify every column, and persist the relation and
//! classification records. Each stage fully consumes its input before the
//! next one starts; there is no feedback loop.
//!
//! ## Recovery model
//!
//! A missing or unreadable solution record does not fail the run: the
//! pipeline reports it and continues with an empty solution, so every
//! downstream stage produces an empty (not erroneous) output. Malformed
//! record lines are skipped and counted. Columns whose identifier fails to
//! parse are excluded and reported by default; `ParseFailurePolicy::Abort`
//! turns the first such failure into an error instead. Output files that
//! cannot be written are reported and do not fail the run either; the
//! returned outcome carries everything in memory.
//!
//! ## Instance naming
//!
//! Every output file name is derived from the instance name the pipeline
//! was created with: `compat_<instance>.txt`,
//! `compatible_coefficients-<instance>.txt` and
//! `incompatible_coefficients-<instance>.txt`.

use crate::{
    outcome::ScreeningOutcome,
    records,
    stats::ScreeningStatisticsBuilder,
};
use capstan_core::diag::{CountingSink, Diagnostic, DiagnosticSink};
use capstan_model::{
    cover::{CoverMap, CoverParseError, CoverParser},
    num::CoefficientNum,
    solution::{BasisTolerance, Solution},
};
use capstan_screen::{
    classify::classify,
    policy::{BasisSharedCompatibility, CompatibilityPolicy},
    relation::RelationBuilder,
};
use std::path::Path;

/// How columns whose identifier fails to parse are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Exclude the offending column from screening and report it (default).
    #[default]
    ExcludeColumn,
    /// Abort the run with the first parse failure.
    Abort,
}

/// The error type for a screening run.
#[derive(Debug)]
pub enum PipelineError {
    /// A column identifier failed to parse and the configured policy
    /// demands abort.
    Parse(CoverParseError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<CoverParseError> for PipelineError {
    fn from(e: CoverParseError) -> Self {
        Self::Parse(e)
    }
}

/// A configured screening run keyed to one problem instance.
///
/// # Configuration
/// * `delimiter`: Token delimiter in column identifiers.
/// * `skip_header`: Whether the solution record carries an objective header.
/// * `tolerance`: How column values are matched against `1.0`.
/// * `policy`: Which columns qualify and which qualifying pairs are linked.
/// * `parse_failures`: Exclude or abort on unparseable identifiers.
#[derive(Debug, Clone)]
pub struct ScreeningPipeline<T, P = BasisSharedCompatibility> {
    instance: String,
    delimiter: char,
    skip_header: bool,
    tolerance: BasisTolerance<T>,
    policy: P,
    parse_failures: ParseFailurePolicy,
}

impl<T> ScreeningPipeline<T, BasisSharedCompatibility>
where
    T: CoefficientNum,
{
    /// Creates a pipeline for `instance` with default settings and the
    /// legacy `BasisSharedCompatibility` policy.
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            delimiter: capstan_model::cover::DEFAULT_DELIMITER,
            skip_header: true,
            tolerance: BasisTolerance::Exact,
            policy: BasisSharedCompatibility::new(),
            parse_failures: ParseFailurePolicy::ExcludeColumn,
        }
    }
}

impl<T, P> ScreeningPipeline<T, P>
where
    T: CoefficientNum,
    P: CompatibilityPolicy,
{
    /// Sets the identifier token delimiter.
    #[inline]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Configures whether the solution record carries an objective header.
    #[inline]
    pub fn skip_header(mut self, yes: bool) -> Self {
        self.skip_header = yes;
        self
    }

    /// Sets the basis membership tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: BasisTolerance<T>) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the parse failure policy.
    #[inline]
    pub fn parse_failures(mut self, parse_failures: ParseFailurePolicy) -> Self {
        self.parse_failures = parse_failures;
        self
    }

    /// Replaces the compatibility policy.
    #[inline]
    pub fn policy<Q>(self, policy: Q) -> ScreeningPipeline<T, Q>
    where
        Q: CompatibilityPolicy,
    {
        ScreeningPipeline {
            instance: self.instance,
            delimiter: self.delimiter,
            skip_header: self.skip_header,
            tolerance: self.tolerance,
            policy,
            parse_failures: self.parse_failures,
        }
    }

    /// The instance name this run is keyed to.
    #[inline]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The relation record file name for this instance.
    #[inline]
    pub fn relation_file_name(&self) -> String {
        format!("compat_{}.txt", self.instance)
    }

    /// The compatible coefficients file name for this instance.
    #[inline]
    pub fn compatible_file_name(&self) -> String {
        format!("compatible_coefficients-{}.txt", self.instance)
    }

    /// The incompatible coefficients file name for this instance.
    #[inline]
    pub fn incompatible_file_name(&self) -> String {
        format!("incompatible_coefficients-{}.txt", self.instance)
    }

    /// Executes the full screening run.
    ///
    /// Reads the solution record at `solution_path`, writes the relation and
    /// classification records into `output_dir`, and returns the outcome.
    /// Recoverable events go to `sink`; see the module documentation for
    /// what is recoverable.
    pub fn run<S>(
        &self,
        solution_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        sink: &mut S,
    ) -> Result<ScreeningOutcome<T>, PipelineError>
    where
        S: DiagnosticSink,
    {
        let solution_path = solution_path.as_ref();
        let output_dir = output_dir.as_ref();

        // Stage 2: load the solution, counting skipped lines. A record that
        // cannot be read downgrades to an empty solution.
        let loader =
            capstan_model::loading::SolutionLoader::<T>::new().skip_header(self.skip_header);
        let mut counting = CountingSink::new(sink);
        let load_result = loader.from_path(solution_path, &mut counting);
        let malformed_lines = counting.reported();
        let solution = match load_result {
            Ok(solution) => solution,
            Err(e) => {
                sink.report(Diagnostic::new(
                    "pipeline",
                    format!(
                        "could not load solution record '{}': {}; proceeding with an empty solution",
                        solution_path.display(),
                        e
                    ),
                ));
                Solution::new()
            }
        };

        // Stage 1: parse every identifier into its cover sequence.
        let parser = CoverParser::new().delimiter(self.delimiter);
        let (covers, failures) = CoverMap::from_ids(solution.ids(), &parser);
        for failure in &failures {
            match self.parse_failures {
                ParseFailurePolicy::Abort => return Err(failure.clone().into()),
                ParseFailurePolicy::ExcludeColumn => sink.report(Diagnostic::new(
                    "cover-parser",
                    format!("excluding {}", failure),
                )),
            }
        }

        // Stage 3: extract the working basis.
        let basis = solution.working_basis(self.tolerance);

        // Stages 4 and 5: build the compatibility relation.
        let relation = RelationBuilder::new(&self.policy).build(&covers, &basis);
        let compatible_set = relation.compatible_set();

        // Stage 6: classify every column.
        let classification = classify(&solution, &compatible_set);

        // Persist the records. Write failures are reported, not fatal; the
        // outcome carries everything in memory.
        let relation_path = output_dir.join(self.relation_file_name());
        if let Err(e) = records::write_relation_to_path(&relation, &relation_path) {
            sink.report(Diagnostic::new(
                "record-writer",
                format!("could not write '{}': {}", relation_path.display(), e),
            ));
        }
        let compatible_path = output_dir.join(self.compatible_file_name());
        if let Err(e) =
            records::write_coefficients_to_path(classification.compatible().iter(), &compatible_path)
        {
            sink.report(Diagnostic::new(
                "record-writer",
                format!("could not write '{}': {}", compatible_path.display(), e),
            ));
        }
        let incompatible_path = output_dir.join(self.incompatible_file_name());
        if let Err(e) = records::write_coefficients_to_path(
            classification.incompatible().iter(),
            &incompatible_path,
        ) {
            sink.report(Diagnostic::new(
                "record-writer",
                format!("could not write '{}': {}", incompatible_path.display(), e),
            ));
        }

        let statistics = ScreeningStatisticsBuilder::new()
            .columns_loaded(solution.len())
            .malformed_lines(malformed_lines)
            .cover_parse_failures(failures.len() as u64)
            .basis_size(basis.len())
            .candidate_count(relation.len())
            .compatible_count(classification.compatible_count())
            .incompatible_count(classification.incompatible_count())
            .build();

        Ok(ScreeningOutcome::new(
            self.instance.clone(),
            relation,
            classification,
            statistics,
        ))
    }
}
