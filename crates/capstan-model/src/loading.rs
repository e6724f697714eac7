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

//! Solution record loader.
//!
//! This module turns persisted solver records into a validated `Solution`.
//! The record format is line oriented: a header carrying the objective
//! value, then one line per column with its value and objective coefficient.
//!
//! The `SolutionLoader` emphasizes recovery over strictness. The header line
//! is always consumed (its objective value is captured when parseable);
//! every subsequent line that does not match the expected shape is skipped
//! and reported to the caller's diagnostic sink, and loading continues.
//! Duplicate identifiers overwrite, so the last occurrence of a column wins.
//!
//! The loader accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with tests and tooling. The tolerant
//! line reading (an optional `:` token after the identifier, optional
//! whitespace inside the objective annotation) lets classification records
//! written by this workspace round-trip through the same loader.

use crate::{
    column::{Column, ColumnId},
    num::CoefficientNum,
    solution::Solution,
};
use capstan_core::diag::{Diagnostic, DiagnosticSink};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
    path::Path,
};

/// The error type for the solution loading process.
#[derive(Debug)]
pub enum SolutionLoadError {
    /// An I/O error occurred while opening or reading the input stream.
    Io(std::io::Error),
}

impl std::fmt::Display for SolutionLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SolutionLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SolutionLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A configurable loader for persisted solution records.
///
/// The format this loader expects is as follows:
///
/// ```raw
/// objective value: <real>
/// <identifier> <value> (obj:<coefficient>)
/// <identifier> <value> (obj:<coefficient>)
/// ...
/// ```
///
/// # Configuration
/// * `skip_header`: If true (default), line 1 is treated as the objective
///   header. Disable when re-loading classification records, which carry no
///   header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionLoader<T> {
    skip_header: bool,
    _marker: PhantomData<T>,
}

impl<T> Default for SolutionLoader<T> {
    fn default() -> Self {
        Self {
            skip_header: true,
            _marker: PhantomData,
        }
    }
}

impl<T> SolutionLoader<T>
where
    T: CoefficientNum,
{
    /// Creates a new `SolutionLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the first line is treated as the objective header.
    #[inline]
    pub fn skip_header(mut self, yes: bool) -> Self {
        self.skip_header = yes;
        self
    }

    /// Loads a solution record from a type implementing `BufRead`.
    ///
    /// Malformed lines are skipped and reported to `sink`; only I/O failures
    /// are fatal to the load.
    pub fn from_bufread<R, S>(&self, rdr: R, sink: &mut S) -> Result<Solution<T>, SolutionLoadError>
    where
        R: BufRead,
        S: DiagnosticSink,
    {
        let mut solution = Solution::new();
        let mut lines = rdr.lines();

        if self.skip_header {
            match lines.next() {
                None => return Ok(solution),
                Some(header) => {
                    let header = header.map_err(SolutionLoadError::Io)?;
                    if let Some(rest) = header.strip_prefix("objective value:") {
                        if let Ok(objective) = rest.trim().parse::<T>() {
                            solution.set_objective_value(objective);
                        }
                    }
                    // Any other first line is consumed without effect.
                }
            }
        }

        let first_data_line = if self.skip_header { 2 } else { 1 };
        for (offset, line) in lines.enumerate() {
            let line = line.map_err(SolutionLoadError::Io)?;
            match Self::parse_line(&line) {
                Some((id, column)) => solution.insert(id, column),
                None => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    sink.report(Diagnostic::new(
                        "solution-loader",
                        format!(
                            "skipping malformed line {}: '{}'",
                            first_data_line + offset,
                            line
                        ),
                    ));
                }
            }
        }

        Ok(solution)
    }

    /// Loads a solution record from a file path.
    #[inline]
    pub fn from_path<P, S>(&self, path: P, sink: &mut S) -> Result<Solution<T>, SolutionLoadError>
    where
        P: AsRef<Path>,
        S: DiagnosticSink,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file), sink)
    }

    /// Loads a solution record from a generic reader.
    #[inline]
    pub fn from_reader<R, S>(&self, r: R, sink: &mut S) -> Result<Solution<T>, SolutionLoadError>
    where
        R: Read,
        S: DiagnosticSink,
    {
        self.from_bufread(BufReader::new(r), sink)
    }

    /// Loads a solution record from a string slice.
    #[inline]
    pub fn from_str<S>(&self, s: &str, sink: &mut S) -> Result<Solution<T>, SolutionLoadError>
    where
        S: DiagnosticSink,
    {
        self.from_reader(s.as_bytes(), sink)
    }

    /// Parses one data line into an identifier and its coefficients.
    ///
    /// Expected shape: `<identifier> <value> (obj:<coefficient>)`, with an
    /// optional `:` token after the identifier and optional whitespace after
    /// `obj:`. Returns `None` for any line that does not match.
    fn parse_line(line: &str) -> Option<(ColumnId, Column<T>)> {
        let mut tokens = line.split_whitespace();

        let id = tokens.next()?;
        let mut value_token = tokens.next()?;
        if value_token == ":" {
            value_token = tokens.next()?;
        }
        let value = value_token.parse::<T>().ok()?;

        let annotation = tokens.collect::<Vec<_>>().join(" ");
        let objective_str = annotation.strip_prefix("(obj:")?.strip_suffix(')')?.trim();
        let objective = objective_str.parse::<T>().ok()?;

        Some((ColumnId::from(id), Column::new(value, objective)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::diag::{MemorySink, NoOpSink};

    const SMALL_RECORD: &str = "objective value: 42.5
A_1_2\t1\t(obj:5)
B_3_4\t0\t(obj:7.25)
C_5_6\t0.5\t(obj:2)
";

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = SolutionLoader::<f64>::new();
        let mut sink = NoOpSink;
        let solution = loader.from_str(SMALL_RECORD, &mut sink).expect("load");

        assert_eq!(solution.len(), 3);
        assert_eq!(solution.objective_value(), Some(42.5));

        let a = solution.get("A_1_2").unwrap();
        assert_eq!(a.value(), 1.0);
        assert_eq!(a.objective(), 5.0);

        let c = solution.get("C_5_6").unwrap();
        assert_eq!(c.value(), 0.5);
        assert_eq!(c.objective(), 2.0);
    }

    #[test]
    fn test_header_is_always_consumed() {
        // Even a header that does not parse as an objective is not a column.
        let record = "some unexpected banner\nA_1 1 (obj:3)\n";
        let loader = SolutionLoader::<f64>::new();
        let mut sink = MemorySink::new();
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert_eq!(solution.len(), 1);
        assert_eq!(solution.objective_value(), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped_and_reported() {
        let record = "objective value: 1\n\
                      A_1 1 (obj:3)\n\
                      this line has no coefficients\n\
                      B_2 garbage (obj:4)\n\
                      C_3 1 (obj:5)\n";
        let loader = SolutionLoader::<f64>::new();
        let mut sink = MemorySink::new();
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert_eq!(solution.len(), 2);
        assert!(solution.contains("A_1"));
        assert!(solution.contains("C_3"));

        assert_eq!(sink.len(), 2);
        let messages: Vec<&str> = sink.iter().map(|d| d.message()).collect();
        assert!(messages[0].contains("line 3"));
        assert!(messages[1].contains("line 4"));
    }

    #[test]
    fn test_blank_lines_are_not_diagnostics() {
        let record = "objective value: 1\n\nA_1 1 (obj:3)\n\n";
        let loader = SolutionLoader::<f64>::new();
        let mut sink = MemorySink::new();
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert_eq!(solution.len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_last_wins() {
        let record = "objective value: 1\nA_1 0 (obj:3)\nA_1 1 (obj:9)\n";
        let loader = SolutionLoader::<f64>::new();
        let mut sink = NoOpSink;
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert_eq!(solution.len(), 1);
        let a = solution.get("A_1").unwrap();
        assert_eq!(a.value(), 1.0);
        assert_eq!(a.objective(), 9.0);
    }

    #[test]
    fn test_tolerant_reading_accepts_classification_shape() {
        // The shape written by the classification record writer.
        let record = "A_1_2 : 1 (obj: 5)\nB_3 : 0.5 (obj: 2.5)\n";
        let loader = SolutionLoader::<f64>::new().skip_header(false);
        let mut sink = MemorySink::new();
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert!(sink.is_empty());
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.get("A_1_2").unwrap().objective(), 5.0);
        assert_eq!(solution.get("B_3").unwrap().value(), 0.5);
    }

    #[test]
    fn test_empty_input_yields_empty_solution() {
        let loader = SolutionLoader::<f64>::new();
        let mut sink = NoOpSink;
        let solution = loader.from_str("", &mut sink).expect("load");
        assert!(solution.is_empty());
        assert_eq!(solution.objective_value(), None);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let loader = SolutionLoader::<f64>::new();
        let mut sink = NoOpSink;
        let res = loader.from_path("definitely/not/a/real/record.txt", &mut sink);
        assert!(matches!(res, Err(SolutionLoadError::Io(_))));
    }

    #[test]
    fn test_trailing_garbage_after_annotation_is_malformed() {
        let record = "objective value: 1\nA_1 1 (obj:3) trailing\n";
        let loader = SolutionLoader::<f64>::new();
        let mut sink = MemorySink::new();
        let solution = loader.from_str(record, &mut sink).expect("load");

        assert!(solution.is_empty());
        assert_eq!(sink.len(), 1);
    }
}
