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

/// Statistics collected during one screening run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreeningStatistics {
    /// Number of columns loaded from the solution record.
    pub columns_loaded: usize,
    /// Number of malformed record lines that were skipped.
    pub malformed_lines: u64,
    /// Number of columns excluded because their identifier failed to parse.
    pub cover_parse_failures: u64,
    /// Size of the working basis.
    pub basis_size: usize,
    /// Number of basis-compatible candidates in the relation.
    pub candidate_count: usize,
    /// Number of columns classified as compatible.
    pub compatible_count: usize,
    /// Number of columns classified as incompatible.
    pub incompatible_count: usize,
}

impl std::fmt::Display for ScreeningStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Screening Statistics:")?;
        writeln!(f, "  Columns Loaded: {}", self.columns_loaded)?;
        writeln!(f, "  Malformed Lines Skipped: {}", self.malformed_lines)?;
        writeln!(f, "  Cover Parse Failures: {}", self.cover_parse_failures)?;
        writeln!(f, "  Working Basis Size: {}", self.basis_size)?;
        writeln!(f, "  Basis-Compatible Candidates: {}", self.candidate_count)?;
        writeln!(f, "  Compatible Columns: {}", self.compatible_count)?;
        writeln!(f, "  Incompatible Columns: {}", self.incompatible_count)
    }
}

/// Builder for `ScreeningStatistics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreeningStatisticsBuilder {
    columns_loaded: usize,
    malformed_lines: u64,
    cover_parse_failures: u64,
    basis_size: usize,
    candidate_count: usize,
    compatible_count: usize,
    incompatible_count: usize,
}

impl ScreeningStatisticsBuilder {
    /// Creates a new `ScreeningStatisticsBuilder` with zeroed counters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of loaded columns.
    #[inline]
    pub fn columns_loaded(mut self, columns_loaded: usize) -> Self {
        self.columns_loaded = columns_loaded;
        self
    }

    /// Sets the number of skipped malformed lines.
    #[inline]
    pub fn malformed_lines(mut self, malformed_lines: u64) -> Self {
        self.malformed_lines = malformed_lines;
        self
    }

    /// Sets the number of excluded columns with unparseable identifiers.
    #[inline]
    pub fn cover_parse_failures(mut self, cover_parse_failures: u64) -> Self {
        self.cover_parse_failures = cover_parse_failures;
        self
    }

    /// Sets the working basis size.
    #[inline]
    pub fn basis_size(mut self, basis_size: usize) -> Self {
        self.basis_size = basis_size;
        self
    }

    /// Sets the number of basis-compatible candidates.
    #[inline]
    pub fn candidate_count(mut self, candidate_count: usize) -> Self {
        self.candidate_count = candidate_count;
        self
    }

    /// Sets the number of compatible columns.
    #[inline]
    pub fn compatible_count(mut self, compatible_count: usize) -> Self {
        self.compatible_count = compatible_count;
        self
    }

    /// Sets the number of incompatible columns.
    #[inline]
    pub fn incompatible_count(mut self, incompatible_count: usize) -> Self {
        self.incompatible_count = incompatible_count;
        self
    }

    /// Builds the `ScreeningStatistics` instance.
    #[inline]
    pub fn build(self) -> ScreeningStatistics {
        ScreeningStatistics {
            columns_loaded: self.columns_loaded,
            malformed_lines: self.malformed_lines,
            cover_parse_failures: self.cover_parse_failures,
            basis_size: self.basis_size,
            candidate_count: self.candidate_count,
            compatible_count: self.compatible_count,
            incompatible_count: self.incompatible_count,
        }
    }
}
