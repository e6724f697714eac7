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

//! # Cover Sequences
//!
//! Column identifiers encode the rows a column covers as delimiter-separated
//! tokens: every token whose first character is a digit denotes a row index,
//! and the token order is the traversal order of the column (a route visiting
//! stops in sequence). This module turns an identifier into that ordered
//! sequence and holds the per-solution cover map.
//!
//! ## Token rule
//!
//! A token is classified by its FIRST character only. Tokens not starting
//! with a digit (including empty tokens) are skipped; tokens starting with a
//! digit are parsed in full as integers, and a token like `12a` is a
//! `ParseTokenError` surfaced to the caller rather than being dropped
//! silently. The resulting sequence is never sorted.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_model::cover::CoverParser;
//!
//! let parser = CoverParser::new();
//! let cover = parser.parse("R_1_3_7").unwrap();
//! let rows: Vec<usize> = cover.rows().iter().map(|r| r.get()).collect();
//! assert_eq!(rows, [1, 3, 7]);
//! ```

use crate::{column::ColumnId, index::RowIndex};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The default token delimiter in column identifiers.
pub const DEFAULT_DELIMITER: char = '_';

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "usize").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// A token error attached to the column whose identifier produced it.
///
/// Returned in bulk by [`CoverMap::from_ids`] so the caller decides whether
/// the offending columns are excluded from screening or abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverParseError {
    /// The column whose identifier failed to parse.
    pub column: ColumnId,
    /// The underlying token failure.
    pub error: ParseTokenError,
}

impl std::fmt::Display for CoverParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column '{}': {}", self.column, self.error)
    }
}

impl std::error::Error for CoverParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An ordered sequence of the rows a column covers.
///
/// Order is the traversal order encoded in the identifier. Covers are short
/// in practice, so the rows live inline up to a small capacity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverSequence {
    rows: SmallVec<[RowIndex; 8]>,
}

impl CoverSequence {
    /// Creates an empty `CoverSequence`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `CoverSequence` from rows in traversal order.
    #[inline]
    pub fn from_rows(rows: impl IntoIterator<Item = RowIndex>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Returns the number of covered rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the column covers no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the covered rows in traversal order.
    #[inline]
    pub fn rows(&self) -> &[RowIndex] {
        &self.rows
    }

    /// Returns `true` if `row` is covered. Linear scan; covers are short.
    #[inline]
    pub fn covers(&self, row: RowIndex) -> bool {
        self.rows.contains(&row)
    }

    /// Iterates over adjacent row pairs in traversal order.
    ///
    /// A sequence with fewer than two rows yields nothing.
    #[inline]
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (RowIndex, RowIndex)> + '_ {
        self.rows.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A configurable parser from column identifiers to cover sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverParser {
    delimiter: char,
}

impl Default for CoverParser {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CoverParser {
    /// Creates a new `CoverParser` with the default delimiter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token delimiter.
    #[inline]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses `identifier` into its ordered cover sequence.
    ///
    /// Tokens not starting with a digit are skipped. A digit-leading token
    /// that fails full integer conversion is an error; nothing of the
    /// identifier is returned in that case.
    pub fn parse(&self, identifier: &str) -> Result<CoverSequence, ParseTokenError> {
        let mut rows: SmallVec<[RowIndex; 8]> = SmallVec::new();
        for token in identifier.split(self.delimiter) {
            let leads_with_digit = token.chars().next().is_some_and(|c| c.is_ascii_digit());
            if !leads_with_digit {
                continue;
            }
            let row = token.parse::<usize>().map_err(|_| ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<usize>(),
            })?;
            rows.push(RowIndex::new(row));
        }
        Ok(CoverSequence { rows })
    }
}

/// Covered-row sequences for the columns of one solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverMap {
    covers: FxHashMap<ColumnId, CoverSequence>,
}

impl CoverMap {
    /// Creates an empty `CoverMap`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every identifier in `ids`.
    ///
    /// Columns whose identifier fails to parse are left out of the map and
    /// returned as failures; the caller decides whether that excludes the
    /// column or aborts the run.
    pub fn from_ids<'a, I>(ids: I, parser: &CoverParser) -> (Self, Vec<CoverParseError>)
    where
        I: IntoIterator<Item = &'a ColumnId>,
    {
        let mut covers = FxHashMap::default();
        let mut failures = Vec::new();
        for id in ids {
            match parser.parse(id.as_str()) {
                Ok(cover) => {
                    covers.insert(id.clone(), cover);
                }
                Err(error) => failures.push(CoverParseError {
                    column: id.clone(),
                    error,
                }),
            }
        }
        (Self { covers }, failures)
    }

    /// Returns the cover sequence of `id`, if it parsed.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&CoverSequence> {
        self.covers.get(id)
    }

    /// Inserts a cover sequence for `id`.
    #[inline]
    pub fn insert(&mut self, id: ColumnId, cover: CoverSequence) {
        self.covers.insert(id, cover);
    }

    /// Returns the number of parsed covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    /// Returns `true` if the map holds no covers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    /// Iterates over the parsed covers.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &CoverSequence)> {
        self.covers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ri(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    #[test]
    fn test_parses_rows_in_identifier_order() {
        let parser = CoverParser::new();
        let cover = parser.parse("R_1_3_7").unwrap();
        assert_eq!(cover.rows(), &[ri(1), ri(3), ri(7)]);
    }

    #[test]
    fn test_order_is_traversal_order_not_sorted() {
        let parser = CoverParser::new();
        let cover = parser.parse("C_7_3_5").unwrap();
        assert_eq!(cover.rows(), &[ri(7), ri(3), ri(5)]);
    }

    #[test]
    fn test_parsing_is_deterministic_and_idempotent() {
        let parser = CoverParser::new();
        let first = parser.parse("R_2_9_4").unwrap();
        let second = parser.parse("R_2_9_4").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_skips_non_numeric_and_empty_tokens() {
        let parser = CoverParser::new();
        let cover = parser.parse("veh__A_12_x9_5").unwrap();
        // "veh", "", "A" and "x9" are skipped; "12" and "5" are rows.
        assert_eq!(cover.rows(), &[ri(12), ri(5)]);
    }

    #[test]
    fn test_digit_leading_garbage_token_is_an_error() {
        let parser = CoverParser::new();
        let err = parser.parse("R_12a_3").unwrap_err();
        assert_eq!(err.token, "12a");
        assert!(err.type_name.contains("usize"));
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = CoverParser::new().delimiter('-');
        let cover = parser.parse("R-4-8").unwrap();
        assert_eq!(cover.rows(), &[ri(4), ri(8)]);
    }

    #[test]
    fn test_covers_and_adjacent_pairs() {
        let cover = CoverSequence::from_rows([ri(2), ri(3), ri(9)]);
        assert!(cover.covers(ri(2)));
        assert!(cover.covers(ri(9)));
        assert!(!cover.covers(ri(4)));

        let pairs: Vec<_> = cover.adjacent_pairs().collect();
        assert_eq!(pairs, [(ri(2), ri(3)), (ri(3), ri(9))]);
    }

    #[test]
    fn test_short_sequences_yield_no_pairs() {
        assert_eq!(CoverSequence::new().adjacent_pairs().count(), 0);
        let single = CoverSequence::from_rows([ri(5)]);
        assert_eq!(single.adjacent_pairs().count(), 0);
    }

    #[test]
    fn test_cover_map_collects_failures_per_column() {
        let parser = CoverParser::new();
        let good = ColumnId::from("A_1_2");
        let bad = ColumnId::from("B_3x_4");
        let ids = [good.clone(), bad.clone()];

        let (map, failures) = CoverMap::from_ids(ids.iter(), &parser);

        assert_eq!(map.len(), 1);
        assert!(map.get("A_1_2").is_some());
        assert!(map.get("B_3x_4").is_none());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].column, bad);
        assert_eq!(failures[0].error.token, "3x");
    }
}
