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

//! # Persisted Records
//!
//! The serialization boundary of the pipeline: the compatibility record
//! (`<id> : <linked...>`, one line per candidate) and the classification
//! records (`<id> : <value> (obj: <coefficient>)`, one line per column).
//! Writers are generic over `io::Write` with `_to_path` conveniences, so
//! tests round-trip through in-memory buffers without touching the
//! filesystem.
//!
//! Reading a compatibility record yields the identifier set it implies: the
//! key of every line plus every listed identifier. The `:` separator is
//! recognized and never treated as an identifier.

use capstan_model::{
    column::{Column, ColumnId},
    num::CoefficientNum,
};
use capstan_screen::relation::{CompatibilityRelation, CompatibleSet};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// The error type for record reading and writing.
#[derive(Debug)]
pub enum RecordError {
    /// An I/O error occurred while opening, reading or writing a record.
    Io(std::io::Error),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Writes a compatibility relation record.
///
/// One line per candidate: `<id> :` followed by the linked identifiers.
/// Iteration order is implementation defined.
pub fn write_relation<W>(relation: &CompatibilityRelation, mut w: W) -> Result<(), RecordError>
where
    W: Write,
{
    for (id, linked) in relation.iter() {
        write!(w, "{} :", id)?;
        for other in linked {
            write!(w, " {}", other)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes a compatibility relation record to a file path.
#[inline]
pub fn write_relation_to_path<P>(relation: &CompatibilityRelation, path: P) -> Result<(), RecordError>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_relation(relation, BufWriter::new(file))
}

/// Reads a compatibility record into the identifier set it implies.
pub fn read_compatible_set<R>(rdr: R) -> Result<CompatibleSet, RecordError>
where
    R: BufRead,
{
    let mut set = CompatibleSet::new();
    for line in rdr.lines() {
        let line = line.map_err(RecordError::Io)?;
        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else { continue };
        set.insert(ColumnId::from(key));
        for token in tokens {
            if token == ":" {
                continue;
            }
            set.insert(ColumnId::from(token));
        }
    }
    Ok(set)
}

/// Reads a compatibility record from a file path.
#[inline]
pub fn read_compatible_set_from_path<P>(path: P) -> Result<CompatibleSet, RecordError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_compatible_set(BufReader::new(file))
}

/// Writes one classification bucket.
///
/// One line per column: `<id> : <value> (obj: <coefficient>)`. Iteration
/// order is implementation defined.
pub fn write_coefficients<'a, T, W, I>(columns: I, mut w: W) -> Result<(), RecordError>
where
    T: CoefficientNum + 'a,
    W: Write,
    I: IntoIterator<Item = (&'a ColumnId, &'a Column<T>)>,
{
    for (id, column) in columns {
        writeln!(w, "{} : {} (obj: {})", id, column.value(), column.objective())?;
    }
    Ok(())
}

/// Writes one classification bucket to a file path.
#[inline]
pub fn write_coefficients_to_path<'a, T, P, I>(columns: I, path: P) -> Result<(), RecordError>
where
    T: CoefficientNum + 'a,
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a ColumnId, &'a Column<T>)>,
{
    let file = File::create(path)?;
    write_coefficients(columns, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::diag::NoOpSink;
    use capstan_model::loading::SolutionLoader;

    fn id(s: &str) -> ColumnId {
        ColumnId::from(s)
    }

    #[test]
    fn test_relation_record_round_trips_to_compatible_set() {
        let mut relation = CompatibilityRelation::new();
        relation.insert(id("A_1_2"), vec![id("B_5_6"), id("C_8_9")]);
        relation.insert(id("B_5_6"), vec![id("A_1_2")]);

        let mut buffer = Vec::new();
        write_relation(&relation, &mut buffer).expect("write");

        let set = read_compatible_set(buffer.as_slice()).expect("read");
        assert_eq!(set, relation.compatible_set());
    }

    #[test]
    fn test_separator_token_never_enters_the_set() {
        let record = "A_1 : B_2 C_3\n";
        let set = read_compatible_set(record.as_bytes()).expect("read");

        assert_eq!(set.len(), 3);
        assert!(set.contains("A_1"));
        assert!(set.contains("B_2"));
        assert!(set.contains("C_3"));
        assert!(!set.contains(":"));
    }

    #[test]
    fn test_candidate_with_empty_link_list_is_still_in_set() {
        let record = "LONELY_4_5 :\n";
        let set = read_compatible_set(record.as_bytes()).expect("read");
        assert_eq!(set.len(), 1);
        assert!(set.contains("LONELY_4_5"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let record = "\nA_1 : B_2\n\n";
        let set = read_compatible_set(record.as_bytes()).expect("read");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_classification_record_round_trips_through_loader() {
        let columns = vec![
            (id("A_1_2"), Column::new(1.0f64, 5.0)),
            (id("B_3_4"), Column::new(0.25, 7.5)),
        ];

        let mut buffer = Vec::new();
        write_coefficients(columns.iter().map(|(i, c)| (i, c)), &mut buffer).expect("write");

        let text = String::from_utf8(buffer).expect("utf8");
        let loader = SolutionLoader::<f64>::new().skip_header(false);
        let mut sink = NoOpSink;
        let reloaded = loader.from_str(&text, &mut sink).expect("load");

        assert_eq!(reloaded.len(), columns.len());
        for (id, column) in &columns {
            let got = reloaded.get(id.as_str()).expect("column present");
            assert_eq!(got.value(), column.value());
            assert_eq!(got.objective(), column.objective());
        }
    }

    #[test]
    fn test_missing_record_file_is_an_io_error() {
        let res = read_compatible_set_from_path("definitely/not/here.txt");
        assert!(matches!(res, Err(RecordError::Io(_))));
    }
}
