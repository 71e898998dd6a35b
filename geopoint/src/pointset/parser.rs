//! Parser for comma-delimited point tables.
//!
//! The format is line-based: the first line is a header naming columns,
//! each following line one candidate point. Required columns are `id`,
//! `lon`, `lat`; `name` and `tag` are optional and extra columns are
//! ignored. Fields are split on commas with no quoting support.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use crate::point::{Point, RowError};

/// Error type for point table parsing.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid row at line {line}: {source}")]
    Row { line: usize, source: RowError },
}

impl CsvError {
    /// Whether a bulk loader may drop the offending row and continue.
    ///
    /// Defers to [`RowError::is_skippable`]; IO failures always abort.
    pub fn is_skippable(&self) -> bool {
        match self {
            CsvError::Io(_) => false,
            CsvError::Row { source, .. } => source.is_skippable(),
        }
    }
}

/// Parser for comma-delimited point tables.
pub struct CsvParser;

impl CsvParser {
    /// Parse points from a reader.
    ///
    /// This is a streaming parser that yields one result per data row, in
    /// file order. The caller decides what to do with failed rows.
    pub fn parse<R: Read>(reader: R) -> impl Iterator<Item = Result<Point, CsvError>> {
        CsvRowIterator::new(BufReader::new(reader))
    }
}

/// Iterator that yields points from a comma-delimited table.
struct CsvRowIterator<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    header: Option<Vec<String>>,
}

impl<R: BufRead> CsvRowIterator<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            line_number: 0,
            header: None,
        }
    }
}

impl<R: BufRead> Iterator for CsvRowIterator<R> {
    type Item = Result<Point, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;

                    let line = self
                        .line_buffer
                        .trim_end_matches('\n')
                        .trim_end_matches('\r');

                    // Skip blank lines
                    if line.is_empty() {
                        continue;
                    }

                    let fields: Vec<&str> = line.split(',').collect();

                    match &self.header {
                        None => {
                            // First non-blank line names the columns
                            self.header =
                                Some(fields.iter().map(|name| name.to_string()).collect());
                        }
                        Some(header) => {
                            // Zip header with fields; a short row simply
                            // lacks its trailing keys, surplus fields are
                            // dropped.
                            let row: HashMap<String, String> = header
                                .iter()
                                .zip(fields.iter())
                                .map(|(key, value)| (key.clone(), value.to_string()))
                                .collect();

                            let line_number = self.line_number;
                            return Some(Point::from_row(&row).map_err(|source| CsvError::Row {
                                line: line_number,
                                source,
                            }));
                        }
                    }
                }
                Err(e) => return Some(Err(CsvError::Io(e))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Result<Point, CsvError>> {
        CsvParser::parse(input.as_bytes()).collect()
    }

    #[test]
    fn test_parse_valid_rows_in_order() {
        let rows = collect("id,lon,lat,name,tag\na,121.0,14.6,Manila,poi\nb,122.0,15.6,,\n");
        assert_eq!(rows.len(), 2);
        let a = rows[0].as_ref().unwrap();
        assert_eq!(a.id(), "a");
        assert_eq!(a.name(), Some("Manila"));
        let b = rows[1].as_ref().unwrap();
        assert_eq!(b.id(), "b");
        assert_eq!(b.name(), None);
        assert_eq!(b.tag(), None);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(collect("id,lon,lat\n").is_empty());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = collect("id,lon,lat\n\na,1.0,2.0\n\n");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_ok());
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = collect("id,lon,lat\r\na,1.0,2.0\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().to_tuple(), (1.0, 2.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let rows = collect("id,lon,lat,elevation\na,1.0,2.0,350\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().id(), "a");
    }

    #[test]
    fn test_row_error_carries_line_number() {
        let rows = collect("id,lon,lat\na,1.0,2.0\nb,bad,2.0\n");
        assert_eq!(rows.len(), 2);
        match rows[1].as_ref().unwrap_err() {
            CsvError::Row { line, source } => {
                assert_eq!(*line, 3);
                assert!(source.is_skippable());
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_reports_missing_column() {
        let rows = collect("id,lon,lat\na,1.0\n");
        assert_eq!(rows.len(), 1);
        let err = rows[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            CsvError::Row {
                source: RowError::MissingColumn("lat"),
                ..
            }
        ));
        assert!(!err.is_skippable());
    }
}
