//! Field parsing utilities for dataset records
//!
//! This module provides typed access to the tokens of one record block,
//! addressed through the layout schema, with errors that name the record,
//! row offset and column of the offending token.

use crate::app::models::Row;
use crate::constants::layout::FieldPosition;
use crate::{Error, Result};

/// The four rows of one record, with the record name for error context
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    name: &'a str,
    rows: &'a [Row],
}

impl<'a> RecordView<'a> {
    pub fn new(name: &'a str, rows: &'a [Row]) -> Self {
        Self { name, rows }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Tokens of the row at `offset`, empty if the row is absent
    pub fn row(&self, offset: usize) -> &'a [String] {
        self.rows.get(offset).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get a required token
    pub fn token(&self, pos: FieldPosition) -> Result<&'a str> {
        self.row(pos.row)
            .get(pos.column)
            .map(String::as_str)
            .ok_or_else(|| Error::malformed_field(self.name, pos.row, pos.column, "missing token"))
    }

    /// Parse a required float token
    pub fn parse_f64(&self, pos: FieldPosition) -> Result<f64> {
        let value = self.token(pos)?;
        parse_float_token(value).ok_or_else(|| {
            Error::malformed_field(
                self.name,
                pos.row,
                pos.column,
                format!("invalid number '{}'", value),
            )
        })
    }

    /// Parse a required integer token
    pub fn parse_i64(&self, pos: FieldPosition) -> Result<i64> {
        let value = self.token(pos)?;
        value.parse::<i64>().map_err(|e| {
            Error::malformed_field(
                self.name,
                pos.row,
                pos.column,
                format!("invalid integer '{}' ({})", value, e),
            )
        })
    }

    /// Parse `count` consecutive float tokens starting at `start`
    pub fn parse_f64_run(&self, start: FieldPosition, count: usize) -> Result<Vec<f64>> {
        (0..count)
            .map(|i| {
                self.parse_f64(FieldPosition {
                    row: start.row,
                    column: start.column + i,
                })
            })
            .collect()
    }

    /// Parse every float token from `start` up to (not including) `end`
    pub fn parse_f64_span(&self, start: FieldPosition, end: usize) -> Result<Vec<f64>> {
        self.parse_f64_run(start, end.saturating_sub(start.column))
    }
}

/// Parse a dataset number, accepting Fortran-style `d` exponents
pub fn parse_float_token(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .or_else(|| value.replace(['d', 'D'], "e").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            vec!["fo".into(), "3".into(), "1".into(), "1.0".into()],
            vec!["-2172.59".into(), "0.0951".into(), "4.366".into()],
            vec!["0.2333".into(), "1.494d-6".into(), "-603.8".into(), "-1.8697".into()],
            vec!["2.85e-5".into(), "1285".into(), "3.84".into(), "-0.003".into(), "0".into()],
        ]
    }

    #[test]
    fn test_typed_tokens() {
        let rows = rows();
        let view = RecordView::new("fo", &rows);

        assert_eq!(view.token(FieldPosition { row: 0, column: 0 }).unwrap(), "fo");
        assert_eq!(view.parse_i64(FieldPosition { row: 0, column: 1 }).unwrap(), 3);
        assert_eq!(view.parse_f64(FieldPosition { row: 1, column: 0 }).unwrap(), -2172.59);
        assert_eq!(
            view.parse_f64_run(FieldPosition { row: 2, column: 0 }, 4).unwrap(),
            vec![0.2333, 1.494e-6, -603.8, -1.8697]
        );
        assert_eq!(
            view.parse_f64_span(FieldPosition { row: 3, column: 5 }, 5).unwrap(),
            Vec::<f64>::new()
        );
    }

    #[test]
    fn test_errors_carry_position() {
        let rows = rows();
        let view = RecordView::new("fo", &rows);

        let err = view.parse_f64(FieldPosition { row: 1, column: 7 }).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedField { ref record, row: 1, column: 7, .. } if record == "fo"
        ));

        let err = view.parse_i64(FieldPosition { row: 3, column: 0 }).unwrap_err();
        assert!(matches!(err, Error::MalformedField { row: 3, column: 0, .. }));

        assert!(view.row(9).is_empty());
    }

    #[test]
    fn test_parse_float_token() {
        assert_eq!(parse_float_token("1.5"), Some(1.5));
        assert_eq!(parse_float_token("2.0D+3"), Some(2000.0));
        assert_eq!(parse_float_token("abc"), None);
    }
}
