use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

use super::CellValue;

/// The matrix plus its header labels, as supplied at construction time.
///
/// Shape is not checked here; [`GridData::validate`] runs at render time
/// so a renderer can be constructed with not-yet-complete data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    /// Data rows, outer index = row, inner index = column.
    pub rows: Vec<Vec<CellValue>>,
    /// One label per data column.
    pub col_headers: Vec<String>,
    /// One label per data row.
    pub row_headers: Vec<String>,
}

impl GridData {
    pub fn new(
        rows: Vec<Vec<CellValue>>,
        col_headers: Vec<String>,
        row_headers: Vec<String>,
    ) -> Self {
        Self {
            rows,
            col_headers,
            row_headers,
        }
    }

    /// Decode a `{rows, colHeaders, rowHeaders}` JSON payload.
    ///
    /// # Errors
    /// Returns [`GridError::Json`] when the payload is malformed or a
    /// field is missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of data columns, as declared by the column header labels.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.col_headers.len()
    }

    /// Check the shape invariants: one row header per row, and every row
    /// as long as the column header list.
    ///
    /// # Errors
    /// Returns [`GridError::RowHeaders`] or [`GridError::Columns`]
    /// identifying the offending counts.
    pub fn validate(&self) -> Result<()> {
        if self.row_headers.len() != self.rows.len() {
            return Err(GridError::RowHeaders {
                expected: self.rows.len(),
                found: self.row_headers.len(),
            });
        }
        let expected = self.col_headers.len();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(GridError::Columns {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn decodes_camel_case_payload() {
        let data = GridData::from_json(
            r#"{"rows": [[1, "a"], [2, "b"]], "colHeaders": ["N", "S"], "rowHeaders": ["r1", "r2"]}"#,
        )
        .unwrap();
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.column_count(), 2);
        assert_eq!(data.rows[0][0], CellValue::Number(1.0));
        assert_eq!(data.rows[1][1], CellValue::Text("b".to_string()));
        data.validate().unwrap();
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let err = GridData::from_json(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, GridError::Json(_)), "got {err:?}");
    }

    #[test]
    fn validate_flags_row_header_mismatch() {
        let data = GridData::new(
            vec![vec![CellValue::from(1)], vec![CellValue::from(2)]],
            labels(&["A"]),
            labels(&["only one"]),
        );
        let err = data.validate().unwrap_err();
        assert!(
            matches!(
                err,
                GridError::RowHeaders {
                    expected: 2,
                    found: 1
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn validate_flags_short_row_with_its_index() {
        let data = GridData::new(
            vec![
                vec![CellValue::from(1), CellValue::from(2)],
                vec![CellValue::from(3)],
            ],
            labels(&["A", "B"]),
            labels(&["X", "Y"]),
        );
        let err = data.validate().unwrap_err();
        assert!(
            matches!(
                err,
                GridError::Columns {
                    row: 1,
                    expected: 2,
                    found: 1
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn empty_grid_is_valid() {
        GridData::default().validate().unwrap();
    }
}
