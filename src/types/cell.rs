use serde::{Deserialize, Serialize};
use std::fmt;

/// A single matrix cell value.
///
/// JSON payload scalars decode into the matching variant: strings to
/// [`CellValue::Text`], numbers to [`CellValue::Number`], booleans to
/// [`CellValue::Bool`], and `null` to [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Whether the cell carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for CellValue {
    /// Display label for a cell. Whole numbers render without a trailing
    /// `.0` (f64's default formatting), matching host-environment output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Role flags passed to the cell hook, one invocation per constructed cell.
///
/// Exactly one of the role flags is set; `is_first_data_row` only ever
/// accompanies `is_data_cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInfo {
    pub is_data_cell: bool,
    pub is_first_data_row: bool,
    pub is_column_header: bool,
    pub is_row_header: bool,
}

impl CellInfo {
    /// Flags for a column header cell.
    #[must_use]
    pub fn column_header() -> Self {
        Self {
            is_data_cell: false,
            is_first_data_row: false,
            is_column_header: true,
            is_row_header: false,
        }
    }

    /// Flags for a row header cell.
    #[must_use]
    pub fn row_header() -> Self {
        Self {
            is_data_cell: false,
            is_first_data_row: false,
            is_column_header: false,
            is_row_header: true,
        }
    }

    /// Flags for a data cell, marking whether it sits in the first data row.
    #[must_use]
    pub fn data(first_row: bool) -> Self {
        Self {
            is_data_cell: true,
            is_first_data_row: first_row,
            is_column_header: false,
            is_row_header: false,
        }
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
    use test_case::test_case;

    #[test_case(CellValue::Number(1.0), "1" ; "whole number drops fraction")]
    #[test_case(CellValue::Number(2.5), "2.5" ; "fractional number")]
    #[test_case(CellValue::Number(-0.25), "-0.25" ; "negative fraction")]
    #[test_case(CellValue::Text("hi".to_string()), "hi" ; "text verbatim")]
    #[test_case(CellValue::Bool(true), "true" ; "boolean true")]
    #[test_case(CellValue::Empty, "" ; "empty renders blank")]
    fn display_labels(value: CellValue, expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn json_scalars_decode_to_matching_variants() {
        let values: Vec<CellValue> = serde_json::from_str(r#"["x", 3, true, null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Text("x".to_string()),
                CellValue::Number(3.0),
                CellValue::Bool(true),
                CellValue::Empty,
            ]
        );
    }

    #[test]
    fn exactly_one_role_flag_per_constructor() {
        for info in [
            CellInfo::column_header(),
            CellInfo::row_header(),
            CellInfo::data(false),
            CellInfo::data(true),
        ] {
            let roles = [info.is_data_cell, info.is_column_header, info.is_row_header];
            assert_eq!(roles.iter().filter(|r| **r).count(), 1);
        }
        assert!(CellInfo::data(true).is_first_data_row);
        assert!(!CellInfo::row_header().is_first_data_row);
    }
}
