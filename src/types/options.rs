use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Rendering options recognized by the grid renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    /// Optional label rendered above the grid, as its first child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// When true, a new render is added alongside existing grids in the
    /// container instead of replacing them.
    pub append_table: bool,
}

impl GridOptions {
    /// Decode a `{caption?, appendTable?}` JSON payload. Unknown or
    /// absent fields fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`crate::GridError::Json`] when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The fixed classification strings applied to rendered elements.
///
/// Styling is delegated entirely to external style sheets keyed on these
/// names; the renderer never emits inline presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassNames {
    /// Class set on the grid root element.
    pub grid: &'static str,
    /// Class set on each column header cell.
    pub column_header: &'static str,
    /// Class set on each row header cell.
    pub row_header: &'static str,
    /// Class set on each data cell.
    pub data_cell: &'static str,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            grid: "table table-bordered table-hover",
            column_header: "column-header",
            row_header: "row-header",
            data_cell: "data-cell",
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

    #[test]
    fn empty_payload_yields_defaults() {
        let options = GridOptions::from_json("{}").unwrap();
        assert!(options.caption.is_none());
        assert!(!options.append_table);
    }

    #[test]
    fn decodes_camel_case_fields() {
        let options =
            GridOptions::from_json(r#"{"caption": "Sales", "appendTable": true}"#).unwrap();
        assert_eq!(options.caption.as_deref(), Some("Sales"));
        assert!(options.append_table);
    }
}
