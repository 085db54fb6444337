//! Structured error types for gridview.
//!
//! Every fallible operation in the crate returns [`Result`] with these types.

/// All errors that can occur while decoding payloads or rendering grids.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// JSON payload decoding error from serde_json.
    #[error("JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Row header count does not match the number of matrix rows.
    #[error("row header count mismatch: {expected} rows but {found} row headers")]
    RowHeaders { expected: usize, found: usize },

    /// A matrix row's length does not match the number of column headers.
    #[error("column count mismatch in row {row}: expected {expected} cells, found {found}")]
    Columns {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Missing or malformed construction payload at a boundary.
    #[error("configuration error: {0}")]
    Config(String),

    /// Element creation or child insertion/removal rejected by the tree.
    #[error("tree operation failed: {0}")]
    Tree(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
