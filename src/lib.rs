//! gridview - labeled-matrix grid renderer for the web
//!
//! Renders a data matrix with row and column headers as a static grid of
//! cells inside a host container:
//! - browser DOM output via WebAssembly
//! - host-independent in-memory tree and HTML export for native use
//! - per-cell hook and completion callback extension points
//! - fail-fast shape checking; a failed render leaves the container untouched
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const view = new GridView(container, {
//!     rows: [[1, 2], [3, 4]],
//!     colHeaders: ['A', 'B'],
//!     rowHeaders: ['X', 'Y'],
//! }, { caption: 'Sales' });
//! view.render();
//! ```

pub mod error;
pub mod html;
pub mod renderer;
pub mod tree;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use renderer::{CellHook, CompletionCallback, GridRenderer};
#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

pub use types::*;

use crate::tree::{ElementKind, MemoryNode, MemoryTree, TreeNode};

/// Render a grid to an HTML fragment string, without a host tree.
///
/// Builds the grid through the in-memory backend and serializes it with
/// [`html::to_html`]. The container is fresh, so the result is exactly one
/// grid's markup.
///
/// # Errors
/// Returns a shape error when the data is inconsistent.
pub fn render_html(data: &GridData, options: &GridOptions) -> Result<String> {
    let container = MemoryNode::new(ElementKind::Container);
    let mut renderer = GridRenderer::new(
        MemoryTree::new(),
        container.clone(),
        data.clone(),
        options.clone(),
    );
    renderer.render()?;
    Ok(container
        .children_of_kind(ElementKind::Grid)
        .iter()
        .map(html::to_html)
        .collect())
}

/// Render a JS payload straight to an HTML fragment string.
///
/// More convenient than [`GridView`] when no live DOM container is
/// involved (server-side rendering, workers).
///
/// # Errors
/// Returns an error when a payload does not decode or the data shape is
/// inconsistent.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn grid_html(data: JsValue, options: JsValue) -> std::result::Result<String, JsValue> {
    let data = viewer::decode_data(data)?;
    let options = viewer::decode_options(options)?;
    Ok(render_html(&data, &options)?)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
