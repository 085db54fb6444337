//! Main GridView struct - the WASM-exported entry point for browser use.
//!
//! Wraps a [`GridRenderer`] over the DOM backend and adapts the JS-facing
//! surface: payloads arrive as plain objects (`{rows, colHeaders,
//! rowHeaders}` and `{caption, appendTable}`), the cell renderer is a JS
//! function receiving `(element, isDataCell, isFirstDataRow,
//! isColumnHeader, isRowHeader)`, and the completion callback is invoked
//! with no arguments.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::error::{GridError, Result};
use crate::renderer::GridRenderer;
use crate::tree::DomTree;
use crate::types::{CellInfo, GridData, GridOptions};

/// Browser grid renderer exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    inner: GridRenderer<DomTree>,
}

#[wasm_bindgen]
impl GridView {
    /// Create a renderer for `container` from JS payloads.
    ///
    /// `data` is required; `options` may be `undefined` or `null` for the
    /// defaults. Function-valued `cellRenderer` and `callback` members of
    /// `options` are picked up here; both can also be (re)set later through
    /// the setters.
    ///
    /// # Errors
    /// Throws when `data` is absent or either payload does not decode.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: Element,
        data: JsValue,
        options: JsValue,
    ) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let cell_renderer = function_member(&options, "cellRenderer");
        let callback = function_member(&options, "callback");
        let data = decode_data(data)?;
        let options = decode_options(options)?;
        let backend = match container.owner_document() {
            Some(document) => DomTree::new(document),
            None => DomTree::from_window()?,
        };
        let mut view = GridView {
            inner: GridRenderer::new(backend, container, data, options),
        };
        view.set_cell_renderer(cell_renderer);
        view.set_callback(callback);
        Ok(view)
    }

    /// Register a JS cell renderer, or clear it with `null`/`undefined`.
    ///
    /// The function receives each constructed cell (the blank corner
    /// excluded) and its role flags, and its return value is attached in
    /// the cell's place. A throw or a non-element return keeps the built
    /// cell.
    #[wasm_bindgen]
    pub fn set_cell_renderer(&mut self, renderer: Option<Function>) {
        match renderer {
            Some(function) => self
                .inner
                .set_cell_hook(move |cell, info| invoke_cell_renderer(&function, cell, info)),
            None => self.inner.clear_cell_hook(),
        }
    }

    /// Register a JS completion callback, or clear it with `null`/`undefined`.
    #[wasm_bindgen]
    pub fn set_callback(&mut self, callback: Option<Function>) {
        match callback {
            Some(function) => self.inner.set_on_complete(move || {
                let _ = function.call0(&JsValue::NULL);
            }),
            None => self.inner.clear_on_complete(),
        }
    }

    /// Build the grid and attach it to the container.
    ///
    /// # Errors
    /// Throws on shape mismatches or rejected DOM operations; the
    /// container is left unchanged in that case.
    #[wasm_bindgen]
    pub fn render(&mut self) -> std::result::Result<(), JsValue> {
        Ok(self.inner.render()?)
    }

    /// Remove every grid previously rendered into the container.
    ///
    /// # Errors
    /// Throws when the DOM rejects a removal.
    #[wasm_bindgen]
    pub fn destroy(&mut self) -> std::result::Result<(), JsValue> {
        Ok(self.inner.destroy()?)
    }
}

fn function_member(options: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(options, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn invoke_cell_renderer(function: &Function, cell: Element, info: CellInfo) -> Element {
    let args = js_sys::Array::of5(
        cell.as_ref(),
        &JsValue::from_bool(info.is_data_cell),
        &JsValue::from_bool(info.is_first_data_row),
        &JsValue::from_bool(info.is_column_header),
        &JsValue::from_bool(info.is_row_header),
    );
    match function.apply(&JsValue::NULL, &args) {
        Ok(value) => value.dyn_into::<Element>().unwrap_or(cell),
        Err(_) => cell,
    }
}

pub(crate) fn decode_data(data: JsValue) -> Result<GridData> {
    if data.is_undefined() || data.is_null() {
        return Err(GridError::Config(
            "grid data payload is required".to_string(),
        ));
    }
    serde_wasm_bindgen::from_value(data)
        .map_err(|e| GridError::Config(format!("invalid grid data: {e}")))
}

pub(crate) fn decode_options(options: JsValue) -> Result<GridOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(GridOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| GridError::Config(format!("invalid grid options: {e}")))
}
