//! The grid renderer: builds a labeled matrix into a container.
//!
//! `GridRenderer` is generic over a [`TreeBackend`], so the same build
//! logic drives both the browser DOM and the in-memory tree used by the
//! HTML exporter and the native tests.

use crate::error::Result;
use crate::tree::{ElementKind, TreeBackend, TreeNode};
use crate::types::{CellInfo, ClassNames, GridData, GridOptions};

/// Per-cell hook: receives each constructed cell (the blank corner cell
/// excluded) with its role flags, and returns the cell to attach in its
/// place.
pub type CellHook<N> = Box<dyn FnMut(N, CellInfo) -> N>;

/// Invoked once per successful render, after the grid is attached.
pub type CompletionCallback = Box<dyn FnMut()>;

/// Renders a [`GridData`] matrix into a container element.
///
/// A renderer owns no elements beyond the container handle it was given;
/// each [`render`](Self::render) call builds a fresh grid and attaches it
/// as a child of that container.
pub struct GridRenderer<B: TreeBackend> {
    backend: B,
    container: B::Node,
    data: GridData,
    options: GridOptions,
    classes: ClassNames,
    cell_hook: Option<CellHook<B::Node>>,
    on_complete: Option<CompletionCallback>,
}

impl<B: TreeBackend> GridRenderer<B> {
    pub fn new(backend: B, container: B::Node, data: GridData, options: GridOptions) -> Self {
        Self {
            backend,
            container,
            data,
            options,
            classes: ClassNames::default(),
            cell_hook: None,
            on_complete: None,
        }
    }

    /// Install the per-cell hook.
    pub fn set_cell_hook(&mut self, hook: impl FnMut(B::Node, CellInfo) -> B::Node + 'static) {
        self.cell_hook = Some(Box::new(hook));
    }

    /// Remove the per-cell hook.
    pub fn clear_cell_hook(&mut self) {
        self.cell_hook = None;
    }

    /// Install the completion callback.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Remove the completion callback.
    pub fn clear_on_complete(&mut self) {
        self.on_complete = None;
    }

    /// The matrix and header labels this renderer was configured with.
    #[must_use]
    pub fn data(&self) -> &GridData {
        &self.data
    }

    /// The rendering options this renderer was configured with.
    #[must_use]
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Build the grid and attach it to the container.
    ///
    /// The grid is assembled off-container first; unless append mode is
    /// set, previously rendered grids are then removed, and the new grid
    /// is attached. The completion callback fires last. A failed render
    /// leaves the container untouched, previously rendered grids included.
    ///
    /// # Errors
    /// Returns [`crate::GridError::RowHeaders`] or
    /// [`crate::GridError::Columns`] when the data shape is inconsistent,
    /// or [`crate::GridError::Tree`] when the host rejects an operation.
    pub fn render(&mut self) -> Result<()> {
        self.data.validate()?;
        let grid = self.build_grid()?;

        if !self.options.append_table {
            self.destroy()?;
        }
        self.container.append_child(&grid)?;

        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        Ok(())
    }

    /// Remove every grid previously rendered into the container.
    ///
    /// Only grid elements are touched; other children of the container are
    /// left alone. Calling this when no grid exists is a no-op.
    ///
    /// # Errors
    /// Returns [`crate::GridError::Tree`] when the host rejects a removal.
    pub fn destroy(&mut self) -> Result<()> {
        for grid in self.container.children_of_kind(ElementKind::Grid) {
            self.container.remove_child(&grid)?;
        }
        Ok(())
    }

    fn build_grid(&mut self) -> Result<B::Node> {
        let Self {
            backend,
            data,
            options,
            classes,
            cell_hook,
            ..
        } = self;

        let grid = backend.create_element(ElementKind::Grid)?;
        grid.set_class(classes.grid);

        if let Some(caption) = options.caption.as_deref() {
            let node = backend.create_element(ElementKind::Caption)?;
            node.set_text(caption);
            grid.append_child(&node)?;
        }

        // Header row: blank corner cell above the row header column, then
        // one labeled cell per column. The corner is never hooked.
        let header = backend.create_element(ElementKind::HeaderSection)?;
        let header_row = backend.create_element(ElementKind::Row)?;
        let corner = backend.create_element(ElementKind::HeaderCell)?;
        header_row.append_child(&corner)?;
        for label in &data.col_headers {
            let cell = backend.create_element(ElementKind::HeaderCell)?;
            cell.set_text(label);
            cell.set_class(classes.column_header);
            let cell = hooked(cell_hook, cell, CellInfo::column_header());
            header_row.append_child(&cell)?;
        }
        header.append_child(&header_row)?;
        grid.append_child(&header)?;

        // Body: one row per matrix row, led by its row header cell. Each
        // row is appended once, after all of its cells are in place.
        let body = backend.create_element(ElementKind::BodySection)?;
        for (index, (cells, label)) in data.rows.iter().zip(&data.row_headers).enumerate() {
            let row = backend.create_element(ElementKind::Row)?;

            let head = backend.create_element(ElementKind::Cell)?;
            head.set_text(label);
            head.set_class(classes.row_header);
            let head = hooked(cell_hook, head, CellInfo::row_header());
            row.append_child(&head)?;

            for value in cells {
                let cell = backend.create_element(ElementKind::Cell)?;
                cell.set_text(&value.to_string());
                cell.set_class(classes.data_cell);
                let cell = hooked(cell_hook, cell, CellInfo::data(index == 0));
                row.append_child(&cell)?;
            }
            body.append_child(&row)?;
        }
        grid.append_child(&body)?;

        Ok(grid)
    }
}

fn hooked<N>(hook: &mut Option<CellHook<N>>, cell: N, info: CellInfo) -> N {
    match hook.as_mut() {
        Some(f) => f(cell, info),
        None => cell,
    }
}
