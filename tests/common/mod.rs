//! Common test utilities and assertion helpers.
//!
//! Grids are built through the in-memory backend; the helpers here
//! construct fixture data, drive renders, and inspect the resulting
//! element trees.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::tree::{ElementKind, MemoryNode, MemoryTree, TreeNode};
use gridview::{CellValue, GridData, GridOptions, GridRenderer};

// ============================================================================
// Fixtures
// ============================================================================

/// Shorthand for a list of owned labels.
#[must_use]
pub fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

/// The worked 2x2 example: rows [[1, 2], [3, 4]], columns A/B, rows X/Y.
#[must_use]
pub fn sample_data() -> GridData {
    GridData::new(
        vec![
            vec![CellValue::from(1), CellValue::from(2)],
            vec![CellValue::from(3), CellValue::from(4)],
        ],
        labels(&["A", "B"]),
        labels(&["X", "Y"]),
    )
}

/// A well-formed grid of the given shape, filled with "r<row>c<col>" text.
#[must_use]
pub fn data_with_shape(rows: usize, cols: usize) -> GridData {
    GridData::new(
        (0..rows)
            .map(|r| (0..cols).map(|c| CellValue::from(format!("r{r}c{c}"))).collect())
            .collect(),
        (0..cols).map(|c| format!("col{c}")).collect(),
        (0..rows).map(|r| format!("row{r}")).collect(),
    )
}

/// A fresh, empty container element.
#[must_use]
pub fn container() -> MemoryNode {
    MemoryNode::new(ElementKind::Container)
}

/// A renderer over the in-memory backend sharing the given container
/// handle.
#[must_use]
pub fn renderer_for(
    target: &MemoryNode,
    data: GridData,
    options: GridOptions,
) -> GridRenderer<MemoryTree> {
    GridRenderer::new(MemoryTree::new(), target.clone(), data, options)
}

/// Render once into a fresh container and hand the container back.
#[must_use]
pub fn render_into_container(data: GridData, options: GridOptions) -> MemoryNode {
    let target = container();
    let mut renderer = renderer_for(&target, data, options);
    renderer.render().expect("render should succeed");
    target
}

// ============================================================================
// Tree Inspection
// ============================================================================

/// All grid elements directly under the container, in order.
#[must_use]
pub fn grids(target: &MemoryNode) -> Vec<MemoryNode> {
    target.children_of_kind(ElementKind::Grid)
}

/// The container's only grid; panics unless exactly one exists.
#[must_use]
pub fn single_grid(target: &MemoryNode) -> MemoryNode {
    let found = grids(target);
    assert_eq!(
        found.len(),
        1,
        "expected exactly one grid in the container, found {}",
        found.len()
    );
    found[0].clone()
}

/// The grid's single header row (thead > tr).
#[must_use]
pub fn header_row(grid: &MemoryNode) -> MemoryNode {
    let sections = grid.children_of_kind(ElementKind::HeaderSection);
    assert_eq!(sections.len(), 1, "grid should have one header section");
    let rows = sections[0].children_of_kind(ElementKind::Row);
    assert_eq!(rows.len(), 1, "header section should have one row");
    rows[0].clone()
}

/// The grid's body rows (tbody > tr), in order.
#[must_use]
pub fn body_rows(grid: &MemoryNode) -> Vec<MemoryNode> {
    let sections = grid.children_of_kind(ElementKind::BodySection);
    assert_eq!(sections.len(), 1, "grid should have one body section");
    sections[0].children_of_kind(ElementKind::Row)
}

/// Text of every cell in a row, in order.
#[must_use]
pub fn row_texts(row: &MemoryNode) -> Vec<String> {
    row.children().iter().map(MemoryNode::text).collect()
}

/// Classification of every cell in a row, in order.
#[must_use]
pub fn row_classes(row: &MemoryNode) -> Vec<String> {
    row.children().iter().map(MemoryNode::class).collect()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the number of grids in the container.
pub fn assert_grid_count(target: &MemoryNode, expected: usize) {
    let count = grids(target).len();
    assert_eq!(
        count, expected,
        "grid count mismatch: expected {expected}, got {count}"
    );
}

/// Assert the header row's cell texts, corner included.
pub fn assert_header_texts(grid: &MemoryNode, expected: &[&str]) {
    assert_eq!(
        row_texts(&header_row(grid)),
        expected,
        "header row text mismatch"
    );
}

/// Assert one body row's cell texts, row header included.
pub fn assert_body_row_texts(grid: &MemoryNode, index: usize, expected: &[&str]) {
    let rows = body_rows(grid);
    let row = rows
        .get(index)
        .unwrap_or_else(|| panic!("body row {index} not found ({} rows)", rows.len()));
    assert_eq!(row_texts(row), expected, "body row {index} text mismatch");
}
