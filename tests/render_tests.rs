//! Tests for grid construction: shapes, labels, classifications, captions.
//!
//! The rendered structure is one header row (blank corner plus one header
//! cell per column) and one body row per matrix row (row header cell plus
//! one data cell per column).
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{
    assert_body_row_texts, assert_header_texts, body_rows, container, data_with_shape, header_row,
    labels, render_into_container, renderer_for, row_classes, sample_data, single_grid,
};
use gridview::tree::{ElementKind, TreeNode};
use gridview::{CellValue, GridData, GridOptions};

// ============================================================================
// WORKED EXAMPLE
// ============================================================================

#[test]
fn test_renders_worked_example() {
    let target = render_into_container(sample_data(), GridOptions::default());
    let grid = single_grid(&target);

    assert_header_texts(&grid, &["", "A", "B"]);
    assert_body_row_texts(&grid, 0, &["X", "1", "2"]);
    assert_body_row_texts(&grid, 1, &["Y", "3", "4"]);
    assert_eq!(body_rows(&grid).len(), 2);
}

#[test]
fn test_grid_root_carries_the_grid_class() {
    let target = render_into_container(sample_data(), GridOptions::default());
    let grid = single_grid(&target);
    assert_eq!(grid.kind(), ElementKind::Grid);
    assert_eq!(grid.class(), "table table-bordered table-hover");
}

// ============================================================================
// HEADER ROW
// ============================================================================

#[test]
fn test_header_cells_are_header_kind_with_blank_corner() {
    let target = render_into_container(sample_data(), GridOptions::default());
    let row = header_row(&single_grid(&target));

    let cells = row.children();
    assert_eq!(cells.len(), 3, "corner plus one cell per column");
    for cell in &cells {
        assert_eq!(cell.kind(), ElementKind::HeaderCell);
    }
    assert_eq!(cells[0].text(), "", "corner cell has no label");
    assert_eq!(cells[0].class(), "", "corner cell has no classification");
    assert_eq!(row_classes(&row), ["", "column-header", "column-header"]);
}

#[test]
fn test_header_preserves_column_order() {
    let data = GridData::new(
        vec![vec![CellValue::from(1), CellValue::from(2), CellValue::from(3)]],
        labels(&["first", "second", "third"]),
        labels(&["only"]),
    );
    let target = render_into_container(data, GridOptions::default());
    assert_header_texts(&single_grid(&target), &["", "first", "second", "third"]);
}

// ============================================================================
// BODY ROWS
// ============================================================================

#[test]
fn test_body_cells_are_cell_kind_with_role_classes() {
    let target = render_into_container(sample_data(), GridOptions::default());
    let rows = body_rows(&single_grid(&target));

    for row in &rows {
        let cells = row.children();
        assert_eq!(cells.len(), 3, "row header plus one cell per column");
        for cell in &cells {
            assert_eq!(cell.kind(), ElementKind::Cell);
        }
        assert_eq!(row_classes(row), ["row-header", "data-cell", "data-cell"]);
    }
}

#[test]
fn test_each_body_row_attached_once() {
    let target = render_into_container(data_with_shape(4, 3), GridOptions::default());
    let grid = single_grid(&target);

    let sections = grid.children_of_kind(ElementKind::BodySection);
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections[0].child_count(),
        4,
        "one entry per matrix row, no duplicates"
    );
    for (index, row) in body_rows(&grid).iter().enumerate() {
        assert_eq!(
            row.parent_node().unwrap(),
            sections[0],
            "row {index} is parented to the body section"
        );
    }
}

#[test]
fn test_cell_values_format_as_display_labels() {
    let data = GridData::new(
        vec![vec![
            CellValue::Number(2.5),
            CellValue::Number(7.0),
            CellValue::Bool(false),
            CellValue::Empty,
        ]],
        labels(&["a", "b", "c", "d"]),
        labels(&["r"]),
    );
    let target = render_into_container(data, GridOptions::default());
    assert_body_row_texts(&single_grid(&target), 0, &["r", "2.5", "7", "false", ""]);
}

// ============================================================================
// CAPTION
// ============================================================================

#[test]
fn test_caption_is_the_grids_first_child() {
    let options = GridOptions {
        caption: Some("Sales".to_string()),
        append_table: false,
    };
    let target = render_into_container(sample_data(), options);
    let grid = single_grid(&target);

    let first = grid.child(0).unwrap();
    assert_eq!(first.kind(), ElementKind::Caption);
    assert_eq!(first.text(), "Sales");
    assert_eq!(
        grid.child(1).unwrap().kind(),
        ElementKind::HeaderSection,
        "header section follows the caption"
    );
}

#[test]
fn test_without_caption_header_section_comes_first() {
    let target = render_into_container(sample_data(), GridOptions::default());
    let grid = single_grid(&target);
    assert_eq!(grid.child(0).unwrap().kind(), ElementKind::HeaderSection);
    assert_eq!(grid.child(1).unwrap().kind(), ElementKind::BodySection);
    assert_eq!(grid.child_count(), 2);
}

// ============================================================================
// DEGENERATE SHAPES
// ============================================================================

#[test]
fn test_empty_matrix_renders_header_only() {
    let data = GridData::new(Vec::new(), labels(&["A", "B"]), Vec::new());
    let target = render_into_container(data, GridOptions::default());
    let grid = single_grid(&target);

    assert_header_texts(&grid, &["", "A", "B"]);
    assert!(body_rows(&grid).is_empty(), "no body rows for no data");
}

#[test]
fn test_zero_column_grid_keeps_row_headers() {
    let data = GridData::new(
        vec![Vec::new(), Vec::new()],
        Vec::new(),
        labels(&["X", "Y"]),
    );
    let target = render_into_container(data, GridOptions::default());
    let grid = single_grid(&target);

    assert_header_texts(&grid, &[""]);
    assert_body_row_texts(&grid, 0, &["X"]);
    assert_body_row_texts(&grid, 1, &["Y"]);
}

#[test]
fn test_rerender_rebuilds_rather_than_reuses() {
    let target = container();
    let mut renderer = renderer_for(&target, sample_data(), GridOptions::default());
    renderer.render().unwrap();
    let first = single_grid(&target);

    renderer.render().unwrap();
    let second = single_grid(&target);
    assert_ne!(first, second, "each render produces a fresh grid element");
}
