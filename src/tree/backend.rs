//! Tree backend traits for pluggable element-tree implementations.
//!
//! This module defines the `TreeBackend` and `TreeNode` traits that abstract
//! element construction and mutation, allowing different hosts (browser DOM,
//! in-memory tree) to be used interchangeably.

use crate::error::Result;

/// The structural element kinds a grid is built from, with their fixed
/// markup tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Host container (`div`).
    Container,
    /// Grid root (`table`).
    Grid,
    /// Grid caption (`caption`).
    Caption,
    /// Header section (`thead`).
    HeaderSection,
    /// Body section (`tbody`).
    BodySection,
    /// A row in either section (`tr`).
    Row,
    /// Column header cell, also the blank corner (`th`).
    HeaderCell,
    /// Body cell: row headers and data cells (`td`).
    Cell,
}

impl ElementKind {
    /// Markup tag name for this kind.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Container => "div",
            Self::Grid => "table",
            Self::Caption => "caption",
            Self::HeaderSection => "thead",
            Self::BodySection => "tbody",
            Self::Row => "tr",
            Self::HeaderCell => "th",
            Self::Cell => "td",
        }
    }
}

/// A handle to one element in a host tree.
///
/// Handles are cheap to clone and refer to the same underlying element;
/// mutating through one clone is visible through the others, as with DOM
/// node references.
pub trait TreeNode: Clone {
    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Replace the element's style classification.
    fn set_class(&self, class: &str);

    /// Append `child` as the last child. A child that already has a parent
    /// is relocated, not duplicated.
    ///
    /// # Errors
    /// Returns [`crate::GridError::Tree`] when the host rejects the
    /// insertion (for example appending a node into its own subtree).
    fn append_child(&self, child: &Self) -> Result<()>;

    /// Remove a direct child.
    ///
    /// # Errors
    /// Returns [`crate::GridError::Tree`] when `child` is not a child of
    /// this element.
    fn remove_child(&self, child: &Self) -> Result<()>;

    /// Direct children matching the given kind, in tree order.
    fn children_of_kind(&self, kind: ElementKind) -> Vec<Self>;
}

/// Factory for tree elements; the seam between the renderer and the host.
pub trait TreeBackend {
    type Node: TreeNode;

    /// Create a detached element of the given kind.
    ///
    /// # Errors
    /// Returns [`crate::GridError::Tree`] when the host cannot create the
    /// element.
    fn create_element(&self, kind: ElementKind) -> Result<Self::Node>;
}
