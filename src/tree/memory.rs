//! Host-independent in-memory element tree.
//!
//! Backs the native tests, the HTML exporter, and one-shot rendering.
//! Nodes are shared handles with DOM-like semantics: clones alias the same
//! element, append relocates, and parents are held weakly so dropping a
//! detached subtree frees it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{GridError, Result};

use super::{ElementKind, TreeBackend, TreeNode};

/// Backend producing [`MemoryNode`] elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryTree;

impl MemoryTree {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeBackend for MemoryTree {
    type Node = MemoryNode;

    fn create_element(&self, kind: ElementKind) -> Result<MemoryNode> {
        Ok(MemoryNode::new(kind))
    }
}

struct ElementData {
    kind: ElementKind,
    text: String,
    class: String,
    children: Vec<MemoryNode>,
    parent: Weak<RefCell<ElementData>>,
}

/// A shared handle to one in-memory element.
///
/// Equality is handle identity: two handles are equal when they refer to
/// the same element.
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<ElementData>>);

impl MemoryNode {
    /// Create a detached element of the given kind.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            kind,
            text: String::new(),
            class: String::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    /// Structural kind of this element.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.0.borrow().kind
    }

    /// Current text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Current style classification.
    #[must_use]
    pub fn class(&self) -> String {
        self.0.borrow().class.clone()
    }

    /// Snapshot of the direct children, in tree order.
    #[must_use]
    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.borrow().children.clone()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Direct child at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<MemoryNode> {
        self.0.borrow().children.get(index).cloned()
    }

    /// Current parent, if attached.
    #[must_use]
    pub fn parent_node(&self) -> Option<MemoryNode> {
        self.0.borrow().parent.upgrade().map(MemoryNode)
    }

    fn is_same(&self, other: &MemoryNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether `other` is this element or one of its ancestors.
    fn is_in_ancestry(&self, other: &MemoryNode) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.is_same(other) {
                return true;
            }
            current = node.parent_node();
        }
        false
    }

    fn detach(&self) {
        if let Some(parent) = self.parent_node() {
            parent.0.borrow_mut().children.retain(|c| !c.is_same(self));
        }
        self.0.borrow_mut().parent = Weak::new();
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MemoryNode")
            .field("kind", &data.kind)
            .field("text", &data.text)
            .field("class", &data.class)
            .field("children", &data.children.len())
            .finish()
    }
}

impl TreeNode for MemoryNode {
    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_class(&self, class: &str) {
        self.0.borrow_mut().class = class.to_string();
    }

    fn append_child(&self, child: &Self) -> Result<()> {
        if self.is_in_ancestry(child) {
            return Err(GridError::Tree(
                "cannot append a node into its own subtree".to_string(),
            ));
        }
        child.detach();
        self.0.borrow_mut().children.push(child.clone());
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        Ok(())
    }

    fn remove_child(&self, child: &Self) -> Result<()> {
        let present = self.0.borrow().children.iter().any(|c| c.is_same(child));
        if !present {
            return Err(GridError::Tree(
                "node to remove is not a child of this element".to_string(),
            ));
        }
        self.0.borrow_mut().children.retain(|c| !c.is_same(child));
        child.0.borrow_mut().parent = Weak::new();
        Ok(())
    }

    fn children_of_kind(&self, kind: ElementKind) -> Vec<Self> {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|c| c.kind() == kind)
            .cloned()
            .collect()
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
    fn append_relocates_an_already_parented_node() {
        let first = MemoryNode::new(ElementKind::Row);
        let second = MemoryNode::new(ElementKind::Row);
        let cell = MemoryNode::new(ElementKind::Cell);

        first.append_child(&cell).unwrap();
        assert_eq!(first.child_count(), 1);

        second.append_child(&cell).unwrap();
        assert_eq!(first.child_count(), 0, "old parent keeps no copy");
        assert_eq!(second.child_count(), 1);
        assert_eq!(cell.parent_node().unwrap(), second);
    }

    #[test]
    fn reappend_to_same_parent_moves_to_the_end() {
        let row = MemoryNode::new(ElementKind::Row);
        let a = MemoryNode::new(ElementKind::Cell);
        let b = MemoryNode::new(ElementKind::Cell);
        a.set_text("a");
        b.set_text("b");

        row.append_child(&a).unwrap();
        row.append_child(&b).unwrap();
        row.append_child(&a).unwrap();

        assert_eq!(row.child_count(), 2, "no duplicate entries");
        assert_eq!(row.child(0).unwrap().text(), "b");
        assert_eq!(row.child(1).unwrap().text(), "a");
    }

    #[test]
    fn appending_into_own_subtree_is_rejected() {
        let grid = MemoryNode::new(ElementKind::Grid);
        let section = MemoryNode::new(ElementKind::BodySection);
        grid.append_child(&section).unwrap();

        let self_err = grid.append_child(&grid).unwrap_err();
        assert!(matches!(self_err, GridError::Tree(_)));

        let cycle_err = section.append_child(&grid).unwrap_err();
        assert!(matches!(cycle_err, GridError::Tree(_)));
        assert_eq!(grid.child_count(), 1, "tree unchanged after rejection");
    }

    #[test]
    fn remove_child_clears_the_parent_link() {
        let row = MemoryNode::new(ElementKind::Row);
        let cell = MemoryNode::new(ElementKind::Cell);
        row.append_child(&cell).unwrap();

        row.remove_child(&cell).unwrap();
        assert_eq!(row.child_count(), 0);
        assert!(cell.parent_node().is_none());
    }

    #[test]
    fn remove_of_a_non_child_is_an_error() {
        let row = MemoryNode::new(ElementKind::Row);
        let stranger = MemoryNode::new(ElementKind::Cell);
        let err = row.remove_child(&stranger).unwrap_err();
        assert!(matches!(err, GridError::Tree(_)));
    }

    #[test]
    fn children_of_kind_filters_and_preserves_order() {
        let container = MemoryNode::new(ElementKind::Container);
        let first = MemoryNode::new(ElementKind::Grid);
        let divider = MemoryNode::new(ElementKind::Row);
        let second = MemoryNode::new(ElementKind::Grid);
        container.append_child(&first).unwrap();
        container.append_child(&divider).unwrap();
        container.append_child(&second).unwrap();

        let grids = container.children_of_kind(ElementKind::Grid);
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0], first);
        assert_eq!(grids[1], second);
    }

    #[test]
    fn clones_alias_the_same_element() {
        let cell = MemoryNode::new(ElementKind::Cell);
        let alias = cell.clone();
        alias.set_text("shared");
        assert_eq!(cell.text(), "shared");
        assert_eq!(cell, alias);
    }
}
