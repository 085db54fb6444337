//! Browser DOM backend backed by `web_sys`.
//!
//! Grid elements are real DOM elements; the renderer's tree operations map
//! straight onto `Document::create_element` and `Node` child manipulation.

use web_sys::{Document, Element};

use crate::error::{GridError, Result};

use super::{ElementKind, TreeBackend, TreeNode};

/// Backend producing [`web_sys::Element`] nodes from a document.
pub struct DomTree {
    document: Document,
}

impl DomTree {
    /// Backend over the given document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Backend over the current window's document.
    ///
    /// # Errors
    /// Returns [`GridError::Tree`] outside a browsing context.
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::Tree("no document in this context".to_string()))?;
        Ok(Self::new(document))
    }
}

impl TreeBackend for DomTree {
    type Node = Element;

    fn create_element(&self, kind: ElementKind) -> Result<Element> {
        self.document
            .create_element(kind.tag_name())
            .map_err(|e| GridError::Tree(format!("create <{}>: {e:?}", kind.tag_name())))
    }
}

impl TreeNode for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_class(&self, class: &str) {
        self.set_class_name(class);
    }

    fn append_child(&self, child: &Self) -> Result<()> {
        let parent: &web_sys::Node = self.as_ref();
        parent
            .append_child(child.as_ref())
            .map(|_| ())
            .map_err(|e| GridError::Tree(format!("append child: {e:?}")))
    }

    fn remove_child(&self, child: &Self) -> Result<()> {
        let parent: &web_sys::Node = self.as_ref();
        parent
            .remove_child(child.as_ref())
            .map(|_| ())
            .map_err(|e| GridError::Tree(format!("remove child: {e:?}")))
    }

    fn children_of_kind(&self, kind: ElementKind) -> Vec<Self> {
        let collection = self.children();
        let mut matched = Vec::new();
        for index in 0..collection.length() {
            if let Some(element) = collection.item(index) {
                if element.tag_name().eq_ignore_ascii_case(kind.tag_name()) {
                    matched.push(element);
                }
            }
        }
        matched
    }
}
