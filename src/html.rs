//! Serializes an in-memory grid subtree to an HTML fragment.
//!
//! Used by the one-shot [`render_html`](crate::render_html) entry point
//! and by environments without a live DOM.

use quick_xml::escape::escape;

use crate::tree::MemoryNode;

/// Serialize `node` and its entire subtree to an HTML fragment string.
///
/// Text content and class attributes are markup-escaped; elements without
/// text or children serialize as an open/close pair, never self-closed.
#[must_use]
pub fn to_html(node: &MemoryNode) -> String {
    let mut out = String::with_capacity(1024);
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &MemoryNode) {
    let tag = node.kind().tag_name();
    out.push('<');
    out.push_str(tag);
    let class = node.class();
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&class));
        out.push('"');
    }
    out.push('>');

    let text = node.text();
    if !text.is_empty() {
        out.push_str(&escape(&text));
    }
    for child in node.children() {
        write_node(out, &child);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
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
    use crate::tree::{ElementKind, TreeNode};

    #[test]
    fn escapes_text_content() {
        let cell = MemoryNode::new(ElementKind::Cell);
        cell.set_text("<script>&\"quotes\"</script>");
        assert_eq!(
            to_html(&cell),
            "<td>&lt;script&gt;&amp;&quot;quotes&quot;&lt;/script&gt;</td>"
        );
    }

    #[test]
    fn escapes_class_attribute() {
        let cell = MemoryNode::new(ElementKind::Cell);
        cell.set_class("a\"b");
        assert_eq!(to_html(&cell), "<td class=\"a&quot;b\"></td>");
    }

    #[test]
    fn empty_elements_keep_a_closing_tag() {
        let corner = MemoryNode::new(ElementKind::HeaderCell);
        assert_eq!(to_html(&corner), "<th></th>");
    }

    #[test]
    fn nests_children_in_order() {
        let row = MemoryNode::new(ElementKind::Row);
        let first = MemoryNode::new(ElementKind::Cell);
        first.set_text("1");
        let second = MemoryNode::new(ElementKind::Cell);
        second.set_text("2");
        row.append_child(&first).unwrap();
        row.append_child(&second).unwrap();
        assert_eq!(to_html(&row), "<tr><td>1</td><td>2</td></tr>");
    }
}
