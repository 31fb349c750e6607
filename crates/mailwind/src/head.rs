//! Locating the document head and injecting the stylesheet.

use crate::node::{Element, Node};

/// Child indices from the root to a node of the processed tree.
///
/// Components are replaced by their output during processing, so a path
/// only ever steps through elements and fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath {
    indices: Vec<usize>,
}

impl NodePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.indices.pop();
    }

    /// The node at this path, if it still exists.
    pub fn resolve_mut<'a>(&self, root: &'a mut Node) -> Option<&'a mut Node> {
        let mut node = root;
        for &index in &self.indices {
            node = match node {
                Node::Element(element) => element.children.get_mut(index)?,
                Node::Fragment(children) => children.get_mut(index)?,
                Node::Text(_) | Node::Raw(_) | Node::Component(_) => return None,
            };
        }
        Some(node)
    }
}

pub(crate) fn is_head(element: &Element) -> bool {
    element.tag.eq_ignore_ascii_case("head")
}

/// Appends a `<style>` element holding `css` to the element at `path`.
/// Existing children are kept in front of it. Returns `false` if `path`
/// does not lead to an element.
pub fn inject_stylesheet(root: &mut Node, path: &NodePath, css: String) -> bool {
    match path.resolve_mut(root) {
        Some(Node::Element(head)) => {
            head.children
                .push(Element::new("style").child(Node::Raw(css)).into());
            true
        }
        _ => false,
    }
}
