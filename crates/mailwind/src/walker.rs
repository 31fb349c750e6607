//! Tree traversal.
//!
//! Visits every node depth-first in document order. Components are
//! rendered and their output is visited in their place, however many
//! layers deep the indirection goes. Elements with a class attribute get
//! their unconditional declarations inlined and their conditional ones
//! handed to the [`ResponsiveStyles`] aggregator.

use twcss::{StyleMap, UtilityCompiler};

use crate::head::{NodePath, is_head};
use crate::inline::merge_inline_styles;
use crate::node::{Element, Node};
use crate::responsive::ResponsiveStyles;

pub(crate) struct Walker<'a> {
    compiler: &'a UtilityCompiler,
    styles: ResponsiveStyles,
    path: NodePath,
    head: Option<NodePath>,
}

impl<'a> Walker<'a> {
    pub fn new(compiler: &'a UtilityCompiler, styles: ResponsiveStyles) -> Self {
        Self {
            compiler,
            styles,
            path: NodePath::new(),
            head: None,
        }
    }

    /// The collected stylesheet and the first head found, if any.
    pub fn finish(self) -> (ResponsiveStyles, Option<NodePath>) {
        (self.styles, self.head)
    }

    pub fn visit(&mut self, node: Node) -> Node {
        match node {
            Node::Element(element) => Node::Element(self.visit_element(element)),
            Node::Fragment(children) => Node::Fragment(self.visit_children(children)),
            Node::Component(mut component) => {
                let name = component.component.name().to_string();
                log::trace!("rendering component {}", name);
                let props = &mut component.props;
                self.apply_classes(&name, &mut props.class_name, &mut props.style, false);
                let rendered = component.render();
                self.visit(rendered)
            }
            Node::Text(_) | Node::Raw(_) => node,
        }
    }

    fn visit_children(&mut self, children: Vec<Node>) -> Vec<Node> {
        children
            .into_iter()
            .enumerate()
            .map(|(index, child)| {
                self.path.push(index);
                let child = self.visit(child);
                self.path.pop();
                child
            })
            .collect()
    }

    fn visit_element(&mut self, mut element: Element) -> Element {
        if self.head.is_none() && is_head(&element) {
            log::debug!("head found at {:?}", self.path.indices());
            self.head = Some(self.path.clone());
        }

        self.apply_classes(&element.tag, &mut element.class_name, &mut element.style, true);

        let children = std::mem::take(&mut element.children);
        element.children = self.visit_children(children);
        element
    }

    /// Resolves a class attribute, merging the unconditional declarations
    /// into `style`. With `consume`, resolved utilities are removed from the
    /// attribute and only names that are not utilities stay. The marker, if
    /// conditional rules were recorded, is appended.
    ///
    /// Component props are resolved without consuming, before the component
    /// renders: a component may forward either its `style` or its class
    /// names, and both carry the resolved result. Visiting the output again
    /// reuses the marker and records nothing new.
    fn apply_classes(
        &mut self,
        owner: &str,
        class_name: &mut Option<String>,
        style: &mut StyleMap,
        consume: bool,
    ) {
        let Some(source) = class_name.take() else {
            return;
        };

        let compiled = self.compiler.compile(&source);
        let mut marker = compiled
            .iter()
            .map(|resolved| &resolved.token.raw)
            .find(|raw| self.styles.is_marker(raw))
            .cloned();
        let mut kept = Vec::new();
        let mut unconditional = Vec::new();

        for resolved in compiled {
            if marker.as_ref() == Some(&resolved.token.raw) {
                continue;
            }
            if !resolved.is_resolved() {
                kept.push(resolved.token.raw);
                continue;
            }
            if !consume {
                kept.push(resolved.token.raw.clone());
            }
            for declaration in resolved.declarations {
                if declaration.is_conditional() {
                    let marker = marker.get_or_insert_with(|| self.styles.allocate_marker());
                    self.styles.record(marker, &declaration, &resolved.token.raw);
                } else {
                    unconditional.push(declaration);
                }
            }
        }

        log::trace!(
            "<{}> class=\"{}\": {} inline declarations, marker {:?}",
            owner,
            source,
            unconditional.len(),
            marker
        );

        *style = merge_inline_styles(style, &unconditional);
        kept.extend(marker);
        *class_name = (!kept.is_empty()).then(|| kept.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Props;

    fn walk(node: Node) -> (Node, ResponsiveStyles, Option<NodePath>) {
        let compiler = UtilityCompiler::default();
        let mut walker = Walker::new(&compiler, ResponsiveStyles::default());
        let node = walker.visit(node);
        let (styles, head) = walker.finish();
        (node, styles, head)
    }

    #[test]
    fn unstyled_elements_are_unchanged() {
        let input: Node = Element::new("p").attr("id", "x").child("plain").into();
        let (output, styles, _) = walk(input.clone());
        assert_eq!(output, input);
        assert!(styles.is_empty());
    }

    #[test]
    fn classes_are_consumed_and_unknown_ones_kept() {
        let (output, _, _) = walk(Element::new("div").class("card bg-white p-2").into());
        let element = output.as_element().unwrap();
        assert_eq!(element.class_name.as_deref(), Some("card"));
        assert_eq!(element.style.to_inline_css(), "background-color:#fff;padding:0.5rem");
    }

    #[test]
    fn conditional_classes_get_a_marker() {
        let (output, styles, _) = walk(Element::new("div").class("p-2 sm:p-4 hover:underline").into());
        let element = output.as_element().unwrap();
        assert_eq!(element.class_name.as_deref(), Some("tw-rsp-0"));
        assert_eq!(element.style.to_inline_css(), "padding:0.5rem");
        assert_eq!(styles.len(), 2);
        assert_eq!(styles.marker_count(), 1);
    }

    #[test]
    fn first_head_is_recorded_through_components() {
        let layout = |props: &Props| -> Node {
            Element::new("html").children(props.children.clone()).into()
        };
        let tree = Node::component(
            layout,
            Props::new()
                .child(Element::new("body"))
                .child(Element::new("head"))
                .child(Element::new("head")),
        );
        let (_, _, head) = walk(tree);
        assert_eq!(head.unwrap().indices(), [1]);
    }

    #[test]
    fn component_props_are_resolved_before_rendering() {
        let hr = |props: &Props| -> Node {
            let mut style: StyleMap = [("width", "100%"), ("border", "none")].into_iter().collect();
            for (property, value) in props.style.iter() {
                style.insert(property, value);
            }
            Element::new("hr")
                .style(style)
                .class(props.class_name.clone().unwrap_or_default())
                .into()
        };
        let (output, styles, _) = walk(Node::component(hr, Props::new().class("w-12 sm:w-full")));

        let element = output.as_element().unwrap();
        assert_eq!(element.style.get("width"), Some("3rem"));
        assert_eq!(element.class_name.as_deref(), Some("tw-rsp-0"));
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.marker_count(), 1);
    }

    #[test]
    fn text_is_not_scanned() {
        let input: Node = Element::new("p")
            .style(StyleMap::new())
            .child("bg-red-500")
            .into();
        let (output, styles, _) = walk(input.clone());
        assert_eq!(output, input);
        assert!(styles.is_empty());
    }
}
