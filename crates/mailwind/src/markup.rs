//! A plain markup serializer for processed trees.
//!
//! Enough to inspect results and feed simple pipelines: attributes and text
//! are escaped, raw nodes are written verbatim, components are rendered in
//! place. It makes no attempt at email-client specific output.

use std::fmt::Write;

use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes `node` to markup.
pub fn to_markup(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape(text, false)),
        Node::Raw(markup) => out.push_str(markup),
        Node::Fragment(children) => children.iter().for_each(|child| write_node(out, child)),
        Node::Component(component) => write_node(out, &component.render()),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let _ = write!(out, "<{}", element.tag);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
    }
    if let Some(class_name) = &element.class_name {
        let _ = write!(out, " class=\"{}\"", escape(class_name, true));
    }
    if !element.style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&element.style.to_inline_css(), true));
    }

    if VOID_ELEMENTS.contains(&element.tag.to_ascii_lowercase().as_str()) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use twcss::StyleMap;

    #[test]
    fn serializes_elements_text_and_raw() {
        let node: Node = Element::new("td")
            .attr("align", "center")
            .class("card")
            .style(StyleMap::parse("font-family: \"Inter\", sans-serif").unwrap())
            .child("a < b")
            .child(Element::new("br"))
            .child(Node::raw("<!--[if mso]><![endif]-->"))
            .into();

        insta::assert_snapshot!(
            to_markup(&node),
            @r#"<td align="center" class="card" style="font-family:&quot;Inter&quot;, sans-serif">a &lt; b<br /><!--[if mso]><![endif]--></td>"#
        );
    }
}
