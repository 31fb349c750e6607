//! The markup tree.
//!
//! Trees are built from plain elements, text, raw markup, fragments and
//! components. A component is anything that can turn its [`Props`] into a
//! subtree; wrappers that only forward to another component are ordinary
//! components too.

use std::fmt;
use std::rc::Rc;

use twcss::StyleMap;

/// A node in the markup tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content. Never scanned for class names.
    Text(String),
    /// Pre-serialized markup passed through untouched (MSO conditional
    /// comments, injected stylesheets).
    Raw(String),
    /// Groups children without producing an element.
    Fragment(Vec<Node>),
    Component(ComponentNode),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    pub fn component(component: impl Component + 'static, props: Props) -> Self {
        Node::Component(ComponentNode {
            component: Rc::new(component),
            props,
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Depth-first search for the first element with `tag`.
    pub fn find_element(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Element(element) if element.tag.eq_ignore_ascii_case(tag) => Some(element),
            Node::Element(element) => element.children.iter().find_map(|c| c.find_element(tag)),
            Node::Fragment(children) => children.iter().find_map(|c| c.find_element(tag)),
            Node::Text(_) | Node::Raw(_) | Node::Component(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A plain element such as `div` or `head`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub class_name: Option<String>,
    pub style: StyleMap,
    /// Attributes other than `class` and `style`, in source order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The input a component renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub class_name: Option<String>,
    pub style: StyleMap,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// An element carrying these props.
    pub fn into_element(self, tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            class_name: self.class_name,
            style: self.style,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Something that renders props into a subtree.
///
/// Implemented for closures `Fn(&Props) -> Node`.
pub trait Component {
    fn name(&self) -> &str {
        "Anonymous"
    }

    fn render(&self, props: &Props) -> Node;
}

impl<F> Component for F
where
    F: Fn(&Props) -> Node,
{
    fn render(&self, props: &Props) -> Node {
        self(props)
    }
}

/// A component together with the props it will be rendered with.
#[derive(Clone)]
pub struct ComponentNode {
    pub component: Rc<dyn Component>,
    pub props: Props,
}

impl ComponentNode {
    pub fn render(&self) -> Node {
        self.component.render(&self.props)
    }
}

impl PartialEq for ComponentNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.component, &other.component) && self.props == other.props
    }
}

impl fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentNode")
            .field("component", &self.component.name())
            .field("props", &self.props)
            .finish()
    }
}
