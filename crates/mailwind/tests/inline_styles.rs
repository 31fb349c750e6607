use mailwind::{Element, Node, Props, StyleMap, Tailwind, to_markup};

fn process(node: impl Into<Node>) -> Node {
    Tailwind::new().process(node.into()).unwrap()
}

fn inline_css(node: &Node, tag: &str) -> String {
    node.find_element(tag).unwrap().style.to_inline_css()
}

#[test]
fn renders_inline_styles() {
    let output = process(Element::new("div").class("bg-white"));
    assert_eq!(to_markup(&output), r#"<div style="background-color:#fff"></div>"#);
}

#[test]
fn button_classes_expand_in_order() {
    let output = process(
        Element::new("a")
            .class("px-3 py-2 mt-8 text-sm text-gray-200 bg-blue-600 rounded-md")
            .child("Testing button"),
    );

    insta::assert_snapshot!(
        inline_css(&output, "a"),
        @"padding-left:0.75rem;padding-right:0.75rem;padding-top:0.5rem;padding-bottom:0.5rem;margin-top:2rem;font-size:0.875rem;line-height:1.25rem;color:#e5e7eb;background-color:#2563eb;border-radius:0.375rem"
    );
    assert_eq!(output.find_element("a").unwrap().class_name, None);
}

#[test]
fn author_inline_styles_are_not_overridden() {
    let style: StyleMap = [("backgroundColor", "red"), ("fontSize", "12px")].into_iter().collect();
    let output = process(Element::new("div").class("bg-black text-[16px]").style(style));

    assert_eq!(inline_css(&output, "div"), "background-color:red;font-size:12px");
}

#[test]
fn component_styles_take_resolved_props() {
    // Spreads its props' style over its own defaults.
    let hr = |props: &Props| -> Node {
        let mut style = StyleMap::parse("width: 100%; border: none; border-top: 1px solid #eaeaea").unwrap();
        for (property, value) in props.style.iter() {
            style.insert(property, value);
        }
        Element::new("hr").style(style).into()
    };
    let output = process(Node::component(hr, Props::new().class("w-12")));

    assert!(to_markup(&output).contains("width:3rem"));
}

#[test]
fn class_manipulation_inside_components() {
    let component = |props: &Props| -> Node {
        let class_name = format!("{} bg-red-500", props.class_name.as_deref().unwrap_or_default());
        Element::new("div").class(class_name).into()
    };
    let output = process(Node::component(component, Props::new().class("text-blue-400")));

    assert_eq!(to_markup(&output), r#"<div style="color:#60a5fa;background-color:#ef4444"></div>"#);
}

#[test]
fn arbitrary_values() {
    let output = process(
        Element::new("div")
            .class("text-[50px] leading-[1] mt-[100px] bg-[url(https://example.com/image.png)]")
            .child(Element::new("p").class("font-bold p-[20px]")),
    );

    assert_eq!(
        inline_css(&output, "div"),
        "font-size:50px;line-height:1;margin-top:100px;background-image:url(https://example.com/image.png)"
    );
    assert_eq!(inline_css(&output, "p"), "font-weight:700;padding:20px");
}

#[test]
fn text_is_never_scanned() {
    let output = process(Element::new("p").child("bg-red-500 sm:p-4"));

    assert_eq!(to_markup(&output), "<p>bg-red-500 sm:p-4</p>");
}

#[test]
fn non_utility_classes_survive() {
    let output = process(Element::new("td").class("custom-class p-2 js-hook"));
    let td = output.find_element("td").unwrap();

    assert_eq!(td.class_name.as_deref(), Some("custom-class js-hook"));
    assert_eq!(td.style.to_inline_css(), "padding:0.5rem");
}

#[test]
fn raw_markup_passes_through() {
    let mso = r#"<!--[if mso]><i style="letter-spacing: 10px;mso-font-width:-100%;" hidden>&nbsp;</i><![endif]-->"#;
    let output = process(
        Element::new("body")
            .child(Element::new("span").child(Node::raw(mso)))
            .child(Element::new("div").class("bg-white")),
    );

    assert_eq!(
        to_markup(&output),
        format!(r#"<body><span>{}</span><div style="background-color:#fff"></div></body>"#, mso)
    );
}
