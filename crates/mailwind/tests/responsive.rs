use mailwind::{Element, MailwindError, Node, Props, Tailwind, TailwindConfig, to_markup};

fn stylesheet(node: &Node) -> String {
    let style = node.find_element("style").expect("a stylesheet should be injected");
    match style.children.as_slice() {
        [Node::Raw(css)] => css.clone(),
        other => panic!("unexpected stylesheet children: {:?}", other),
    }
}

fn document(body: impl Into<Node>) -> Node {
    Element::new("html")
        .child(Element::new("head"))
        .child(Element::new("body").child(body))
        .into()
}

#[test]
fn responsive_rules_go_to_the_head() {
    let output = Tailwind::new()
        .process(document(
            Element::new("div").class("bg-red-200 sm:bg-red-300 md:bg-red-400 lg:bg-red-500"),
        ))
        .unwrap();

    let div = output.find_element("div").unwrap();
    assert_eq!(div.class_name.as_deref(), Some("tw-rsp-0"));
    assert_eq!(div.style.to_inline_css(), "background-color:#fecaca");

    insta::assert_snapshot!(
        stylesheet(&output),
        @"@media (min-width:640px){.tw-rsp-0{background-color:#fca5a5 !important}}@media (min-width:768px){.tw-rsp-0{background-color:#f87171 !important}}@media (min-width:1024px){.tw-rsp-0{background-color:#ef4444 !important}}"
    );
}

#[test]
fn head_behind_two_layers_of_components() {
    let head = |_: &Props| -> Node { Element::new("head").into() };
    let layout = move |props: &Props| -> Node {
        Element::new("html")
            .child(Node::component(head, Props::new()))
            .child(Element::new("body").children(props.children.clone()))
            .into()
    };
    let wrapper = move |props: &Props| -> Node {
        let mut inner = Props::new();
        inner.children = props.children.clone();
        Node::component(layout, inner)
    };

    let tree = Node::component(
        wrapper,
        Props::new().child(Element::new("div").class("bg-red-200 sm:bg-red-300")),
    );
    let output = Tailwind::new().process(tree).unwrap();

    assert_eq!(
        to_markup(&output),
        "<html><head><style>@media (min-width:640px){.tw-rsp-0{background-color:#fca5a5 !important}}</style></head>\
         <body><div class=\"tw-rsp-0\" style=\"background-color:#fecaca\"></div></body></html>"
    );
}

#[test]
fn head_nested_inside_fragments() {
    let tree: Node = Element::new("html")
        .child(Node::fragment([Node::fragment([Node::from(Element::new("head"))])]))
        .child(Element::new("p").class("hover:underline"))
        .into();
    let output = Tailwind::new().process(tree).unwrap();

    assert_eq!(stylesheet(&output), ".tw-rsp-0:hover{text-decoration-line:underline !important}");
}

#[test]
fn missing_head_is_an_error() {
    let tree: Node = Element::new("html")
        .child(Element::new("body").child(Element::new("div").class("bg-red-200 sm:bg-red-500")))
        .into();

    let err = Tailwind::new().process(tree).unwrap_err();
    match &err {
        MailwindError::MissingHead { classes } => assert_eq!(classes, &["sm:bg-red-500"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("<head>"));
    assert!(err.to_string().contains("sm:bg-red-500"));
}

#[test]
fn missing_head_is_fine_without_conditional_classes() {
    let tree: Node = Element::new("div").class("bg-red-200").into();
    assert!(Tailwind::new().process(tree).is_ok());
}

#[test]
fn existing_head_children_are_preserved() {
    let tree: Node = Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("style").child(Node::raw("body{margin:0}")))
                .child(Element::new("link").attr("rel", "stylesheet").attr("href", "https://example.com/styles.css")),
        )
        .child(Element::new("body").child(Element::new("div").class("bg-red-200 sm:bg-red-500")))
        .into();
    let output = Tailwind::new().process(tree).unwrap();

    let head = output.find_element("head").unwrap();
    assert_eq!(
        to_markup(&Node::Element(head.clone())),
        "<head><style>body{margin:0}</style>\
         <link rel=\"stylesheet\" href=\"https://example.com/styles.css\" />\
         <style>@media (min-width:640px){.tw-rsp-0{background-color:#ef4444 !important}}</style></head>"
    );
}

#[test]
fn max_screen_variants() {
    let output = Tailwind::new()
        .process(document(Element::new("p").class("text-blue-700 max-sm:text-red-600")))
        .unwrap();

    assert_eq!(output.find_element("p").unwrap().style.to_inline_css(), "color:#1d4ed8");
    assert_eq!(
        stylesheet(&output),
        "@media (max-width:639px){.tw-rsp-0{color:#dc2626 !important}}"
    );
}

#[test]
fn every_element_gets_its_own_marker() {
    let output = Tailwind::new()
        .process(document(Node::fragment([
            Node::from(Element::new("div").class("sm:text-sm")),
            Node::from(Element::new("div").class("custom sm:text-sm md:text-lg")),
        ])))
        .unwrap();

    let body = output.find_element("body").unwrap();
    let classes: Vec<_> = match &body.children[0] {
        Node::Fragment(children) => children
            .iter()
            .map(|child| child.as_element().unwrap().class_name.clone().unwrap())
            .collect(),
        other => panic!("unexpected node: {:?}", other),
    };
    assert_eq!(classes, ["tw-rsp-0", "custom tw-rsp-1"]);

    insta::assert_snapshot!(
        stylesheet(&output),
        @"@media (min-width:640px){.tw-rsp-0{font-size:0.875rem !important;line-height:1.25rem !important}.tw-rsp-1{font-size:0.875rem !important;line-height:1.25rem !important}}@media (min-width:768px){.tw-rsp-1{font-size:1.125rem !important;line-height:1.75rem !important}}"
    );
}

#[test]
fn custom_screens_replace_the_defaults() {
    let config = TailwindConfig::from_toml_str(
        r#"
[theme.screens]
sm = { min = "640px" }
md = { min = "768px" }
lg = { min = "1024px" }
xl = { min = "1280px" }
"#,
    )
    .unwrap();
    let output = Tailwind::with_config(&config)
        .unwrap()
        .process(document(Node::fragment([
            Node::from(Element::new("div").class("bg-red-100 xl:bg-green-500").child("Test")),
            Node::from(Element::new("div").class("2xl:bg-blue-500").child("Test")),
        ])))
        .unwrap();

    let markup = to_markup(&output);
    assert!(markup.contains(r#"<div class="2xl:bg-blue-500">Test</div>"#));
    assert_eq!(
        stylesheet(&output),
        "@media (min-width:1280px){.tw-rsp-0{background-color:#22c55e !important}}"
    );
}

#[test]
fn calc_values_survive_as_one_token() {
    let output = Tailwind::new()
        .process(document(
            Element::new("div")
                .class("max-h-[calc(50px+3rem)] lg:max-h-[calc(50px+5rem)] bg-red-100")
                .child(Element::new("div").class("h-[200px]").child("something tall")),
        ))
        .unwrap();

    let outer = output.find_element("div").unwrap();
    assert_eq!(
        outer.style.to_inline_css(),
        "max-height:calc(50px + 3rem);background-color:#fee2e2"
    );
    assert_eq!(
        stylesheet(&output),
        "@media (min-width:1024px){.tw-rsp-0{max-height:calc(50px + 5rem) !important}}"
    );
}

#[test]
fn each_process_call_starts_a_fresh_stylesheet() {
    let tailwind = Tailwind::new();
    let first = tailwind
        .process(document(Element::new("div").class("sm:p-4")))
        .unwrap();
    let second = tailwind
        .process(document(Element::new("div").class("sm:p-2")))
        .unwrap();

    assert_eq!(stylesheet(&first), "@media (min-width:640px){.tw-rsp-0{padding:1rem !important}}");
    assert_eq!(stylesheet(&second), "@media (min-width:640px){.tw-rsp-0{padding:0.5rem !important}}");
}
