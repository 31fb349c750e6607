use mailwind::{Element, MailwindError, Node, Tailwind, TailwindConfig, ThemeValue, to_markup};
use twcss::{ConfigError, PluginApi};

fn document(body: impl Into<Node>) -> Node {
    Element::new("html")
        .child(Element::new("head"))
        .child(Element::new("body").child(body))
        .into()
}

fn border_custom(api: &mut PluginApi<'_>) -> twcss::Result<()> {
    api.add_utilities_css(".border-custom { border: 2px solid; }")
}

#[test]
fn extended_colors_work_inline_and_responsively() {
    let config = TailwindConfig::new().with_extend("colors", ThemeValue::map([("custom", "#1fb6ff")]));
    let output = Tailwind::with_config(&config)
        .unwrap()
        .process(document(
            Element::new("div").class("bg-custom sm:text-custom").child("Hello"),
        ))
        .unwrap();

    assert_eq!(
        to_markup(&output),
        "<html><head><style>@media (min-width:640px){.tw-rsp-0{color:#1fb6ff !important}}</style></head>\
         <body><div class=\"tw-rsp-0\" style=\"background-color:#1fb6ff\">Hello</div></body></html>"
    );
}

#[test]
fn extended_scales_from_toml() {
    let config = TailwindConfig::from_toml_str(
        r##"
[theme.extend.fontFamily]
sans = ["Graphik", "sans-serif"]

[theme.extend.spacing]
8xl = "96rem"

[theme.extend.borderRadius]
4xl = "2rem"

[theme.extend.textAlign]
justify = "justify"
"##,
    )
    .unwrap();
    let output = Tailwind::with_config(&config)
        .unwrap()
        .process(Element::new("div").class("font-sans m-8xl rounded-4xl text-justify").into())
        .unwrap();

    insta::assert_snapshot!(
        to_markup(&output),
        @r#"<div style="font-family:Graphik, sans-serif;margin:96rem;border-radius:2rem;text-align:justify"></div>"#
    );
}

#[test]
fn replaced_colors_drop_the_palette() {
    let config = TailwindConfig::new().with_theme("colors", ThemeValue::map([("ink", "#111")]));
    let output = Tailwind::with_config(&config)
        .unwrap()
        .process(Element::new("p").class("text-ink bg-red-500").into())
        .unwrap();

    let p = output.as_element().unwrap();
    assert_eq!(p.style.to_inline_css(), "color:#111");
    assert_eq!(p.class_name.as_deref(), Some("bg-red-500"));
}

#[test]
fn plugin_utilities_with_and_without_variants() {
    let config = TailwindConfig::new().with_plugin(border_custom);
    let output = Tailwind::with_config(&config)
        .unwrap()
        .process(document(Node::fragment([
            Node::from(Element::new("div").class("border-custom")),
            Node::from(Element::new("div").class("sm:border-custom")),
        ])))
        .unwrap();

    assert_eq!(
        to_markup(&output),
        "<html><head><style>@media (min-width:640px){.tw-rsp-0{border:2px solid !important}}</style></head>\
         <body><div style=\"border:2px solid\"></div><div class=\"tw-rsp-0\"></div></body></html>"
    );
}

#[test]
fn marker_prefix_is_configurable() {
    let output = Tailwind::new()
        .with_marker_prefix("mw-")
        .process(document(Element::new("td").class("sm:hidden")))
        .unwrap();

    assert_eq!(output.find_element("td").unwrap().class_name.as_deref(), Some("mw-0"));
    assert_eq!(
        output.find_element("style").unwrap().children,
        [Node::raw("@media (min-width:640px){.mw-0{display:none !important}}")]
    );
}

#[test]
fn invalid_configuration_is_reported_before_processing() {
    let config = TailwindConfig::new().with_theme("spacing", "10px");
    let err = Tailwind::with_config(&config).unwrap_err();

    assert!(matches!(
        err,
        MailwindError::Config(ConfigError::InvalidTheme { ref category, .. }) if category == "spacing"
    ));
}
