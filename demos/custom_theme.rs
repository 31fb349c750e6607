use mailwind_rs::{Element, Node, PluginApi, Tailwind, TailwindConfig, to_markup};

fn brand_utilities(api: &mut PluginApi<'_>) -> mailwind_rs::twcss::Result<()> {
    let brand = api.theme("colors", "brand").unwrap_or("#000").to_string();
    api.add_utility("btn-brand", [("backgroundColor", brand), ("color", "#fff".to_string())])?;
    api.add_utilities_css(".divider { border-top: 1px solid #e5e7eb; margin: 24px 0; }")
}

fn main() -> mailwind_rs::Result<()> {
    let config = TailwindConfig::from_toml_str(include_str!("custom_theme.toml"))?
        .with_plugin(brand_utilities);
    let tailwind = Tailwind::with_config(&config)?;

    let email: Node = Element::new("html")
        .child(Element::new("head"))
        .child(
            Element::new("body").class("font-sans text-ink").child(
                Element::new("table").class("w-full p-gutter desktop:p-8").child(
                    Element::new("tr").child(
                        Element::new("td")
                            .class("text-ink-light tablet:text-brand")
                            .child("Thanks for signing up!")
                            .child(Element::new("div").class("divider"))
                            .child(
                                Element::new("a")
                                    .class("btn-brand px-gutter py-2 max-tablet:block")
                                    .attr("href", "https://example.com/welcome")
                                    .child("Get started"),
                            ),
                    ),
                ),
            ),
        )
        .into();

    let processed = tailwind.process(email)?;
    println!("{}", to_markup(&processed));
    Ok(())
}
