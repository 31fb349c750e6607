use mailwind_rs::{Component, Element, Node, Props, Tailwind, to_markup};

struct Button;

impl Component for Button {
    fn name(&self) -> &str {
        "Button"
    }

    fn render(&self, props: &Props) -> Node {
        let mut element = props.clone().into_element("a");
        element.attributes.push(("target".into(), "_blank".into()));
        element.into()
    }
}

fn layout(props: &Props) -> Node {
    Element::new("html")
        .attr("lang", "en")
        .child(Element::new("head").child(Element::new("meta").attr("charset", "utf-8")))
        .child(
            Element::new("body")
                .class("bg-gray-100 font-sans")
                .children(props.children.clone()),
        )
        .into()
}

fn main() -> mailwind_rs::Result<()> {
    let card = Element::new("div")
        .class("mx-auto max-w-xl bg-white rounded-lg p-4 sm:p-8 shadow")
        .child(
            Element::new("h1")
                .class("text-xl sm:text-2xl font-bold text-gray-900")
                .child("Your order has shipped"),
        )
        .child(
            Element::new("p")
                .class("text-gray-600 leading-6 max-sm:text-sm")
                .child("It should arrive within 3 to 5 business days."),
        )
        .child(Node::component(
            Button,
            Props::new()
                .class("inline-block bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700")
                .attr("href", "https://example.com/orders/1234")
                .child("Track your package"),
        ))
        .child(Node::raw("<!--[if mso]><i style=\"mso-text-raise:16pt\">&nbsp;</i><![endif]-->"));

    let email = Node::component(layout, Props::new().child(card));
    let processed = Tailwind::new().process(email)?;

    println!("{}", to_markup(&processed));
    Ok(())
}
