//! Built-in utility catalog.
//!
//! Utilities come in two shapes:
//!
//! - **static** utilities map a fixed class name to fixed declarations
//!   (`flex`, `italic`, `text-ellipsis`)
//! - **functional** utilities take a value after their prefix (`mt-4`,
//!   `bg-red-500`, `w-[calc(50px+3rem)]`) resolved through [`UtilityValue`]

use phf::phf_map;
use smallvec::smallvec;

use crate::theme;
use crate::types::Declaration;
use crate::utilities::Declarations;
use crate::utilities::values::{UtilityValue, parse_arbitrary, split_modifier};

type Static = &'static [(&'static str, &'static str)];

pub(crate) static STATIC_UTILITIES: phf::Map<&'static str, Static> = phf_map! {
    // display
    "block" => &[("display", "block")],
    "inline-block" => &[("display", "inline-block")],
    "inline" => &[("display", "inline")],
    "flex" => &[("display", "flex")],
    "inline-flex" => &[("display", "inline-flex")],
    "grid" => &[("display", "grid")],
    "inline-grid" => &[("display", "inline-grid")],
    "table" => &[("display", "table")],
    "inline-table" => &[("display", "inline-table")],
    "table-row" => &[("display", "table-row")],
    "table-cell" => &[("display", "table-cell")],
    "contents" => &[("display", "contents")],
    "list-item" => &[("display", "list-item")],
    "hidden" => &[("display", "none")],

    // position and visibility
    "static" => &[("position", "static")],
    "fixed" => &[("position", "fixed")],
    "absolute" => &[("position", "absolute")],
    "relative" => &[("position", "relative")],
    "sticky" => &[("position", "sticky")],
    "visible" => &[("visibility", "visible")],
    "invisible" => &[("visibility", "hidden")],
    "collapse" => &[("visibility", "collapse")],

    // typography
    "italic" => &[("font-style", "italic")],
    "not-italic" => &[("font-style", "normal")],
    "underline" => &[("text-decoration-line", "underline")],
    "overline" => &[("text-decoration-line", "overline")],
    "line-through" => &[("text-decoration-line", "line-through")],
    "no-underline" => &[("text-decoration-line", "none")],
    "decoration-solid" => &[("text-decoration-style", "solid")],
    "decoration-double" => &[("text-decoration-style", "double")],
    "decoration-dotted" => &[("text-decoration-style", "dotted")],
    "decoration-dashed" => &[("text-decoration-style", "dashed")],
    "decoration-wavy" => &[("text-decoration-style", "wavy")],
    "uppercase" => &[("text-transform", "uppercase")],
    "lowercase" => &[("text-transform", "lowercase")],
    "capitalize" => &[("text-transform", "capitalize")],
    "normal-case" => &[("text-transform", "none")],
    "truncate" => &[("overflow", "hidden"), ("text-overflow", "ellipsis"), ("white-space", "nowrap")],
    "text-ellipsis" => &[("text-overflow", "ellipsis")],
    "text-clip" => &[("text-overflow", "clip")],
    "text-wrap" => &[("text-wrap", "wrap")],
    "text-nowrap" => &[("text-wrap", "nowrap")],
    "text-balance" => &[("text-wrap", "balance")],
    "whitespace-normal" => &[("white-space", "normal")],
    "whitespace-nowrap" => &[("white-space", "nowrap")],
    "whitespace-pre" => &[("white-space", "pre")],
    "whitespace-pre-line" => &[("white-space", "pre-line")],
    "whitespace-pre-wrap" => &[("white-space", "pre-wrap")],
    "break-normal" => &[("overflow-wrap", "normal"), ("word-break", "normal")],
    "break-words" => &[("overflow-wrap", "break-word")],
    "break-all" => &[("word-break", "break-all")],
    "break-keep" => &[("word-break", "keep-all")],
    "antialiased" => &[("-webkit-font-smoothing", "antialiased"), ("-moz-osx-font-smoothing", "grayscale")],
    "subpixel-antialiased" => &[("-webkit-font-smoothing", "auto"), ("-moz-osx-font-smoothing", "auto")],
    "list-none" => &[("list-style-type", "none")],
    "list-disc" => &[("list-style-type", "disc")],
    "list-decimal" => &[("list-style-type", "decimal")],
    "list-inside" => &[("list-style-position", "inside")],
    "list-outside" => &[("list-style-position", "outside")],
    "align-baseline" => &[("vertical-align", "baseline")],
    "align-top" => &[("vertical-align", "top")],
    "align-middle" => &[("vertical-align", "middle")],
    "align-bottom" => &[("vertical-align", "bottom")],
    "align-text-top" => &[("vertical-align", "text-top")],
    "align-text-bottom" => &[("vertical-align", "text-bottom")],

    // overflow
    "overflow-auto" => &[("overflow", "auto")],
    "overflow-hidden" => &[("overflow", "hidden")],
    "overflow-visible" => &[("overflow", "visible")],
    "overflow-scroll" => &[("overflow", "scroll")],
    "overflow-x-auto" => &[("overflow-x", "auto")],
    "overflow-x-hidden" => &[("overflow-x", "hidden")],
    "overflow-y-auto" => &[("overflow-y", "auto")],
    "overflow-y-hidden" => &[("overflow-y", "hidden")],

    // flexbox
    "flex-row" => &[("flex-direction", "row")],
    "flex-row-reverse" => &[("flex-direction", "row-reverse")],
    "flex-col" => &[("flex-direction", "column")],
    "flex-col-reverse" => &[("flex-direction", "column-reverse")],
    "flex-wrap" => &[("flex-wrap", "wrap")],
    "flex-wrap-reverse" => &[("flex-wrap", "wrap-reverse")],
    "flex-nowrap" => &[("flex-wrap", "nowrap")],
    "flex-1" => &[("flex", "1 1 0%")],
    "flex-auto" => &[("flex", "1 1 auto")],
    "flex-initial" => &[("flex", "0 1 auto")],
    "flex-none" => &[("flex", "none")],
    "grow" => &[("flex-grow", "1")],
    "grow-0" => &[("flex-grow", "0")],
    "shrink" => &[("flex-shrink", "1")],
    "shrink-0" => &[("flex-shrink", "0")],
    "items-start" => &[("align-items", "flex-start")],
    "items-end" => &[("align-items", "flex-end")],
    "items-center" => &[("align-items", "center")],
    "items-baseline" => &[("align-items", "baseline")],
    "items-stretch" => &[("align-items", "stretch")],
    "justify-normal" => &[("justify-content", "normal")],
    "justify-start" => &[("justify-content", "flex-start")],
    "justify-end" => &[("justify-content", "flex-end")],
    "justify-center" => &[("justify-content", "center")],
    "justify-between" => &[("justify-content", "space-between")],
    "justify-around" => &[("justify-content", "space-around")],
    "justify-evenly" => &[("justify-content", "space-evenly")],
    "self-auto" => &[("align-self", "auto")],
    "self-start" => &[("align-self", "flex-start")],
    "self-end" => &[("align-self", "flex-end")],
    "self-center" => &[("align-self", "center")],
    "self-stretch" => &[("align-self", "stretch")],

    // borders and tables
    "border-solid" => &[("border-style", "solid")],
    "border-dashed" => &[("border-style", "dashed")],
    "border-dotted" => &[("border-style", "dotted")],
    "border-double" => &[("border-style", "double")],
    "border-hidden" => &[("border-style", "hidden")],
    "border-none" => &[("border-style", "none")],
    "border-collapse" => &[("border-collapse", "collapse")],
    "border-separate" => &[("border-collapse", "separate")],
    "table-auto" => &[("table-layout", "auto")],
    "table-fixed" => &[("table-layout", "fixed")],

    // backgrounds
    "bg-none" => &[("background-image", "none")],
    "bg-fixed" => &[("background-attachment", "fixed")],
    "bg-local" => &[("background-attachment", "local")],
    "bg-scroll" => &[("background-attachment", "scroll")],
    "bg-repeat" => &[("background-repeat", "repeat")],
    "bg-no-repeat" => &[("background-repeat", "no-repeat")],
    "bg-repeat-x" => &[("background-repeat", "repeat-x")],
    "bg-repeat-y" => &[("background-repeat", "repeat-y")],
    "bg-auto" => &[("background-size", "auto")],
    "bg-cover" => &[("background-size", "cover")],
    "bg-contain" => &[("background-size", "contain")],
    "bg-center" => &[("background-position", "center")],
    "bg-top" => &[("background-position", "top")],
    "bg-bottom" => &[("background-position", "bottom")],
    "bg-left" => &[("background-position", "left")],
    "bg-right" => &[("background-position", "right")],

    // layout
    "box-border" => &[("box-sizing", "border-box")],
    "box-content" => &[("box-sizing", "content-box")],
    "float-left" => &[("float", "left")],
    "float-right" => &[("float", "right")],
    "float-none" => &[("float", "none")],
    "clear-left" => &[("clear", "left")],
    "clear-right" => &[("clear", "right")],
    "clear-both" => &[("clear", "both")],
    "clear-none" => &[("clear", "none")],
    "object-contain" => &[("object-fit", "contain")],
    "object-cover" => &[("object-fit", "cover")],
    "object-fill" => &[("object-fit", "fill")],
    "object-none" => &[("object-fit", "none")],
    "mx-auto" => &[("margin-left", "auto"), ("margin-right", "auto")],
    "sr-only" => &[
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("padding", "0"),
        ("margin", "-1px"),
        ("overflow", "hidden"),
        ("clip", "rect(0, 0, 0, 0)"),
        ("white-space", "nowrap"),
        ("border-width", "0"),
    ],

    // interactivity
    "cursor-pointer" => &[("cursor", "pointer")],
    "cursor-default" => &[("cursor", "default")],
    "select-none" => &[("user-select", "none")],
    "select-text" => &[("user-select", "text")],
    "select-all" => &[("user-select", "all")],
    "pointer-events-none" => &[("pointer-events", "none")],
    "pointer-events-auto" => &[("pointer-events", "auto")],
};

/// Resolves the value of a functional utility.
pub(crate) type Resolver = fn(&UtilityValue<'_>) -> Option<Declarations>;

/// The resolver for a functional prefix such as `bg` or `max-w`.
pub(crate) fn functional(prefix: &str) -> Option<Resolver> {
    let resolver: Resolver = match prefix {
        "bg" => background,
        "text" => text,
        "font" => font,
        "leading" => |v| v.lookup(theme::LINE_HEIGHT).or_else(|| v.spacing()).map(|l| one("line-height", l)),
        "tracking" => |v| v.lookup(theme::LETTER_SPACING).map(|l| one("letter-spacing", l)),
        "indent" => |v| v.spacing().map(|l| one("text-indent", l)),
        "decoration" => decoration,
        "underline-offset" => |v| offset(v).map(|o| one("text-underline-offset", o)),

        "p" => |v| spacing(v, &["padding"]),
        "px" => |v| spacing(v, &["padding-left", "padding-right"]),
        "py" => |v| spacing(v, &["padding-top", "padding-bottom"]),
        "pt" => |v| spacing(v, &["padding-top"]),
        "pr" => |v| spacing(v, &["padding-right"]),
        "pb" => |v| spacing(v, &["padding-bottom"]),
        "pl" => |v| spacing(v, &["padding-left"]),
        "ps" => |v| spacing(v, &["padding-inline-start"]),
        "pe" => |v| spacing(v, &["padding-inline-end"]),
        "m" => |v| margin(v, &["margin"]),
        "mx" => |v| margin(v, &["margin-left", "margin-right"]),
        "my" => |v| margin(v, &["margin-top", "margin-bottom"]),
        "mt" => |v| margin(v, &["margin-top"]),
        "mr" => |v| margin(v, &["margin-right"]),
        "mb" => |v| margin(v, &["margin-bottom"]),
        "ml" => |v| margin(v, &["margin-left"]),
        "ms" => |v| margin(v, &["margin-inline-start"]),
        "me" => |v| margin(v, &["margin-inline-end"]),
        "gap" => |v| spacing(v, &["gap"]),
        "gap-x" => |v| spacing(v, &["column-gap"]),
        "gap-y" => |v| spacing(v, &["row-gap"]),

        "w" => |v| v.size("100vw").map(|s| one("width", s)),
        "h" => |v| v.size("100vh").map(|s| one("height", s)),
        "size" => |v| v.size("100vw").map(|s| each(&["width", "height"], s)),
        "min-w" => |v| v.size("100vw").map(|s| one("min-width", s)),
        "min-h" => |v| v.size("100vh").map(|s| one("min-height", s)),
        "max-w" => max_width,
        "max-h" => |v| none_or(v, "100vh").map(|s| one("max-height", s)),
        "basis" => |v| v.size("100vw").map(|s| one("flex-basis", s)),

        "inset" => |v| v.size("100%").map(|s| one("inset", s)),
        "inset-x" => |v| v.size("100%").map(|s| each(&["left", "right"], s)),
        "inset-y" => |v| v.size("100%").map(|s| each(&["top", "bottom"], s)),
        "top" => |v| v.size("100%").map(|s| one("top", s)),
        "right" => |v| v.size("100%").map(|s| one("right", s)),
        "bottom" => |v| v.size("100%").map(|s| one("bottom", s)),
        "left" => |v| v.size("100%").map(|s| one("left", s)),
        "z" => |v| v.lookup(theme::Z_INDEX).map(|z| one("z-index", z)),
        "order" => order,

        "rounded" => |v| radius(v, &["border-radius"]),
        "rounded-t" => |v| radius(v, &["border-top-left-radius", "border-top-right-radius"]),
        "rounded-r" => |v| radius(v, &["border-top-right-radius", "border-bottom-right-radius"]),
        "rounded-b" => |v| radius(v, &["border-bottom-right-radius", "border-bottom-left-radius"]),
        "rounded-l" => |v| radius(v, &["border-top-left-radius", "border-bottom-left-radius"]),
        "rounded-tl" => |v| radius(v, &["border-top-left-radius"]),
        "rounded-tr" => |v| radius(v, &["border-top-right-radius"]),
        "rounded-br" => |v| radius(v, &["border-bottom-right-radius"]),
        "rounded-bl" => |v| radius(v, &["border-bottom-left-radius"]),
        "border" => |v| border(v, &[""]),
        "border-x" => |v| border(v, &["-left", "-right"]),
        "border-y" => |v| border(v, &["-top", "-bottom"]),
        "border-t" => |v| border(v, &["-top"]),
        "border-r" => |v| border(v, &["-right"]),
        "border-b" => |v| border(v, &["-bottom"]),
        "border-l" => |v| border(v, &["-left"]),

        "opacity" => |v| v.lookup(theme::OPACITY).map(|o| one("opacity", o)),
        "shadow" => |v| v.lookup(theme::BOX_SHADOW).map(|s| one("box-shadow", s)),
        _ => return None,
    };
    Some(resolver)
}

/// Prefixes that accept a leading `-`.
pub(crate) fn allows_negative(prefix: &str) -> bool {
    matches!(
        prefix,
        "m" | "mx" | "my" | "mt" | "mr" | "mb" | "ml" | "ms" | "me"
            | "inset" | "inset-x" | "inset-y" | "top" | "right" | "bottom" | "left"
            | "z" | "order" | "tracking" | "indent"
    )
}

fn one(property: &str, value: impl Into<String>) -> Declarations {
    smallvec![Declaration::new(property, value)]
}

fn each(properties: &[&str], value: String) -> Declarations {
    properties
        .iter()
        .map(|property| Declaration::new(*property, value.clone()))
        .collect()
}

fn spacing(value: &UtilityValue<'_>, properties: &[&str]) -> Option<Declarations> {
    value.spacing().map(|length| each(properties, length))
}

fn margin(value: &UtilityValue<'_>, properties: &[&str]) -> Option<Declarations> {
    if value.raw == "auto" && !value.negative {
        return Some(each(properties, "auto".to_string()));
    }
    spacing(value, properties)
}

fn radius(value: &UtilityValue<'_>, properties: &[&str]) -> Option<Declarations> {
    value
        .lookup(theme::BORDER_RADIUS)
        .map(|length| each(properties, length))
}

/// `sides` are suffixes appended to `border` (`""` for all sides).
fn border(value: &UtilityValue<'_>, sides: &[&str]) -> Option<Declarations> {
    let property = |suffix: &str| -> Vec<String> {
        sides
            .iter()
            .map(|side| format!("border{}-{}", side, suffix))
            .collect()
    };

    let width = match value.arbitrary() {
        Some(arbitrary) if arbitrary.is_length() => Some(arbitrary.value),
        Some(_) => None,
        None => value.theme.get(theme::BORDER_WIDTH, value.raw).map(str::to_string),
    };
    if let Some(width) = width {
        return Some(
            property("width")
                .iter()
                .map(|p| Declaration::new(p.as_str(), width.clone()))
                .collect(),
        );
    }

    let color = value.color()?;
    Some(
        property("color")
            .iter()
            .map(|p| Declaration::new(p.as_str(), color.clone()))
            .collect(),
    )
}

fn background(value: &UtilityValue<'_>) -> Option<Declarations> {
    if let Some(arbitrary) = value.arbitrary() {
        if arbitrary.is_image() {
            return Some(one("background-image", arbitrary.value));
        }
    }
    value.color().map(|color| one("background-color", color))
}

fn text(value: &UtilityValue<'_>) -> Option<Declarations> {
    if let Some(align) = value.theme.get(theme::TEXT_ALIGN, value.raw) {
        return Some(one("text-align", align));
    }

    let (size_key, modifier) = split_modifier(value.raw);
    let size = match parse_arbitrary(size_key) {
        Some(arbitrary) if arbitrary.is_length() => Some(arbitrary.value),
        Some(_) => None,
        None => value.theme.get(theme::FONT_SIZE, size_key).map(str::to_string),
    };
    if let Some(size) = size {
        let line_height = match modifier {
            Some(modifier) => line_height(value, modifier),
            None => value
                .theme
                .font_size_line_height(size_key)
                .map(str::to_string),
        };
        let mut declarations = one("font-size", size);
        if let Some(line_height) = line_height {
            declarations.push(Declaration::new("line-height", line_height));
        }
        return Some(declarations);
    }

    value.color().map(|color| one("color", color))
}

fn line_height(value: &UtilityValue<'_>, key: &str) -> Option<String> {
    if let Some(arbitrary) = parse_arbitrary(key) {
        return Some(arbitrary.value);
    }
    value
        .theme
        .get(theme::LINE_HEIGHT, key)
        .or_else(|| value.theme.get(theme::SPACING, key))
        .map(str::to_string)
}

fn font(value: &UtilityValue<'_>) -> Option<Declarations> {
    if let Some(weight) = value.theme.get(theme::FONT_WEIGHT, value.raw) {
        return Some(one("font-weight", weight));
    }
    if let Some(family) = value.theme.get(theme::FONT_FAMILY, value.raw) {
        return Some(one("font-family", family));
    }
    let arbitrary = value.arbitrary()?;
    let is_weight = match arbitrary.hint.as_deref() {
        Some("number") | Some("weight") => true,
        Some(_) => false,
        None => arbitrary.value.parse::<u32>().is_ok(),
    };
    if is_weight {
        Some(one("font-weight", arbitrary.value))
    } else {
        Some(one("font-family", arbitrary.value))
    }
}

fn decoration(value: &UtilityValue<'_>) -> Option<Declarations> {
    let thickness = match value.raw {
        "auto" | "from-font" => Some(value.raw.to_string()),
        _ => match value.arbitrary() {
            Some(arbitrary) if arbitrary.is_length() => Some(arbitrary.value),
            Some(_) => None,
            None => value.raw.parse::<u32>().ok().map(|px| format!("{}px", px)),
        },
    };
    if let Some(thickness) = thickness {
        return Some(one("text-decoration-thickness", thickness));
    }
    value
        .color()
        .map(|color| one("text-decoration-color", color))
}

fn offset(value: &UtilityValue<'_>) -> Option<String> {
    if value.raw == "auto" {
        return Some("auto".to_string());
    }
    match value.arbitrary() {
        Some(arbitrary) if arbitrary.is_length() => Some(arbitrary.value),
        Some(_) => None,
        None => value.raw.parse::<u32>().ok().map(|px| format!("{}px", px)),
    }
}

fn max_width(value: &UtilityValue<'_>) -> Option<Declarations> {
    if let Some(screen) = value.raw.strip_prefix("screen-") {
        let min = value.theme.screen(screen)?.min.clone()?;
        return Some(one("max-width", min));
    }
    if value.arbitrary().is_none() {
        if let Some(width) = value.theme.get(theme::MAX_WIDTH, value.raw) {
            return Some(one("max-width", width));
        }
    }
    value.size("100vw").map(|size| one("max-width", size))
}

fn none_or(value: &UtilityValue<'_>, viewport: &str) -> Option<String> {
    if value.raw == "none" {
        return Some("none".to_string());
    }
    value.size(viewport)
}

fn order(value: &UtilityValue<'_>) -> Option<Declarations> {
    let order = match value.raw {
        "first" => "-9999".to_string(),
        "last" => "9999".to_string(),
        "none" => "0".to_string(),
        raw => match value.arbitrary() {
            Some(arbitrary) => value.signed(arbitrary.value),
            None => value.signed(raw.parse::<i32>().ok()?.to_string()),
        },
    };
    Some(one("order", order))
}
