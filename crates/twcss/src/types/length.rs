//! Small helpers for CSS lengths appearing in theme values.

/// Splits a length like `640px` or `-0.5rem` into its number and unit.
pub(crate) fn parse_length(raw: &str) -> Option<(f64, &str)> {
    let value = raw.trim();
    let split = value
        .char_indices()
        .find(|(idx, ch)| !(ch.is_ascii_digit() || *ch == '.' || (*idx == 0 && *ch == '-')))
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());
    if split == 0 {
        return None;
    }
    let number = value[..split].parse::<f64>().ok()?;
    Some((number, &value[split..]))
}

/// Length expressed in pixels, assuming a 16px root font size.
pub(crate) fn length_in_px(raw: &str) -> Option<f64> {
    let (number, unit) = parse_length(raw)?;
    match unit {
        "px" | "" => Some(number),
        "rem" | "em" => Some(number * 16.0),
        _ => None,
    }
}

/// Formats a number without trailing zeros (`33.333333`, `639`, `0.5`).
pub(crate) fn format_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_number_and_unit() {
        assert_eq!(parse_length("640px"), Some((640.0, "px")));
        assert_eq!(parse_length("-0.25rem"), Some((-0.25, "rem")));
        assert_eq!(parse_length("calc(1px)"), None);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_number(639.0), "639");
        assert_eq!(format_number(100.0 / 3.0), "33.333333");
        assert_eq!(format_number(0.5), "0.5");
    }
}
