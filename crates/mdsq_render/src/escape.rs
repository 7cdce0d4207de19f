//! HTML escaping.

/// Escapes `&`, `<` and `>` for HTML text content.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_text_into(input, &mut out);
    out
}

pub(crate) fn escape_text_into(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Escapes attribute values: text escaping plus `"`.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_attr_into(input, &mut out);
    out
}

pub(crate) fn escape_attr_into(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<tag>", "&lt;tag&gt;")]
    #[case("\"quoted\"", "\"quoted\"")]
    fn text_escaping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_text(input), expected);
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("\"quoted\"", "&quot;quoted&quot;")]
    #[case("<>", "&lt;&gt;")]
    fn attr_escaping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_attr(input), expected);
    }

    #[test]
    fn multibyte_passes_through() {
        assert_eq!(escape_text("caf\u{e9} & \u{65e5}\u{672c}"), "caf\u{e9} &amp; \u{65e5}\u{672c}");
    }
}
