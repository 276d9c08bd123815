//! String helpers: clamped substrings, lenient integer parsing and XML element extraction.

/// Returns up to `length` characters of `input` starting at character `start`.
///
/// Out-of-range requests are clamped rather than rejected: a `start` past the end yields `""`
/// and a `length` running past the end is shortened.
pub fn substr(input: &str, start: usize, length: usize) -> String {
    input.chars().skip(start).take(length).collect()
}

/// Parses a decimal integer, allowing surrounding whitespace.
pub fn parse_int(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parses a decimal integer, falling back to zero.
pub fn int_or_zero(input: &str) -> i64 {
    parse_int(input).unwrap_or_default()
}

/// Extracts the first `<node ...>...</node>` element from `message`.
///
/// The match runs from the first `<node` to the end of the first `</node>` after it. Returns
/// `None` when either tag is missing. This is plain substring search, not XML parsing; nested
/// elements with the same name are not balanced.
pub fn xml_node_list<'a>(message: &'a str, node: &str) -> Option<&'a str> {
    if node.is_empty() {
        return None;
    }

    let open = format!("<{}", node);
    let close = format!("</{}>", node);
    tracing::debug!("Searching for XML Element: {}>", open);

    let Some(start) = message.find(&open) else {
        tracing::debug!("Message does not contain Element: {}", node);
        return None;
    };
    let Some(close_at) = message[start..].find(&close) else {
        tracing::debug!("Element {} has no closing tag", node);
        return None;
    };

    let end = start + close_at + close.len();
    tracing::debug!("Extracted XML Element Nodelist");
    Some(&message[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substr_clamps_length() {
        assert_eq!(substr("0123456789", 8, 5), "89");
    }

    #[test]
    fn test_substr_within_bounds() {
        assert_eq!(substr("0123456789", 2, 3), "234");
        assert_eq!(substr("0123456789", 0, 10), "0123456789");
    }

    #[test]
    fn test_substr_start_past_end() {
        assert_eq!(substr("0123456789", 10, 1), "");
        assert_eq!(substr("0123456789", 42, 1), "");
        assert_eq!(substr("", 0, 3), "");
    }

    #[test]
    fn test_substr_counts_characters_not_bytes() {
        assert_eq!(substr("héllo wörld", 1, 4), "éllo");
        assert_eq!(substr("日本語テキスト", 5, 10), "スト");
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -7 "), Some(-7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("12a"), None);
    }

    #[test]
    fn test_int_or_zero() {
        assert_eq!(int_or_zero("1234"), 1234);
        assert_eq!(int_or_zero("not a number"), 0);
    }

    #[test]
    fn test_xml_node_list_extracts_element() {
        let message = r#"<Envelope><Body><xdw:Task id="1"><name>a</name></xdw:Task></Body></Envelope>"#;

        assert_eq!(
            xml_node_list(message, "xdw:Task"),
            Some(r#"<xdw:Task id="1"><name>a</name></xdw:Task>"#)
        );
    }

    #[test]
    fn test_xml_node_list_first_match() {
        let message = "<list><item>1</item><item>2</item></list>";

        assert_eq!(xml_node_list(message, "item"), Some("<item>1</item>"));
    }

    #[test]
    fn test_xml_node_list_missing_element() {
        assert_eq!(xml_node_list("<a>b</a>", "c"), None);
    }

    #[test]
    fn test_xml_node_list_name_only_in_text() {
        assert_eq!(xml_node_list("<a>Task</a>", "Task"), None);
    }

    #[test]
    fn test_xml_node_list_unclosed() {
        assert_eq!(xml_node_list("<Task><a/>", "Task"), None);
    }

    #[test]
    fn test_xml_node_list_close_before_open() {
        assert_eq!(xml_node_list("</Task><Task>", "Task"), None);
    }

    #[test]
    fn test_xml_node_list_empty_node() {
        assert_eq!(xml_node_list("<a></a>", ""), None);
    }
}
