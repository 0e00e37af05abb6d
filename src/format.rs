/// Text formatting helpers shared by the renderer

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder shown for any missing field
pub const NOT_AVAILABLE: &str = "N/A";

// A token is either a word between separators or a literal category-path slash.
static CATEGORY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^_/]+|/").expect("category token pattern is valid"));

/// Format an API category path for display
///
/// Underscores separate words and `/` separates taxonomy levels:
/// "computers_electronics_and_technology/search_engines"
/// → "Computers Electronics And Technology / Search Engines"
///
/// Only the first letter of each word is changed; the rest of the word is left
/// as the API sent it.
pub fn format_category(category: Option<&str>) -> String {
    let category = match category {
        Some(c) if !c.is_empty() => c,
        _ => return NOT_AVAILABLE.to_string(),
    };

    CATEGORY_TOKEN
        .find_iter(category)
        .map(|token| capitalize_first(token.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a count with `,` thousands separators (en-US style)
///
/// Fractional values keep at most three fractional digits.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 2);
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Escape text for interpolation into an HTML fragment
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_taxonomy_path() {
        assert_eq!(
            format_category(Some("computers_electronics_and_technology/search_engines")),
            "Computers Electronics And Technology / Search Engines"
        );
    }

    #[test]
    fn test_format_category_missing() {
        assert_eq!(format_category(None), "N/A");
        assert_eq!(format_category(Some("")), "N/A");
    }

    #[test]
    fn test_format_category_single_word() {
        assert_eq!(format_category(Some("news")), "News");
    }

    #[test]
    fn test_format_category_keeps_rest_of_word() {
        assert_eq!(format_category(Some("iOS_apps")), "IOS Apps");
        assert_eq!(format_category(Some("arts_AND_entertainment")), "Arts AND Entertainment");
    }

    #[test]
    fn test_format_category_collapses_repeated_underscores() {
        assert_eq!(format_category(Some("games__video")), "Games Video");
    }

    #[test]
    fn test_format_count_grouping() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(85123456789.0), "85,123,456,789");
    }

    #[test]
    fn test_format_count_fraction() {
        assert_eq!(format_count(1234.5), "1,234.5");
        assert_eq!(format_count(1.23456), "1.235");
        assert_eq!(format_count(10.0001), "10");
    }

    #[test]
    fn test_format_count_negative() {
        assert_eq!(format_count(-1234.0), "-1,234");
        assert_eq!(format_count(-0.0001), "0");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape_html("example.com"), "example.com");
    }
}
