/// Domain input normalization for Domain Insights

const PROTOCOL_PREFIXES: [&str; 2] = ["https://", "http://"];

/// Clean a user-entered domain before it is sent to the analytics API
///
/// Algorithm:
/// 1. Strip one leading `http://` or `https://` (case-sensitive)
/// 2. Strip exactly one trailing `/`
///
/// The caller is expected to trim whitespace first. The result may be empty,
/// which the submission flow treats as a validation failure.
///
/// Examples:
/// - https://Example.com/ → Example.com
/// - http://news.bbc.co.uk → news.bbc.co.uk
/// - https:// → (empty)
pub fn normalize_domain(input: &str) -> String {
    let without_protocol = PROTOCOL_PREFIXES
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
        .unwrap_or(input);

    without_protocol
        .strip_suffix('/')
        .unwrap_or(without_protocol)
        .to_string()
}
