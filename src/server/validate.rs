//! Submitted URL validation

use regex::Regex;
use std::sync::OnceLock;

/// Accepted shape of a submitted URL: http(s), dotted host name ending in a
/// 2-5 letter label, optional port and path
const URL_PATTERN: &str =
    r"^(http|https)://[a-zA-Z0-9]+([\-\.]{1}[a-zA-Z0-9]+)*\.[a-zA-Z]{2,5}(:[0-9]{1,5})?(\/.*)?$";

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// Trims and validates a submitted URL
///
/// # Returns
///
/// * `Some(&str)` - The trimmed URL
/// * `None` - The URL does not have the accepted shape
pub fn validate_url(url: &str) -> Option<&str> {
    let url = url.trim();
    url_regex().is_match(url).then_some(url)
}
