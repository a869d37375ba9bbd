//! Document version detection
//!
//! The version is read from the raw bytes, not from the parsed DOM: only the
//! first [`VERSION_SCAN_WINDOW`] bytes are scanned, case-insensitively, for
//! literal doctype and root-element markers. Truncated or malformed documents
//! are classified by whatever markers survive in that window.

use serde::Serialize;
use std::fmt;

/// Number of leading bytes inspected for version markers
pub const VERSION_SCAN_WINDOW: usize = 1024;

const HTML5_DOCTYPE: &str = "<!doctype html>";
const XHTML_10_DOCTYPE: &str = r#"<!doctype html public "-//w3c//dtd xhtml 1.0"#;
const XHTML_11_DOCTYPE: &str = r#"<!doctype html public "-//w3c//dtd xhtml 1.1"#;

/// HTML version of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HtmlVersion {
    #[serde(rename = "HTML5")]
    Html5,
    #[serde(rename = "XHTML 1.0")]
    Xhtml10,
    #[serde(rename = "XHTML 1.1")]
    Xhtml11,
    #[serde(rename = "HTML4 or Earlier")]
    Html4OrEarlier,
    Unknown,
}

impl HtmlVersion {
    /// Returns the human-readable label for this version
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html5 => "HTML5",
            Self::Xhtml10 => "XHTML 1.0",
            Self::Xhtml11 => "XHTML 1.1",
            Self::Html4OrEarlier => "HTML4 or Earlier",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detects the HTML version of a document from its leading bytes
///
/// Markers are checked in precedence order: HTML5 doctype, XHTML 1.0 public
/// identifier, XHTML 1.1 public identifier, then a bare `<html>` / `<html `
/// root tag. Anything else is [`HtmlVersion::Unknown`].
///
/// # Examples
///
/// ```
/// use web_analyzer::extract::{detect_html_version, HtmlVersion};
///
/// assert_eq!(detect_html_version(b"<!DOCTYPE html><html></html>"), HtmlVersion::Html5);
/// assert_eq!(detect_html_version(b"<html><body></body></html>"), HtmlVersion::Html4OrEarlier);
/// assert_eq!(detect_html_version(b"plain text"), HtmlVersion::Unknown);
/// ```
pub fn detect_html_version(content: &[u8]) -> HtmlVersion {
    let window = &content[..content.len().min(VERSION_SCAN_WINDOW)];
    let lowered = window.to_ascii_lowercase();
    // The window may split a multi-byte character; markers are ASCII so lossy is fine.
    let head = String::from_utf8_lossy(&lowered);

    if head.contains(HTML5_DOCTYPE) {
        HtmlVersion::Html5
    } else if head.contains(XHTML_10_DOCTYPE) {
        HtmlVersion::Xhtml10
    } else if head.contains(XHTML_11_DOCTYPE) {
        HtmlVersion::Xhtml11
    } else if head.contains("<html>") || head.contains("<html ") {
        HtmlVersion::Html4OrEarlier
    } else {
        HtmlVersion::Unknown
    }
}
