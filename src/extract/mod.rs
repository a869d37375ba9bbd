//! HTML fact extraction
//!
//! This module derives structural facts from a page:
//! - Document version (from the raw leading bytes)
//! - Title
//! - Headings grouped by level
//! - Login form presence
//! - Raw anchor hrefs
//!
//! Version detection and DOM extraction are two separate passes over the
//! input; the first never looks at the parsed document.

mod document;
mod version;

pub use document::{HtmlExtractor, HEADING_TAGS};
pub use version::{detect_html_version, HtmlVersion, VERSION_SCAN_WINDOW};

use crate::ParseError;
use std::collections::BTreeMap;

/// Structural facts extracted from one HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFacts {
    /// Version detected from the leading bytes
    pub html_version: HtmlVersion,

    /// Trimmed text of the first `<title>`, empty if absent
    pub title: String,

    /// Heading texts keyed by tag (`h1`..`h6`), levels without headings omitted
    pub headings: BTreeMap<String, Vec<String>>,

    /// Whether a password input is present
    pub has_login_form: bool,

    /// Anchor hrefs exactly as written, in document order
    pub raw_links: Vec<String>,
}

/// Extracts all page facts from raw HTML bytes
///
/// # Arguments
///
/// * `content` - The raw page bytes
///
/// # Returns
///
/// * `Ok(PageFacts)` - Facts extracted from the document
/// * `Err(ParseError)` - The bytes could not be parsed as a document
///
/// # Example
///
/// ```
/// use web_analyzer::extract::{extract, HtmlVersion};
///
/// let html = b"<!DOCTYPE html><html><head><title>Hi</title></head>\
///              <body><h2>A</h2><h2>B</h2><a href=\"/x\">x</a></body></html>";
/// let facts = extract(html).unwrap();
/// assert_eq!(facts.html_version, HtmlVersion::Html5);
/// assert_eq!(facts.title, "Hi");
/// assert_eq!(facts.headings["h2"], vec!["A", "B"]);
/// assert_eq!(facts.raw_links, vec!["/x"]);
/// ```
pub fn extract(content: &[u8]) -> Result<PageFacts, ParseError> {
    let extractor = HtmlExtractor::new(content)?;

    Ok(PageFacts {
        html_version: detect_html_version(content),
        title: extractor.title(),
        headings: extractor.headings(),
        has_login_form: extractor.has_login_form(),
        raw_links: extractor.links(),
    })
}
