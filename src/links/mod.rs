//! Link resolution and classification
//!
//! This module turns the raw hrefs of a page into absolute URLs and tags each
//! one as internal (same host as the page) or external.

mod classify;
mod resolve;

pub use classify::{host_key, is_internal_link};
pub use resolve::{resolve_link, resolve_links};

use crate::LinkError;
use resolve::parse_base_url;
use serde::Serialize;

/// An absolute link tagged with its relation to the source page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedLink {
    /// The absolute URL
    pub url: String,

    /// Whether the URL is on the source page's host
    pub is_internal: bool,
}

/// Resolves raw hrefs against the page URL and classifies each result
///
/// # Arguments
///
/// * `raw_links` - Hrefs as found in the document
/// * `base_url` - URL of the analyzed page
///
/// # Returns
///
/// * `Ok(Vec<ClassifiedLink>)` - One entry per href that resolved, in order
/// * `Err(LinkError::InvalidBaseUrl)` - The base URL does not parse
///
/// Hrefs that cannot be resolved are logged and left out.
///
/// # Example
///
/// ```
/// use web_analyzer::links::resolve_and_classify;
///
/// let raw = vec!["/about".to_string(), "https://other.com/".to_string()];
/// let links = resolve_and_classify(&raw, "https://example.com").unwrap();
///
/// assert_eq!(links[0].url, "https://example.com/about");
/// assert!(links[0].is_internal);
/// assert!(!links[1].is_internal);
/// ```
pub fn resolve_and_classify(
    raw_links: &[String],
    base_url: &str,
) -> Result<Vec<ClassifiedLink>, LinkError> {
    let base = parse_base_url(base_url)?;

    let classified = resolve_links(raw_links, base_url)?
        .into_iter()
        .map(|url| ClassifiedLink {
            is_internal: is_internal_link(&url, &base),
            url,
        })
        .collect();

    Ok(classified)
}
