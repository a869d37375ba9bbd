use crate::LinkError;
use url::{ParseError, Url};

/// Resolves a single href against a base URL
///
/// Absolute hrefs are returned as written, minus the surrounding spaces and
/// control characters that URL parsing ignores. Relative references are
/// joined onto the base following RFC 3986.
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(LinkError::Resolution)` - The href cannot be parsed or resolved
pub fn resolve_link(href: &str, base: &Url) -> Result<String, LinkError> {
    let href = href.trim_matches(|c: char| c <= ' ');

    match Url::parse(href) {
        Ok(_) => Ok(href.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => base
            .join(href)
            .map(|url| url.to_string())
            .map_err(|source| LinkError::Resolution {
                link: href.to_string(),
                source,
            }),
        Err(source) => Err(LinkError::Resolution {
            link: href.to_string(),
            source,
        }),
    }
}

/// Converts every href to an absolute URL
///
/// Hrefs that fail to resolve are logged and skipped; order and duplicates
/// of the remaining links are preserved.
///
/// # Arguments
///
/// * `links` - Raw hrefs as found in the document
/// * `base_url` - URL of the page the hrefs came from
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The resolved links
/// * `Err(LinkError::InvalidBaseUrl)` - The base URL does not parse
///
/// # Example
///
/// ```
/// use web_analyzer::links::resolve_links;
///
/// let links = vec!["/path".to_string(), "https://other.com/x".to_string()];
/// let resolved = resolve_links(&links, "https://example.com").unwrap();
/// assert_eq!(resolved, vec!["https://example.com/path", "https://other.com/x"]);
/// ```
pub fn resolve_links(links: &[String], base_url: &str) -> Result<Vec<String>, LinkError> {
    let base = parse_base_url(base_url)?;

    let resolved = links
        .iter()
        .filter_map(|href| match resolve_link(href, &base) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Skipping link: {}", e);
                None
            }
        })
        .collect();

    Ok(resolved)
}

/// Parses the URL of the analyzed page
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, LinkError> {
    Url::parse(base_url).map_err(|source| LinkError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })
}
