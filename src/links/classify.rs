use url::Url;

/// Prefix removed from link hosts before comparison
const WWW_PREFIX: &str = "www.";

/// Host of a URL together with its explicit port, if any
///
/// Hosts without a port compare as the bare host name; URLs without a host
/// (such as `mailto:`) yield an empty string.
pub fn host_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Returns true if `link` points to the same host as `base`
///
/// One leading `www.` is stripped from the link host only; the base host is
/// compared as given. So `www.example.com` is internal to `example.com`, but
/// `example.com` is external to `www.example.com`.
///
/// Links that do not parse are external.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use web_analyzer::links::is_internal_link;
///
/// let base = Url::parse("https://example.com").unwrap();
/// assert!(is_internal_link("https://www.example.com/about", &base));
/// assert!(!is_internal_link("https://other.com/", &base));
/// ```
pub fn is_internal_link(link: &str, base: &Url) -> bool {
    let Ok(link) = Url::parse(link) else {
        return false;
    };

    let link_host = host_key(&link);
    let link_host = link_host.strip_prefix(WWW_PREFIX).unwrap_or(&link_host);

    link_host == host_key(base)
}
