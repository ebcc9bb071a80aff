//! Href resolution against the configured site root.

/// Resolves an extracted href to an absolute URL.
///
/// Absolute hrefs pass through untouched; anything else is prefixed with
/// `base_url`, with exactly one `/` between the two. This matches how the
/// source site links its listing pages (root-relative hrefs), not full
/// RFC 3986 reference resolution.
pub fn resolve_href(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}
