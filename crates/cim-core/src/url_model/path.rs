//! Filename extraction from URL path.

/// Extracts the last path segment from a URL for use as a local file name.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
/// Query strings and fragments are not part of the path and never leak into
/// the result.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').rev().find(|s| !s.is_empty())?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
