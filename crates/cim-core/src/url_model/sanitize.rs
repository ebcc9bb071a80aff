//! Filesystem-safe path components.

/// Sanitizes link text or a URL segment for use as a single path component.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims surrounding whitespace and leading/trailing dots
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Spaces are kept: category names like "America the Beautiful Quarters"
/// stay readable as directory names. The result may be empty; callers
/// substitute their own fallback.
pub fn sanitize_component(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = cleaned.trim().trim_matches('.').trim();

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
