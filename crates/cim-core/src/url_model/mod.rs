//! URL modeling: local filename derivation and href resolution.
//!
//! File names come from the final segment of an image URL's path, sanitized
//! for Linux filesystems; the site's relative hrefs are resolved against the
//! configured base URL.

mod path;
mod resolve;
mod sanitize;

pub use path::filename_from_url_path;
pub use resolve::resolve_href;
pub use sanitize::sanitize_component;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "image.bin";

/// Derives the local file name for an image URL: the final path segment,
/// sanitized. Falls back to `image.bin` when the path is empty or the
/// segment sanitizes away entirely.
///
/// `derive_filename("https://example.com/images/2020/cent.jpg")` → `"cent.jpg"`
///
/// Sanitization trims leading/trailing dots, so a hidden-file-style segment
/// like `.notdef.jpg` is saved as `notdef.jpg` — alongside the image
/// extractor's substring filter, an accepted imprecision: the segment is
/// not taken fully verbatim when it would produce a dotfile.
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(segment) => segment,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_component(&raw);
    if sanitized.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
