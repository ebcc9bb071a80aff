//! Link and image extraction from listing-page HTML.

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// A navigational link discovered on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible anchor text, surrounding whitespace trimmed.
    pub text: String,
    /// The href attribute, verbatim. May be relative; resolving it against
    /// the site root is the caller's job.
    pub href: String,
}

/// Extracts anchors carrying the configured marker class.
///
/// The marker class is a heuristic coupled to the source site's markup: it
/// distinguishes the category/year navigation anchors from every other link
/// on the same page.
pub struct LinkExtractor {
    selector: Selector,
}

impl LinkExtractor {
    /// Compiles the selector for `a.<marker_class>`. An unparseable class
    /// name is a configuration error, not a crawl-time condition.
    pub fn new(marker_class: &str) -> Result<Self> {
        let selector = Selector::parse(&format!("a.{marker_class}"))
            .map_err(|e| anyhow!("invalid link marker class {marker_class:?}: {e}"))?;
        Ok(Self { selector })
    }

    /// Returns every matching anchor as (trimmed text, verbatim href), in
    /// document order. Anchors without an href are skipped. Zero matches is
    /// an empty vec, never an error.
    pub fn extract_links(&self, html: &str) -> Vec<Link> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                let text = el.text().collect::<String>().trim().to_string();
                Some(Link {
                    text,
                    href: href.to_string(),
                })
            })
            .collect()
    }
}

/// Returns the `src` of every `img` element that looks like an absolute
/// secure URL, in document order.
///
/// The `contains("https")` test is a substring heuristic inherited from the
/// site this was built against, not strict scheme validation. Images without
/// a src, or with a relative or plain-http src, are silently dropped.
pub fn extract_image_urls(html: &str) -> Vec<String> {
    let img = match Selector::parse("img") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let document = Html::parse_document(html);
    document
        .select(&img)
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| src.contains("https"))
        .map(str::to_string)
        .collect()
}
