//! Crawl orchestrator: categories → years → images.
//!
//! Strictly sequential, one outstanding request at a time. A root fetch
//! failure is fatal (there is nothing to traverse); a failed category or
//! year is skipped so the rest of the run still yields images; a failed
//! image download skips only that image.

use anyhow::{Context, Result};

use crate::config::ScrapeConfig;
use crate::download;
use crate::extract::{self, LinkExtractor};
use crate::fetch;
use crate::mirror;
use crate::url_model;

/// Counts reported after a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Categories fully traversed (their own years may still have failed).
    pub categories: usize,
    /// Categories skipped because their listing page could not be fetched.
    pub categories_failed: usize,
    /// Years fully traversed.
    pub years: usize,
    /// Years skipped (page fetch or mirror directory failure).
    pub years_failed: usize,
    pub images_downloaded: usize,
    pub images_failed: usize,
}

/// Drives the three-level traversal over the configured site.
pub struct Scraper {
    config: ScrapeConfig,
    links: LinkExtractor,
}

impl Scraper {
    /// Builds a scraper for `config`, compiling the link marker selector.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let links = LinkExtractor::new(&config.link_marker_class)?;
        Ok(Self { config, links })
    }

    /// Runs the full crawl to natural completion. Fails only when the root
    /// listing page itself cannot be fetched.
    pub fn run(&self) -> Result<ScrapeSummary> {
        let mut summary = ScrapeSummary::default();

        let root_html = fetch::fetch_page(&self.config.listing_url).with_context(|| {
            format!("failed to fetch root listing {}", self.config.listing_url)
        })?;
        let categories = self.links.extract_links(&root_html);
        if categories.is_empty() {
            tracing::info!("root listing yielded no category links");
        }

        for category in &categories {
            match self.process_category(&category.text, &category.href, &mut summary) {
                Ok(()) => summary.categories += 1,
                Err(err) => {
                    summary.categories_failed += 1;
                    tracing::warn!("skipping category {:?}: {err:#}", category.text);
                }
            }
        }

        Ok(summary)
    }

    /// Fetches one category page and walks its year links. An error here
    /// means the category page itself was unreachable; per-year failures
    /// are absorbed below.
    fn process_category(
        &self,
        category: &str,
        href: &str,
        summary: &mut ScrapeSummary,
    ) -> Result<()> {
        let url = url_model::resolve_href(&self.config.base_url, href);
        let html = fetch::fetch_page(&url)?;

        let years = self.links.extract_links(&html);
        if years.is_empty() {
            tracing::info!("category {category:?} yielded no year links");
        }

        for year in &years {
            match self.process_year(category, &year.text, &year.href, summary) {
                Ok(()) => summary.years += 1,
                Err(err) => {
                    summary.years_failed += 1;
                    tracing::warn!("skipping year {:?} in {category:?}: {err:#}", year.text);
                }
            }
        }

        Ok(())
    }

    /// Fetches one year page, mirrors its directory, and downloads each
    /// image into it. Image URLs are taken in document order, duplicates
    /// included; overwrites make repeats idempotent.
    fn process_year(
        &self,
        category: &str,
        year: &str,
        href: &str,
        summary: &mut ScrapeSummary,
    ) -> Result<()> {
        let url = url_model::resolve_href(&self.config.base_url, href);
        let html = fetch::fetch_page(&url)?;

        let image_urls = extract::extract_image_urls(&html);
        if image_urls.is_empty() {
            tracing::info!("year {category:?}/{year:?} yielded no image URLs");
        }

        let dir = mirror::ensure_dir(&self.config.output_root, category, year)?;

        for image_url in &image_urls {
            let dest = dir.join(url_model::derive_filename(image_url));
            match download::download(image_url, &dest) {
                Ok(bytes) => {
                    summary.images_downloaded += 1;
                    tracing::info!("downloaded {} ({bytes} bytes)", dest.display());
                }
                Err(err) => {
                    summary.images_failed += 1;
                    tracing::warn!("failed to download {image_url}: {err}");
                }
            }
        }

        Ok(())
    }
}
