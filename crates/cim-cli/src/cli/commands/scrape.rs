//! `cim scrape` – crawl the image library into the output directory.

use anyhow::Result;
use cim_core::config::ScrapeConfig;
use cim_core::scrape::Scraper;
use std::path::PathBuf;

pub fn run_scrape(
    mut cfg: ScrapeConfig,
    output: Option<PathBuf>,
    listing_url: Option<String>,
    base_url: Option<String>,
    marker_class: Option<String>,
) -> Result<()> {
    if let Some(dir) = output {
        cfg.output_root = dir;
    }
    if let Some(url) = listing_url {
        cfg.listing_url = url;
    }
    if let Some(url) = base_url {
        cfg.base_url = url;
    }
    if let Some(class) = marker_class {
        cfg.link_marker_class = class;
    }

    let output_root = cfg.output_root.clone();
    let summary = Scraper::new(cfg)?.run()?;

    println!(
        "Mirrored {} images into {} ({} failed); {} categories ({} skipped), {} years ({} skipped)",
        summary.images_downloaded,
        output_root.display(),
        summary.images_failed,
        summary.categories,
        summary.categories_failed,
        summary.years,
        summary.years_failed,
    );
    Ok(())
}
