//! `cim config` – show the config file path and effective values.

use anyhow::Result;
use cim_core::config::{self, ScrapeConfig};
use cim_core::logging;

pub fn run_config(cfg: &ScrapeConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("log file: {}", logging::log_path()?.display());
    println!("base_url = {}", cfg.base_url);
    println!("listing_url = {}", cfg.listing_url);
    println!("link_marker_class = {}", cfg.link_marker_class);
    println!("output_root = {}", cfg.output_root.display());
    Ok(())
}
