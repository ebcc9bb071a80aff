//! CLI for the CIM coin image mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cim_core::config;
use std::path::PathBuf;

use commands::{run_config, run_dataset, run_scrape};

/// Top-level CLI for the CIM coin image mirror.
#[derive(Debug, Parser)]
#[command(name = "cim")]
#[command(about = "CIM: hierarchical coin image mirror", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Crawl the image library and mirror it into the output directory.
    Scrape {
        /// Destination directory (defaults to the configured output_root).
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Root listing page to crawl.
        #[arg(long, value_name = "URL")]
        listing_url: Option<String>,

        /// Site root used to resolve relative hrefs.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// CSS class of the navigational anchors on listing pages.
        #[arg(long, value_name = "CLASS")]
        marker_class: Option<String>,
    },

    /// Download a Kaggle dataset archive and unzip it.
    Dataset {
        /// Dataset slug, e.g. "balabaskar/count-coins-image-dataset".
        slug: String,

        /// Directory to extract into.
        #[arg(long, value_name = "DIR", default_value = "datasets/coins")]
        output: PathBuf,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scrape {
                output,
                listing_url,
                base_url,
                marker_class,
            } => run_scrape(cfg, output, listing_url, base_url, marker_class)?,
            CliCommand::Dataset { slug, output } => run_dataset(&slug, &output)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
