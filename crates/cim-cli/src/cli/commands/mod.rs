//! CLI command handlers, one file per command.

mod config;
mod dataset;
mod scrape;

pub use config::run_config;
pub use dataset::run_dataset;
pub use scrape::run_scrape;
