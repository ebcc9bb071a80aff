pub mod config;
pub mod logging;

pub mod dataset;
pub mod download;
pub mod extract;
pub mod fetch;
pub mod mirror;
pub mod scrape;
pub mod url_model;
