//! `cim dataset <slug>` – fetch a Kaggle dataset archive and unzip it.

use anyhow::Result;
use cim_core::dataset::{download_dataset, KaggleCredentials};
use std::path::Path;

pub fn run_dataset(slug: &str, output: &Path) -> Result<()> {
    let creds = KaggleCredentials::discover()?;
    download_dataset(&creds, slug, output)?;
    println!("Dataset {slug} downloaded and extracted to {}", output.display());
    Ok(())
}
