//! Kaggle dataset acquisition.
//!
//! The crawl pipeline treats this as an external collaborator: authenticate,
//! fetch a named dataset archive, unzip it into a target path. Credentials
//! come from `KAGGLE_USERNAME`/`KAGGLE_KEY` or the `~/.kaggle/kaggle.json`
//! file the kaggle CLI writes.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::time::Duration;

const DOWNLOAD_ENDPOINT: &str = "https://www.kaggle.com/api/v1/datasets/download";

/// Kaggle API credentials, sent as HTTP basic auth.
#[derive(Debug, Clone, Deserialize)]
pub struct KaggleCredentials {
    pub username: String,
    pub key: String,
}

impl KaggleCredentials {
    /// Reads credentials from the environment, falling back to
    /// `~/.kaggle/kaggle.json`.
    pub fn discover() -> Result<Self> {
        if let (Ok(username), Ok(key)) = (
            std::env::var("KAGGLE_USERNAME"),
            std::env::var("KAGGLE_KEY"),
        ) {
            return Ok(Self { username, key });
        }

        let home = std::env::var_os("HOME")
            .context("KAGGLE_USERNAME/KAGGLE_KEY are not set and HOME is unset")?;
        let path = Path::new(&home).join(".kaggle").join("kaggle.json");
        let data = fs::read_to_string(&path)
            .with_context(|| format!("no Kaggle credentials in env or at {}", path.display()))?;
        let creds: KaggleCredentials = serde_json::from_str(&data)
            .with_context(|| format!("malformed {}", path.display()))?;
        Ok(creds)
    }
}

/// Downloads dataset `slug` (e.g. "balabaskar/count-coins-image-dataset")
/// and extracts the archive into `dest`, creating it if needed.
pub fn download_dataset(creds: &KaggleCredentials, slug: &str, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;

    let url = format!("{DOWNLOAD_ENDPOINT}/{slug}");
    let mut archive = tempfile::tempfile().context("failed to create temp file for archive")?;
    fetch_archive(&url, creds, &mut archive)?;

    archive.seek(SeekFrom::Start(0))?;
    extract_archive(archive, dest)
        .with_context(|| format!("failed to extract dataset {slug}"))
}

fn fetch_archive(url: &str, creds: &KaggleCredentials, out: &mut fs::File) -> Result<()> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid dataset URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.username(&creds.username)?;
    easy.password(&creds.key)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    {
        let mut out = &*out;
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| {
            match out.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("archive write failed: {e}");
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform().context("dataset download failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        bail!("GET {} returned HTTP {} (check Kaggle credentials)", url, code);
    }
    Ok(())
}

fn extract_archive<R: Read + Seek>(archive: R, dest: &Path) -> Result<()> {
    let mut zip = zip::ZipArchive::new(archive).context("dataset archive is not a valid zip")?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let rel = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => bail!("archive entry {:?} escapes the target directory", entry.name()),
        };
        let out_path = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&out_path)
            .with_context(|| format!("failed to create {}", out_path.display()))?;
        std::io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}
