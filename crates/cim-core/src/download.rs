//! Individual image download: fetch bytes, write to the mirrored path.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::fetch::{self, FetchError};

/// Failure retrieving or writing a single image. Non-fatal to the run: the
/// orchestrator reports it and moves on to the next image.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Fetches `image_url` and writes the full body to `dest`, overwriting any
/// existing file. Returns the number of bytes written.
///
/// The body is buffered before the file is touched, so a failed transfer or
/// error status never leaves a truncated file behind.
pub fn download(image_url: &str, dest: &Path) -> Result<u64, DownloadError> {
    let body = fetch::fetch_bytes(image_url)?;
    std::fs::write(dest, &body).map_err(|source| DownloadError::Write {
        path: dest.display().to_string(),
        source,
    })?;
    Ok(body.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn connection_failure_is_fetch_error_and_leaves_no_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("x.jpg");
        // Port 1 refuses connections; the body never arrives, so the
        // destination must stay untouched.
        let err = download("http://127.0.0.1:1/x.jpg", &dest).unwrap_err();
        assert!(matches!(err, DownloadError::Fetch(_)));
        assert!(!dest.exists());
    }
}
