//! Page fetching over HTTP.
//!
//! One blocking curl easy handle per request, bounded timeouts, redirects
//! followed. No retries: a failure propagates to the immediate caller, which
//! decides whether the enclosing traversal step aborts or is skipped.

use std::time::Duration;
use thiserror::Error;

/// Error fetching a single URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Transfer completed with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(300);

/// Fetches `url` with a single GET and returns the raw body bytes.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TRANSFER_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}

/// Fetches `url` and decodes the body as text. Decoding is lossy: listing
/// pages occasionally carry stray bytes and a replacement char is harmless.
pub fn fetch_page(url: &str) -> Result<String, FetchError> {
    let body = fetch_bytes(url)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}
