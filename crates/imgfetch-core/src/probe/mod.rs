//! HTTP HEAD / metadata probing.
//!
//! Uses the curl crate (libcurl) to fetch response headers without
//! transferring the body, capturing `Content-Type` and `Content-Length`
//! for the download decision.

mod parse;

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Bound on connect and total time for the metadata probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a HEAD request: the headers the fetch decision is based on.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Raw `Content-Type` value if present (parameters included).
    pub content_type: Option<String>,
    /// Declared size in bytes, if `Content-Length` is present and parses.
    pub content_length: Option<u64>,
}

impl ProbeResult {
    /// True if the declared content type begins with `image/`.
    /// A missing header counts as non-image.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false)
    }

    /// Declared size in megabytes. An absent or unparsable length counts
    /// as 0, so missing metadata never blocks a download on its own.
    pub fn size_mb(&self) -> f64 {
        self.content_length.unwrap_or(0) as f64 / (1024.0 * 1024.0)
    }
}

/// Performs a HEAD request and returns parsed metadata.
///
/// Follows redirects. Runs in the current thread and blocks for up to the
/// probe timeout.
pub fn probe(url: &str) -> Result<ProbeResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(PROBE_TIMEOUT)?;
    easy.timeout(PROBE_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    Ok(parse::parse_headers(&headers))
}
