//! Sequential fetch pipeline: probe, filter, name, download.
//!
//! Each URL goes through a decision phase (`plan_one`) and, when it
//! survives the filters, a download phase. Outcomes are reported per URL
//! and a failure on one URL never aborts the batch.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FetchConfig;
use crate::downloader;
use crate::probe;
use crate::url_model;

/// Why a URL was deliberately not downloaded.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Declared content type does not begin with `image/`, or is absent.
    NotAnImage,
    /// Declared size exceeds the configured cap.
    TooLarge { size_mb: f64 },
    /// A file with the derived name already exists. Detection is by name
    /// only; the existing bytes are never compared or overwritten.
    AlreadyDownloaded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnImage => write!(f, "not an image"),
            SkipReason::TooLarge { size_mb } => write!(f, "too large: {:.2} MB", size_mb),
            SkipReason::AlreadyDownloaded => write!(f, "already downloaded"),
        }
    }
}

/// Decision for one URL after probing and naming.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Deliberately not downloading.
    Skip(SkipReason),
    /// Download the body to `target`.
    Fetch { target: PathBuf },
}

/// Terminal outcome of one URL. All variants are terminal; there are no
/// retries.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Saved { path: PathBuf, bytes: u64 },
    Skipped(SkipReason),
    Failed(String),
}

/// One entry of a batch report, in input order.
#[derive(Debug)]
pub struct UrlReport {
    pub url: String,
    pub outcome: Outcome,
}

/// Creates the download folder (and parents) if absent. Idempotent.
pub fn ensure_download_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create download folder: {}", dir.display()))
}

/// Probes `url` and decides whether to download it, and to where.
///
/// The body is not transferred. An underivable filename (URL ending in
/// `/`, bare host) is an error, not a silent write into the folder
/// itself.
pub fn plan_one(url: &str, cfg: &FetchConfig) -> Result<Plan> {
    let meta = probe::probe(url)?;

    if !meta.is_image() {
        return Ok(Plan::Skip(SkipReason::NotAnImage));
    }

    let size_mb = meta.size_mb();
    if size_mb > cfg.max_size_mb {
        return Ok(Plan::Skip(SkipReason::TooLarge { size_mb }));
    }

    let filename = url_model::derive_filename(url)
        .ok_or_else(|| anyhow::anyhow!("cannot derive a filename from {}", url))?;
    let target = cfg.download_dir.join(filename);

    if target.exists() {
        return Ok(Plan::Skip(SkipReason::AlreadyDownloaded));
    }

    Ok(Plan::Fetch { target })
}

/// Runs the full pipeline for one URL. The caller is responsible for the
/// download folder existing (see [`ensure_download_dir`]).
pub fn fetch_one(url: &str, cfg: &FetchConfig) -> Result<Outcome> {
    match plan_one(url, cfg)? {
        Plan::Skip(reason) => Ok(Outcome::Skipped(reason)),
        Plan::Fetch { target } => {
            let bytes = downloader::download_to_file(url, &target)
                .with_context(|| format!("GET {}", url))?;
            Ok(Outcome::Saved {
                path: target,
                bytes,
            })
        }
    }
}

/// Processes `urls` strictly sequentially, in input order.
///
/// Trims whitespace from each URL and drops empties without a report
/// entry. Any per-URL error is captured as a `Failed` outcome and
/// processing continues with the next URL. Only folder creation is
/// batch-fatal, since no download can land without it.
pub fn fetch_all(urls: &[String], cfg: &FetchConfig) -> Result<Vec<UrlReport>> {
    ensure_download_dir(&cfg.download_dir)?;

    let mut reports = Vec::new();
    for raw in urls {
        let url = raw.trim();
        if url.is_empty() {
            continue;
        }
        let outcome = match fetch_one(url, cfg) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed(format!("{:#}", err)),
        };
        match &outcome {
            Outcome::Saved { path, bytes } => {
                tracing::info!("saved {} -> {} ({} bytes)", url, path.display(), bytes);
            }
            Outcome::Skipped(reason) => tracing::info!("skipping {} ({})", url, reason),
            Outcome::Failed(msg) => tracing::warn!("failed to download {}: {}", url, msg),
        }
        reports.push(UrlReport {
            url: url.to_string(),
            outcome,
        });
    }
    Ok(reports)
}
