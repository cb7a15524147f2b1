//! The fetch loop: plan each URL, print notices, download survivors.

use anyhow::Result;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::downloader;
use imgfetch_core::fetcher::{self, Plan};

/// Processes `urls` in input order, printing one notice per decision.
///
/// Failures are reported per URL and never abort the batch; the exit
/// status does not distinguish partial failure from full success.
pub fn run_fetch(urls: &[String], cfg: &FetchConfig) -> Result<()> {
    fetcher::ensure_download_dir(&cfg.download_dir)?;

    for raw in urls {
        let url = raw.trim();
        if url.is_empty() {
            continue;
        }
        match fetcher::plan_one(url, cfg) {
            Ok(Plan::Skip(reason)) => println!("Skipping {} ({})", url, reason),
            Ok(Plan::Fetch { target }) => {
                println!("Downloading {} -> {}", url, target.display());
                match downloader::download_to_file(url, &target) {
                    Ok(_) => println!("Saved: {}", target.display()),
                    Err(err) => println!("Failed to download {}: {}", url, err),
                }
            }
            Err(err) => println!("Failed to download {}: {:#}", url, err),
        }
    }

    Ok(())
}
