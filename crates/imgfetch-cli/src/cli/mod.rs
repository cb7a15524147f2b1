//! CLI for the imgfetch image downloader.

mod fetch;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use imgfetch_core::config;
use std::io::{self, BufRead, Write};

/// Top-level CLI for the imgfetch image downloader.
///
/// Takes no flags or arguments: URLs are read from one interactive prompt
/// as a comma-separated list; folder and size cap come from the config
/// file.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: filtered batch image downloader", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        println!("imgfetch: filtered batch image downloader");
        print!("Enter image URL(s) (separate multiple with commas): ");
        io::stdout().flush().context("flush prompt")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read URL line")?;

        let urls = input::split_url_line(&line);
        fetch::run_fetch(&urls, &cfg)
    }
}

#[cfg(test)]
mod tests;
