//! `imgfetch <url-file>` – startup checks, then the download loop.

use anyhow::{Context, Result};
use imgfetch_core::config;
use imgfetch_core::fetch::CurlFetcher;
use imgfetch_core::input;
use imgfetch_core::pipeline::{Downloader, RunOptions};
use imgfetch_core::storage;
use std::io;

use super::Cli;

pub fn run_download(cli: &Cli) -> Result<()> {
    let target_dir = match &cli.path {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    // Fatal checks, in this order, before any network activity.
    storage::ensure_target_dir(&target_dir)?;
    let urls = input::load_url_list(&cli.url_file)?;
    let cfg = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let opts = RunOptions {
        target_dir,
        mode: cli.mode(),
    };
    let fetcher = CurlFetcher::new(cfg.fetch);
    let downloader = Downloader::new(&opts, &fetcher);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = downloader
        .run(&urls, &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write report")?;

    tracing::info!(
        "run completed: {} saved, {} skipped of {} url(s)",
        summary.saved,
        summary.skipped,
        summary.processed
    );
    Ok(())
}
