//! The per-URL pipeline and the batch loop around it.
//!
//! Each URL goes validate → derive filename → fetch → resolve collision →
//! write. Any stage can end the URL with a `SkipReason`; the next URL starts
//! from scratch either way.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::collision::{self, DownloadMode, Resolution};
use crate::error::SkipReason;
use crate::fetch::Fetcher;
use crate::storage;
use crate::url_model;

/// Settings fixed for the whole run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub target_dir: PathBuf,
    pub mode: DownloadMode,
}

/// How one URL ended.
#[derive(Debug)]
pub enum Outcome {
    Saved { filename: String, bytes: usize },
    Skipped(SkipReason),
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub saved: usize,
    pub skipped: usize,
}

/// Runs URLs through the pipeline with a given fetcher.
pub struct Downloader<'a, F: Fetcher> {
    opts: &'a RunOptions,
    fetcher: &'a F,
}

impl<'a, F: Fetcher> Downloader<'a, F> {
    pub fn new(opts: &'a RunOptions, fetcher: &'a F) -> Self {
        Downloader { opts, fetcher }
    }

    /// Processes one raw input line.
    ///
    /// The `Downloading <url> to <file>` line goes to `out` right before the
    /// write. Only a failure to write to `out` is returned as `Err`.
    pub fn process<W: Write>(&self, raw: &str, out: &mut W) -> io::Result<Outcome> {
        let url = match url_model::validate_url(raw) {
            Ok(url) => url,
            Err(reason) => return Ok(Outcome::Skipped(reason)),
        };

        let Some(candidate) = url_model::filename_from_url(url) else {
            return Ok(Outcome::Skipped(SkipReason::InvalidFilename {
                url: url.to_string(),
            }));
        };

        let data = match self.fetcher.fetch(url) {
            Ok(data) => data,
            Err(source) => {
                return Ok(Outcome::Skipped(SkipReason::Fetch {
                    url: url.to_string(),
                    source,
                }))
            }
        };

        let filename =
            match collision::resolve_target(&self.opts.target_dir, candidate, self.opts.mode) {
                Resolution::Proceed(name) => name,
                Resolution::Exists => {
                    return Ok(Outcome::Skipped(SkipReason::AlreadyExists {
                        url: url.to_string(),
                    }))
                }
            };
        if filename != candidate {
            tracing::debug!(url, from = candidate, to = %filename, "renamed to avoid collision");
        }

        writeln!(out, "Downloading {} to {}", url, filename)?;

        let path = self.opts.target_dir.join(&filename);
        if let Err(source) = storage::write_file(&path, &data) {
            return Ok(Outcome::Skipped(SkipReason::Write { path, source }));
        }

        Ok(Outcome::Saved {
            filename,
            bytes: data.len(),
        })
    }

    /// Processes every line in order, printing one diagnostic to `err` per skipped URL.
    pub fn run<W: Write, E: Write>(
        &self,
        urls: &[String],
        out: &mut W,
        err: &mut E,
    ) -> io::Result<RunSummary> {
        tracing::info!(
            target_dir = %self.opts.target_dir.display(),
            mode = ?self.opts.mode,
            urls = urls.len(),
            "run started"
        );

        let mut summary = RunSummary::default();
        for raw in urls {
            summary.processed += 1;
            match self.process(raw, out)? {
                Outcome::Saved { filename, bytes } => {
                    summary.saved += 1;
                    tracing::info!(filename = %filename, bytes, "saved");
                }
                Outcome::Skipped(reason) => {
                    summary.skipped += 1;
                    tracing::warn!("{}", reason);
                    writeln!(err, "{}", reason)?;
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            saved = summary.saved,
            skipped = summary.skipped,
            "run finished"
        );
        Ok(summary)
    }
}
