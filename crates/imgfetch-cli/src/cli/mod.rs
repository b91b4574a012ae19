//! CLI for imgfetch.

mod download;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::collision::DownloadMode;
use std::path::PathBuf;

use download::run_download;

/// Download every image URL listed in a file.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
#[command(about = "Download the images listed in a URL file", long_about = None)]
pub struct Cli {
    /// File containing the image URLs to download, one per line.
    pub url_file: PathBuf,

    /// Directory to store downloaded images in (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Overwrite existing files.
    #[arg(short, long, conflicts_with = "rename")]
    pub force: bool,

    /// Save as name_2.ext, name_3.ext, ... if the file already exists.
    #[arg(short, long)]
    pub rename: bool,

    /// Read configuration from this TOML file instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Collision mode selected by `--force` / `--rename`.
    pub fn mode(&self) -> DownloadMode {
        if self.force {
            DownloadMode::Overwrite
        } else if self.rename {
            DownloadMode::RenameOnConflict
        } else {
            DownloadMode::SkipExisting
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("parsed args: {:?}", cli);
        run_download(&cli)
    }
}
