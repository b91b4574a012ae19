use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP request settings (`[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Follow 3xx `Location` headers.
    pub follow_redirects: bool,
    /// Maximum number of redirects to follow.
    pub max_redirections: u32,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = no limit).
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header; None sends libcurl's default (none).
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirections: 10,
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: Some(default_user_agent()),
        }
    }
}

fn default_user_agent() -> String {
    format!("imgfetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImgfetchConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
///
/// Falls back to built-in defaults when no config directory can be determined.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("no config directory ({:#}); using defaults", e);
            return Ok(ImgfetchConfig::default());
        }
    };

    load_or_init_at(&path)
}

/// Like `load_or_init`, for a known path. An existing file must parse; a
/// missing one is created with defaults, and if that write fails the defaults
/// are used anyway.
pub fn load_or_init_at(path: &Path) -> Result<ImgfetchConfig> {
    if path.exists() {
        return load_from_path(path);
    }

    let default_cfg = ImgfetchConfig::default();
    match write_default(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(e) => tracing::warn!("could not save default config ({:#}); using defaults", e),
    }
    Ok(default_cfg)
}

fn write_default(path: &Path, cfg: &ImgfetchConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<ImgfetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ImgfetchConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
