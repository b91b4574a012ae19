//! Single-request HTTP GET.
//!
//! The pipeline only sees the `Fetcher` trait. `CurlFetcher` performs the real
//! request with libcurl's easy interface and reads the whole body into memory.

mod status;

use std::str;
use std::time::Duration;
use thiserror::Error;

use crate::config::FetchConfig;

pub use status::{parse_status_line, StatusLine};

/// Failure of a single GET, split the way diagnostics need it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status.
    #[error("HTTP error {code}{}", reason_suffix(.reason))]
    Http { code: u32, reason: Option<String> },

    /// No usable response: DNS, connect, TLS, timeout and the like.
    #[error("{0}")]
    Transport(#[from] curl::Error),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" ({})", r),
        None => String::new(),
    }
}

/// Downloads one URL in full.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// libcurl-backed fetcher. One easy handle per request, no retries.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    opts: FetchConfig,
}

impl CurlFetcher {
    pub fn new(opts: FetchConfig) -> Self {
        CurlFetcher { opts }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut last_status: Option<StatusLine> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(self.opts.follow_redirects)?;
        easy.max_redirections(self.opts.max_redirections)?;
        if let Some(secs) = self.opts.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = self.opts.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            // With redirects every hop sends a status line; the last one wins.
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    if let Some(status) = parse_status_line(line) {
                        last_status = Some(status);
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(url, code, bytes = body.len(), "GET finished");
        if !(200..300).contains(&code) {
            let reason = last_status
                .filter(|s| s.code == code)
                .and_then(|s| s.reason);
            return Err(FetchError::Http { code, reason });
        }

        Ok(body)
    }
}
