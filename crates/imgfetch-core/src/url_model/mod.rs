//! URL validation and filename derivation.
//!
//! Both operate on the raw line text. Nothing is percent-decoded or normalized:
//! the URL handed to the fetcher and the filename written to disk are exactly
//! what the input file contained (minus trailing line endings).

mod path;

pub use path::filename_from_url;

use crate::error::SkipReason;

/// Strips trailing CR/LF characters left over from the input file.
pub fn strip_line_ending(raw: &str) -> &str {
    raw.trim_end_matches(|c| c == '\r' || c == '\n')
}

/// Validates one input line and returns the URL to fetch.
///
/// The line must look like `<letters>://<something>`; the scheme must then be
/// `http` or `https` (any case).
pub fn validate_url(raw: &str) -> Result<&str, SkipReason> {
    let url = strip_line_ending(raw);

    let Some(scheme) = scheme_of(url) else {
        return Err(SkipReason::Malformed {
            url: url.to_string(),
        });
    };

    if !(scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")) {
        return Err(SkipReason::InvalidProtocol {
            url: url.to_string(),
        });
    }

    Ok(url)
}

/// Returns the scheme if `url` has the shape `<ascii letters>://<non-empty>`.
fn scheme_of(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if rest.is_empty() {
        return None;
    }
    Some(scheme)
}
