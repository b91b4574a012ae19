//! Filename extraction from the URL's last path segment.

/// Returns the text after the last `/` if it looks like `<name>.<letters>`.
///
/// The extension is whatever follows the last dot and must be ASCII letters
/// only, so a trailing query string (`a.jpg?w=2`) or a bare directory
/// (`/path/`) yields `None`.
pub fn filename_from_url(url: &str) -> Option<&str> {
    let (_, segment) = url.rsplit_once('/')?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(segment)
}
