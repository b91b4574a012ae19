//! Deciding the final filename when the target may already exist.
//!
//! Probing is plain `is_file` checks against the target directory; the run is
//! sequential so nothing else races with it.

use std::path::Path;

/// What to do when the derived filename is already taken. Fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadMode {
    /// Leave the existing file alone and skip the URL.
    #[default]
    SkipExisting,
    /// Replace the existing file.
    Overwrite,
    /// Save as `stem_2.ext`, `stem_3.ext`, ... (first free name).
    RenameOnConflict,
}

/// Result of resolving a candidate filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write to this filename (differs from the candidate after a rename).
    Proceed(String),
    /// The file exists and the mode forbids touching it.
    Exists,
}

/// Picks the filename to write inside `dir`.
pub fn resolve_target(dir: &Path, filename: &str, mode: DownloadMode) -> Resolution {
    if !dir.join(filename).is_file() {
        return Resolution::Proceed(filename.to_string());
    }

    match mode {
        DownloadMode::SkipExisting => Resolution::Exists,
        DownloadMode::Overwrite => Resolution::Proceed(filename.to_string()),
        DownloadMode::RenameOnConflict => {
            let mut counter: u64 = 2;
            loop {
                let candidate = numbered_name(filename, counter);
                if !dir.join(&candidate).is_file() {
                    return Resolution::Proceed(candidate);
                }
                counter += 1;
            }
        }
    }
}

/// `photo.jpg`, 2 → `photo_2.jpg`. Splits at the last dot; a name without an
/// extension just gets the suffix.
pub fn numbered_name(filename: &str, counter: u64) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => format!("{}_{}.{}", stem, counter, ext),
        _ => format!("{}_{}", filename, counter),
    }
}
