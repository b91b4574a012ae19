//! Target directory checks and file writes.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::FatalError;

/// Startup check: `dir` must exist and be a directory.
pub fn ensure_target_dir(dir: &Path) -> Result<(), FatalError> {
    if !dir.exists() {
        return Err(FatalError::MissingTargetDir(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(FatalError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Writes `data` to `path`, creating the file or truncating an existing one.
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
