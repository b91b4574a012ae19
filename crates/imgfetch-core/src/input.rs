//! Reading the URL list file.

use std::fs;
use std::path::Path;

use crate::error::FatalError;

/// Reads `path` and returns its lines in order.
///
/// Line endings are left on each entry; the validator strips them. Bytes that
/// are not valid UTF-8 decode to U+FFFD within their own line, so one bad line
/// never hides the rest of the list.
pub fn load_url_list(path: &Path) -> Result<Vec<String>, FatalError> {
    if !path.is_file() {
        return Err(FatalError::MissingInputFile(path.to_path_buf()));
    }
    let contents = fs::read(path).map_err(|source| FatalError::UnreadableInputFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_line_bytes(&contents))
}

/// Splits on `\n`, keeping the terminator. A trailing newline does not add an empty entry.
pub fn split_lines(contents: &str) -> Vec<String> {
    split_line_bytes(contents.as_bytes())
}

/// Byte version of [`split_lines`]; each line is decoded lossily on its own.
pub fn split_line_bytes(contents: &[u8]) -> Vec<String> {
    contents
        .split_inclusive(|b| *b == b'\n')
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect()
}
