//! Source file loading.

use std::fs;
use std::path::Path;

use prelim_lex::split_lines;

use crate::error::{DriverError, Result};

/// Reads `path` and splits it into physical lines.
///
/// Lines split the same way as [`prelim_lex::scan_source`]: on `\n`, with
/// one trailing `\r` dropped, and a final empty line after a trailing
/// newline. Bytes that are not UTF-8 are replaced rather than rejected.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(split_lines(&text).into_iter().map(str::to_owned).collect())
}
