use std::fs;
use std::path::Path;

use crate::{GettextError, GettextResult};

/// Reads the whole file, attaching the path to any failure.
pub fn read_file(path: &Path) -> GettextResult<Vec<u8>> {
    fs::read(path).map_err(|source| GettextError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the file's contents with `contents`.
pub fn write_file(path: &Path, contents: &[u8]) -> GettextResult<()> {
    fs::write(path, contents).map_err(|source| GettextError::Write {
        path: path.to_path_buf(),
        source,
    })
}
