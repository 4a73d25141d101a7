use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs_op::error::FsOpError;

/// Check that `dir` exists and is a directory.
pub fn ensure_target_dir(dir: &Path) -> Result<(), FsOpError> {
    match fs::metadata(dir) {
        Ok(m) if m.is_dir() => Ok(()),
        Ok(_) => Err(FsOpError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(FsOpError::MissingTarget(dir.to_path_buf()))
        }
        Err(e) => Err(FsOpError::at(dir, e)),
    }
}

/// List the direct entries of `dir`, sorted by file name.
///
/// `read_dir` order is filesystem dependent; sorting first means a seeded
/// shuffle picks the same entries on every run.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, FsOpError> {
    ensure_target_dir(dir)?;
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FsOpError::at(dir, e))? {
        let entry = entry.map_err(|e| FsOpError::at(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
