use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Outcome of a single [`remove_entry`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The entry existed and was removed.
    Removed,
    /// The entry was already gone when we got to it.
    Vanished,
}

/// Remove a single directory entry.
///
/// Files and symlinks are unlinked (a symlink to a directory removes the
/// link, not the target). An empty directory is removed with `remove_dir`.
/// A directory with children is reported as
/// [`FsOpError::NonEmptyDirectory`] and left untouched.
///
/// A path that does not exist is treated as [`Removal::Vanished`] so a
/// listing that went stale between read and delete does not abort the run.
pub fn remove_entry(path: &Path) -> Result<Removal, FsOpError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Removal::Vanished),
        Err(e) => return Err(FsOpError::at(path, e)),
    };

    let res = if meta.is_dir() {
        let has_children = fs::read_dir(path)
            .map_err(|e| FsOpError::at(path, e))?
            .next()
            .is_some();
        if has_children {
            return Err(FsOpError::NonEmptyDirectory(path.to_path_buf()));
        }
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    match res {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Vanished),
        Err(e) => Err(FsOpError::at(path, e)),
    }
}
