//! Best-effort durability flush after fixtures are written.
//!
//! Nothing here returns an error: a flush that fails is logged and the
//! caller carries on, matching the advisory nature of `sync(2)`.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How hard to push written fixtures to stable storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlushMode {
    /// Skip flushing entirely.
    None,
    /// `fsync` each written file and then the directory holding them.
    Files,
    /// Process-wide `sync(2)`. Falls back to [`FlushMode::Files`] where the
    /// call is not available.
    #[default]
    System,
}

/// Flush according to `mode`. `files` are the paths written by this run and
/// `dir` the directory they were written into.
pub fn flush(mode: FlushMode, dir: &Path, files: &[PathBuf]) {
    match mode {
        FlushMode::None => debug!("flush disabled"),
        FlushMode::Files => sync_files(dir, files),
        FlushMode::System => sync_system(dir, files),
    }
}

#[cfg(unix)]
fn sync_system(_dir: &Path, _files: &[PathBuf]) {
    debug!("issuing sync(2)");
    nix::unistd::sync();
}

#[cfg(not(unix))]
fn sync_system(dir: &Path, files: &[PathBuf]) {
    debug!("no system-wide sync on this platform, flushing files instead");
    sync_files(dir, files);
}

fn sync_files(dir: &Path, files: &[PathBuf]) {
    let mut failed = 0usize;
    for p in files {
        if let Err(e) = File::open(p).and_then(|f| f.sync_all()) {
            warn!(path = %p.display(), error = %e, "fsync failed");
            failed += 1;
        }
    }
    sync_dir(dir);
    debug!(files = files.len(), failed, "per-file flush finished");
}

// Directory fsync persists the new names; only meaningful on Unix.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|f| f.sync_all()) {
        warn!(path = %dir.display(), error = %e, "directory fsync failed");
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}
