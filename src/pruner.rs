//! Fixture pruner: delete a random, evenly strided subset of a directory.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::fs_op::helpers::list_entries;
use crate::fs_op::remove::{remove_entry, Removal};
use crate::fs_op::FsOpError;

/// What to do when a selected entry cannot be removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure and keep deleting.
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    pub on_error: OnError,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct PruneReport {
    /// Number of entries in the directory listing.
    pub listed: usize,
    /// Entries picked for deletion, in shuffled order.
    pub selected: Vec<PathBuf>,
    /// Entries actually removed (empty on a dry run).
    pub removed: Vec<PathBuf>,
    /// Selected entries that were already gone.
    pub vanished: Vec<PathBuf>,
    /// Failures collected under [`OnError::Continue`].
    pub failed: Vec<(PathBuf, FsOpError)>,
}

impl PruneReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Take every `stride`-th element starting at index 0.
///
/// Returns `ceil(len / stride)` elements. `stride` must be non-zero.
pub fn select_strided<T: Clone>(items: &[T], stride: usize) -> Result<Vec<T>, FsOpError> {
    if stride == 0 {
        return Err(FsOpError::InvalidStride(stride));
    }
    Ok(items.iter().step_by(stride).cloned().collect())
}

/// Shuffle the direct entries of `dir` and delete every `stride`-th one.
///
/// Files, symlinks and empty directories are removed; a non-empty
/// directory is an error. Entries that disappear after listing count as
/// vanished, not failed.
pub fn prune<R: Rng + ?Sized>(
    dir: &Path,
    stride: usize,
    rng: &mut R,
    opts: &PruneOptions,
) -> Result<PruneReport, FsOpError> {
    if stride == 0 {
        return Err(FsOpError::InvalidStride(stride));
    }
    let mut entries = list_entries(dir)?;
    entries.shuffle(rng);
    let selected = select_strided(&entries, stride)?;
    info!(
        dir = %dir.display(),
        listed = entries.len(),
        selected = selected.len(),
        stride,
        dry_run = opts.dry_run,
        "pruning"
    );

    let mut report = PruneReport {
        listed: entries.len(),
        selected,
        ..PruneReport::default()
    };
    if opts.dry_run {
        for p in &report.selected {
            info!(path = %p.display(), "would remove");
        }
        return Ok(report);
    }

    for p in report.selected.clone() {
        match remove_entry(&p) {
            Ok(Removal::Removed) => {
                info!(path = %p.display(), "removed");
                report.removed.push(p);
            }
            Ok(Removal::Vanished) => {
                debug!(path = %p.display(), "already gone");
                report.vanished.push(p);
            }
            Err(e) => match opts.on_error {
                OnError::Abort => return Err(e),
                OnError::Continue => {
                    warn!(path = %p.display(), error = %e, "could not remove");
                    report.failed.push((p, e));
                }
            },
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    fn populate(dir: &Path, n: usize) {
        for i in 0..n {
            fs::write(dir.join(format!("f{:03}", i)), b"x").unwrap();
        }
    }

    fn count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn strided_selection_starts_at_zero() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(select_strided(&items, 3).unwrap(), vec![0, 3, 6, 9]);
        assert_eq!(select_strided(&items, 1).unwrap().len(), 10);
        assert_eq!(select_strided(&items, 20).unwrap(), vec![0]);
        assert!(select_strided::<u32>(&[], 2).unwrap().is_empty());
        assert!(matches!(
            select_strided(&items, 0),
            Err(FsOpError::InvalidStride(0))
        ));
    }

    #[test]
    fn removes_ceil_m_over_k_entries() {
        for (m, k) in [(10usize, 2usize), (7, 2), (9, 3), (5, 1), (4, 10)] {
            let td = tempdir().unwrap();
            populate(td.path(), m);
            let mut rng = StdRng::seed_from_u64(m as u64 * 31 + k as u64);
            let report = prune(td.path(), k, &mut rng, &PruneOptions::default()).unwrap();
            let expected = m.div_ceil(k);
            assert_eq!(report.removed.len(), expected, "m={} k={}", m, k);
            assert_eq!(count(td.path()), m - expected);
        }
    }

    #[test]
    fn seeded_runs_pick_the_same_entries() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        populate(a.path(), 12);
        populate(b.path(), 12);
        let opts = PruneOptions {
            dry_run: true,
            ..PruneOptions::default()
        };
        let ra = prune(a.path(), 3, &mut StdRng::seed_from_u64(5), &opts).unwrap();
        let rb = prune(b.path(), 3, &mut StdRng::seed_from_u64(5), &opts).unwrap();
        let names = |r: &PruneReport| -> Vec<_> {
            r.selected
                .iter()
                .map(|p| p.file_name().unwrap().to_owned())
                .collect()
        };
        assert_eq!(names(&ra), names(&rb));
    }

    #[test]
    fn empty_directory_is_a_no_op() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let report = prune(td.path(), 2, &mut rng, &PruneOptions::default()).unwrap();
        assert_eq!(report.listed, 0);
        assert!(report.removed.is_empty());
    }

    #[test]
    fn missing_directory_fails() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = prune(&td.path().join("mount"), 2, &mut rng, &PruneOptions::default())
            .unwrap_err();
        assert!(matches!(err, FsOpError::MissingTarget(_)));
    }

    #[test]
    fn zero_stride_is_rejected() {
        let td = tempdir().unwrap();
        populate(td.path(), 3);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            prune(td.path(), 0, &mut rng, &PruneOptions::default()),
            Err(FsOpError::InvalidStride(0))
        ));
        assert_eq!(count(td.path()), 3);
    }

    #[test]
    fn dry_run_removes_nothing() {
        let td = tempdir().unwrap();
        populate(td.path(), 6);
        let mut rng = StdRng::seed_from_u64(3);
        let opts = PruneOptions {
            dry_run: true,
            ..PruneOptions::default()
        };
        let report = prune(td.path(), 2, &mut rng, &opts).unwrap();
        assert_eq!(report.selected.len(), 3);
        assert!(report.removed.is_empty());
        assert_eq!(count(td.path()), 6);
    }

    #[test]
    fn non_empty_subdir_aborts_or_is_collected() {
        // stride 1 selects everything, so the subdirectory is always hit.
        let td = tempdir().unwrap();
        populate(td.path(), 3);
        let sub = td.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner"), b"x").unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let err = prune(td.path(), 1, &mut rng, &PruneOptions::default()).unwrap_err();
        assert!(matches!(err, FsOpError::NonEmptyDirectory(_)));
        assert!(sub.join("inner").exists());

        let td = tempdir().unwrap();
        populate(td.path(), 3);
        let sub = td.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner"), b"x").unwrap();
        let opts = PruneOptions {
            on_error: OnError::Continue,
            dry_run: false,
        };
        let report = prune(td.path(), 1, &mut rng, &opts).unwrap();
        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.failed.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.failed[0].0, sub);
    }
}
