//! Fixture generator: fill a directory with randomly named files.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::{debug, info};

use crate::fixture::FixtureSpec;
use crate::fs_op::create::write_repeated;
use crate::fs_op::helpers::ensure_target_dir;
use crate::fs_op::sync::{flush, FlushMode};
use crate::fs_op::FsOpError;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub flush: FlushMode,
    pub progress: bool,
}

/// What a generator run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub created: Vec<PathBuf>,
    pub bytes_written: u64,
}

/// Create `count` fixture files in `dir`.
///
/// File `i` gets a random [`crate::fixture::NAME_LEN`]-letter name and holds
/// its content line repeated `i` times, so the first file is empty. Once all
/// files are written the configured flush runs; flush problems are logged
/// and never fail the run. The first write error aborts the run.
pub fn generate<R: Rng + ?Sized>(
    dir: &Path,
    count: usize,
    rng: &mut R,
    opts: &GenerateOptions,
) -> Result<GenerateReport, FsOpError> {
    ensure_target_dir(dir)?;
    info!(dir = %dir.display(), count, "generating fixtures");

    let bar = if opts.progress {
        let bar = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut report = GenerateReport::default();
    for index in 0..count {
        let spec = FixtureSpec::new(index, rng);
        let path = spec.path_in(dir);
        let line = spec.line();
        let n = write_repeated(&path, line.as_bytes(), index)?;
        debug!(index, name = %spec.name, bytes = n, "wrote fixture");
        report.bytes_written += n;
        report.created.push(path);
        bar.inc(1);
    }
    bar.finish_and_clear();

    flush(opts.flush, dir, &report.created);
    info!(
        created = report.created.len(),
        bytes = report.bytes_written,
        "fixtures written"
    );
    Ok(report)
}
