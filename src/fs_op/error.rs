use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers used by the generator and the
/// pruner.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The target directory does not exist.
    #[error("target directory `{0}` does not exist")]
    MissingTarget(PathBuf),

    /// The target path exists but is not a directory.
    #[error("target `{0}` is not a directory")]
    NotADirectory(PathBuf),

    /// A selected entry is a directory that still has children. Removing it
    /// would need a recursive delete, which is never done implicitly.
    #[error("refusing to remove non-empty directory `{0}`")]
    NonEmptyDirectory(PathBuf),

    /// A deletion stride of zero selects nothing meaningful.
    #[error("stride must be at least 1, got {0}")]
    InvalidStride(usize),

    /// IO error tied to the path it happened on.
    #[error("`{path}`: {source}")]
    PathContext {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsOpError {
    pub(crate) fn at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsOpError::PathContext {
            path: path.into(),
            source,
        }
    }
}
