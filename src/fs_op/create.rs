use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Create (or truncate) the file at `path` and write `chunk` into it `times`
/// times. Returns the number of bytes written.
///
/// An existing file with the same name is overwritten; collisions are not
/// detected. `times == 0` leaves an empty file behind.
pub fn write_repeated(path: &Path, chunk: &[u8], times: usize) -> Result<u64, FsOpError> {
    let file = File::create(path).map_err(|e| FsOpError::at(path, e))?;
    let mut out = BufWriter::new(file);
    let mut written = 0u64;
    for _ in 0..times {
        out.write_all(chunk).map_err(|e| FsOpError::at(path, e))?;
        written += chunk.len() as u64;
    }
    out.flush().map_err(|e| FsOpError::at(path, e))?;
    Ok(written)
}
