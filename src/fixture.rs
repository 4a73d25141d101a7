//! Names and bodies of generated fixture files.

use std::path::{Path, PathBuf};

use rand::Rng;

/// Length of every generated fixture name.
pub const NAME_LEN: usize = 16;

const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate a fixture name of [`NAME_LEN`] lowercase ASCII letters.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut name = String::with_capacity(NAME_LEN);
    for _ in 0..NAME_LEN {
        let idx = rng.random_range(0..CHARS.len());
        name.push(CHARS[idx] as char);
    }
    name
}

/// The line written (repeatedly) into fixture `index`.
pub fn content_line(index: usize, name: &str) -> String {
    format!("this is the text for file {} {}\n", index, name)
}

/// One planned fixture: its position in the run and its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    pub index: usize,
    pub name: String,
}

impl FixtureSpec {
    pub fn new<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self {
            index,
            name: random_name(rng),
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }

    pub fn line(&self) -> String {
        content_line(self.index, &self.name)
    }

    /// File size once written: the line repeated `index` times.
    pub fn expected_len(&self) -> u64 {
        (self.index * self.line().len()) as u64
    }
}

/// True if `name` has the shape produced by [`random_name`].
pub fn is_fixture_name(name: &str) -> bool {
    name.len() == NAME_LEN && name.bytes().all(|b| b.is_ascii_lowercase())
}
