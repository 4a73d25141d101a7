//! Filesystem primitives shared by the generator and the pruner.

pub mod create;
pub mod error;
pub mod helpers;
pub mod remove;
pub mod sync;

pub use error::FsOpError;
