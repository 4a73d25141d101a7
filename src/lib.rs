//! Populate and randomly prune a fixture directory.
//!
//! The `create_files` and `delete_random` binaries are thin wrappers around
//! [`generator::generate`] and [`pruner::prune`].

pub mod cli;
pub mod fixture;
pub mod fs_op;
pub mod generator;
pub mod logging;
pub mod pruner;
pub mod settings;

pub use generator::{generate, GenerateOptions, GenerateReport};
pub use pruner::{prune, select_strided, OnError, PruneOptions, PruneReport};
