use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::Path;

/// Point the per-user config lookup at the sandbox so a developer's own
/// settings file cannot leak into a test run.
pub fn isolate(cmd: &mut Command, sandbox: &TempDir) {
    cmd.current_dir(sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("xdg"))
        .env("HOME", sandbox.path())
        .env_remove("RUST_LOG");
}

/// Sandbox with an empty `mount` directory inside.
pub fn sandbox_with_mount() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    tmp.child("mount").create_dir_all().expect("create mount");
    tmp
}

pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
