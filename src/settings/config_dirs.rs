use directories_next::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "mount-fixtures";
const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, e.g. `~/.config/mount-fixtures` on Linux.
fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().to_path_buf())
}

/// Where the settings file is looked up when no `--config` is given.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
