pub mod config_dirs;
pub mod read_settings;

pub use config_dirs::default_settings_path;
pub use read_settings::{load_settings, parse_settings, Settings, SettingsError};
