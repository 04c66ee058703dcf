use std::path::PathBuf;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "RESIZR_CONFIG_DIR";

/// Returns the config directory: `~/.config/resizr/`.
///
/// `RESIZR_CONFIG_DIR` takes precedence when set to a non-empty value.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|h| h.join(".config").join("resizr"))
}

/// Returns the preferences file path: `~/.config/resizr/preferences.toml`.
pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("preferences.toml"))
}

/// Returns the log directory: `~/.config/resizr/logs/`.
pub fn log_dir() -> Option<PathBuf> {
    config_dir().map(|d| d.join("logs"))
}
