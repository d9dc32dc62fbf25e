// Filesystem locations.
// Config and log paths under the platform project directories.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "ghactivity";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Base config directory (~/.config/ghactivity on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the optional config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Base cache directory (~/.cache/ghactivity on Linux). Only the log lives here.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{}.log", APP_NAME)))
}
