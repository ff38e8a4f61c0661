//! Configuration file locations
//!
//! A `systest.toml` in the working directory wins over the per-user file so
//! that a checkout can pin its own executable and input paths.

use std::path::{Path, PathBuf};

/// Name used for the per-user configuration directory
const APP_NAME: &str = "bugreport-systest";

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "systest.toml";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/bugreport-systest/`
/// - macOS: `~/Library/Application Support/bugreport-systest/`
/// - Windows: `%APPDATA%\bugreport-systest\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the per-user configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the path to the project-local configuration file under `dir`
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Configuration files to try, in priority order
pub fn config_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![local_config_path(cwd)];
    if let Some(user) = config_path() {
        candidates.push(user);
    }
    candidates
}
