//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_candidates;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Where the manifest, the executable under test and its inputs live
#[derive(Debug, Deserialize, Clone)]
pub struct RunnerConfig {
    /// Manifest listing `<test file>,<expected output>` records
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Executable invoked once per manifest entry
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Directory the test file names are resolved against
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Optional program the executable is run through (e.g. "mono")
    #[serde(default)]
    pub launcher: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            executable: default_executable(),
            input_dir: default_input_dir(),
            launcher: None,
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("systemTestsList.txt")
}
fn default_executable() -> PathBuf {
    PathBuf::from("./bin/Debug/bugreport.exe")
}
fn default_input_dir() -> PathBuf {
    PathBuf::from("tests/simple/heap")
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// `./systest.toml` and the per-user config file is used, falling back to
    /// defaults when neither exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file '{}' does not exist",
                    path.display()
                )));
            }
            return Self::read(path);
        }

        let cwd = std::env::current_dir()?;
        for path in config_candidates(&cwd) {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading configuration");
                return Self::read(&path);
            }
        }
        Ok(Self::default())
    }

    /// Read and parse a single configuration file
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| Error::ConfigParse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
