//! Session configuration
//!
//! Loaded from `config.toml` (or a JSON file) in the platform config
//! directory, or from an explicit path. A missing file means defaults.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{DrawError, Result};

/// Environment variable overriding [`DrawConfig::on_error`]
pub const ON_ERROR_ENV: &str = "ASCII_DRAW_ON_ERROR";

/// What the session does when a command fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// End the session with the error
    #[default]
    Stop,
    /// Log the error and continue with the next line
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "skip" => Ok(Self::Skip),
            other => Err(DrawError::Configuration(format!(
                "Unknown error policy {other:?}, expected \"stop\" or \"skip\""
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Behavior on a failed command
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Ignore blank input lines instead of treating them as empty commands
    #[serde(default = "default_true")]
    pub skip_blank_lines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            skip_blank_lines: true,
        }
    }
}

impl DrawConfig {
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascii-draw", "ascii-draw")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Override fields from the environment
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(policy) = env::var(ON_ERROR_ENV) {
            self.on_error = policy.parse()?;
        }
        Ok(self)
    }
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<DrawConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match DrawConfig::config_path() {
            Some(p) => p,
            None => return Ok(DrawConfig::default()),
        },
    };

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(DrawConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| DrawError::Configuration(format!("Failed to read config: {e}")))?;

    // TOML by extension, JSON otherwise
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)
            .map_err(|e| DrawError::Configuration(format!("Invalid TOML config: {e}")))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| DrawError::Configuration(format!("Invalid JSON config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DrawConfig::default();
        assert_eq!(config.on_error, ErrorPolicy::Stop);
        assert!(config.skip_blank_lines);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "on_error = \"skip\"").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert!(config.skip_blank_lines);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"skip_blank_lines": false}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Stop);
        assert!(!config.skip_blank_lines);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, DrawConfig::default());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "on_error = \"retry\"\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(DrawError::Configuration(_))
        ));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(" Skip ".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Skip);
        assert!("later".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::Stop.to_string(), "stop");
    }
}
