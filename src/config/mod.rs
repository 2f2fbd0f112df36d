//! Configuration loading
//!
//! Precedence follows CLI > environment > file > defaults. The file layer is
//! a TOML document; CLI and environment overrides are applied by the clap
//! argument definitions and the command handlers.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AutoCutError, AutoCutResult};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "autocut.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Words treated as disposable speech filler (exact trimmed match)
    pub filler_words: Vec<String>,
    /// Silence gap threshold in seconds
    pub silence_threshold: f64,
    /// ffmpeg binary name or path
    pub ffmpeg_binary: String,
    /// ffprobe binary name or path
    pub ffprobe_binary: String,
    /// External transcriber command producing token JSON on stdout
    pub transcriber_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            filler_words: ["um", "uh", "erm", "hmm", "嗯", "呃", "那个"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            silence_threshold: 0.5,
            ffmpeg_binary: "ffmpeg".to_string(),
            ffprobe_binary: "ffprobe".to_string(),
            transcriber_command: None,
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicitly given path must exist; otherwise
    /// `autocut.toml` in the working directory is used when present, and the
    /// built-in defaults apply when it is not.
    pub fn load(explicit_path: Option<&Path>) -> AutoCutResult<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(AutoCutError::Config {
                    message: format!("config file does not exist: {}", path.display()),
                });
            }
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> AutoCutResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AutoCutError::Config {
            message: format!("failed to parse {}: {e}", path.display()),
        })?;
        config.validate()?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides. CLI and environment values take
    /// precedence over the file layer and the built-in defaults.
    pub fn with_overrides(
        mut self,
        silence_threshold: Option<f64>,
        filler_words: Option<Vec<String>>,
    ) -> Self {
        if let Some(threshold) = silence_threshold {
            self.silence_threshold = threshold;
        }
        if let Some(words) = filler_words {
            self.filler_words = words;
        }
        self
    }

    /// Validate invariants the rest of the pipeline relies on
    pub fn validate(&self) -> AutoCutResult<()> {
        if self.silence_threshold <= 0.0 {
            return Err(AutoCutError::Config {
                message: format!(
                    "silence_threshold must be positive, got {}",
                    self.silence_threshold
                ),
            });
        }
        Ok(())
    }
}
