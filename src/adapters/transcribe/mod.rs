//! Transcription collaborator adapters
//!
//! Transcription itself is out of scope for the core; these adapters bridge
//! to whatever produces word tokens. `CommandTranscriber` invokes an
//! external transcriber program that prints token JSON to stdout;
//! `JsonFileTranscriber` reads tokens that were produced ahead of time.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::model::Token;
use crate::error::{AutoCutError, AutoCutResult};
use crate::ports::TranscribePort;

/// Runs an external transcriber command with the audio path as its single
/// argument and parses a JSON token array from its stdout.
pub struct CommandTranscriber {
    command: String,
}

impl CommandTranscriber {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl TranscribePort for CommandTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> AutoCutResult<Vec<Token>> {
        debug!(command = %self.command, audio = %audio_path.display(), "invoking transcriber");

        let output = Command::new(&self.command)
            .arg(audio_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| AutoCutError::UpstreamToken {
                message: format!("failed to spawn transcriber '{}': {e}", self.command),
            })?;

        if !output.status.success() {
            return Err(AutoCutError::UpstreamToken {
                message: format!(
                    "transcriber exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| AutoCutError::UpstreamToken {
            message: format!("transcriber produced invalid token JSON: {e}"),
        })
    }
}

/// Reads a pre-produced token JSON file, ignoring the audio path
pub struct JsonFileTranscriber {
    tokens_path: PathBuf,
}

impl JsonFileTranscriber {
    pub fn new(tokens_path: impl Into<PathBuf>) -> Self {
        Self {
            tokens_path: tokens_path.into(),
        }
    }
}

#[async_trait]
impl TranscribePort for JsonFileTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> AutoCutResult<Vec<Token>> {
        let content = tokio::fs::read(&self.tokens_path).await.map_err(|e| {
            AutoCutError::UpstreamToken {
                message: format!(
                    "cannot read token file {}: {e}",
                    self.tokens_path.display()
                ),
            }
        })?;

        serde_json::from_slice(&content).map_err(|e| AutoCutError::UpstreamToken {
            message: format!("invalid token JSON in {}: {e}", self.tokens_path.display()),
        })
    }
}
