//! ffprobe media probing adapter

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AutoCutError, AutoCutResult};
use crate::ports::MediaProbePort;

/// ffprobe-based media probe
pub struct FfprobeAdapter {
    binary: String,
}

impl FfprobeAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl MediaProbePort for FfprobeAdapter {
    async fn duration(&self, media_path: &Path) -> AutoCutResult<f64> {
        debug!(binary = %self.binary, input = %media_path.display(), "probing duration");

        let output = Command::new(&self.binary)
            .args([
                "-v",
                "quiet",
                "-show_entries",
                "format=duration",
                "-of",
                "csv=p=0",
            ])
            .arg(media_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| AutoCutError::MediaProbe {
                message: format!("failed to spawn ffprobe: {e}"),
            })?;

        if !output.status.success() {
            return Err(AutoCutError::MediaProbe {
                message: format!(
                    "ffprobe exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let duration: f64 = text.trim().parse().map_err(|_| AutoCutError::MediaProbe {
            message: format!("unparsable duration from ffprobe: {:?}", text.trim()),
        })?;

        if duration <= 0.0 {
            return Err(AutoCutError::MediaProbe {
                message: format!("non-positive media duration: {duration}"),
            });
        }

        Ok(duration)
    }
}
