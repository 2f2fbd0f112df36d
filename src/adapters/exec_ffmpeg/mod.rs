//! FFmpeg execution adapter
//!
//! Drives an external `ffmpeg` process for audio extraction, the single-pass
//! filter export, fallback range extraction, and concatenation. Exit code 0
//! plus an existing, non-empty output file is the sole success signal.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::model::Interval;
use crate::error::{AutoCutError, AutoCutResult};
use crate::planner::ExportPlan;
use crate::ports::EncodePort;
use crate::utils::time::format_timestamp;

/// FFmpeg-based encode adapter
pub struct FfmpegEncoder {
    binary: String,
}

impl FfmpegEncoder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn run(&self, args: &[String]) -> std::io::Result<std::process::Output> {
        debug!(binary = %self.binary, ?args, "spawning ffmpeg");
        Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
    }

    /// Check exit status and that the output file exists and is non-empty
    fn check_output(
        output: std::io::Result<std::process::Output>,
        produced: &Path,
    ) -> Result<(), String> {
        let output = output.map_err(|e| format!("failed to spawn ffmpeg: {e}"))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        match std::fs::metadata(produced) {
            Ok(meta) if meta.len() > 0 => Ok(()),
            Ok(_) => Err(format!("output file is empty: {}", produced.display())),
            Err(_) => Err(format!("output file was not created: {}", produced.display())),
        }
    }
}

#[async_trait]
impl EncodePort for FfmpegEncoder {
    async fn available_hardware_encoders(&self) -> Vec<String> {
        let result = self
            .run(&["-hide_banner".to_string(), "-encoders".to_string()])
            .await;

        let listing = match result {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            _ => {
                warn!("encoder capability probe failed, assuming software only");
                return Vec::new();
            }
        };

        ["h264_nvenc", "h264_amf", "h264_qsv"]
            .iter()
            .filter(|name| listing.contains(**name))
            .map(|name| name.to_string())
            .collect()
    }

    async fn extract_audio(&self, media_path: &Path, audio_path: &Path) -> AutoCutResult<()> {
        let args = vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-i".to_string(),
            media_path.display().to_string(),
            "-vn".to_string(),
            "-acodec".to_string(),
            "pcm_s16le".to_string(),
            "-ar".to_string(),
            "16000".to_string(),
            "-ac".to_string(),
            "1".to_string(),
            "-y".to_string(),
            audio_path.display().to_string(),
        ];

        Self::check_output(self.run(&args).await, audio_path)
            .map_err(|message| AutoCutError::MediaProbe { message })
    }

    async fn run_filter_export(
        &self,
        input: &Path,
        plan: &ExportPlan,
        output: &Path,
    ) -> AutoCutResult<()> {
        let mut args = vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-filter_complex".to_string(),
            plan.filter_expression.clone(),
            "-map".to_string(),
            "[v]".to_string(),
            "-map".to_string(),
            "[a]".to_string(),
            "-c:v".to_string(),
            plan.encoder.codec_name().to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
        ];
        args.extend(plan.encoder.quality_args());
        args.push("-y".to_string());
        args.push(output.display().to_string());

        Self::check_output(self.run(&args).await, output)
            .map_err(|message| AutoCutError::EncoderProcess { message })
    }

    async fn extract_range(
        &self,
        input: &Path,
        interval: Interval,
        output: &Path,
    ) -> AutoCutResult<()> {
        let args = vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            format_timestamp(interval.start),
            "-to".to_string(),
            format_timestamp(interval.end),
            "-i".to_string(),
            input.display().to_string(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-preset".to_string(),
            "fast".to_string(),
            "-crf".to_string(),
            "18".to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
            "-y".to_string(),
            output.display().to_string(),
        ];

        Self::check_output(self.run(&args).await, output)
            .map_err(|message| AutoCutError::FallbackExecution { message })
    }

    async fn concatenate(&self, parts: &[PathBuf], output: &Path) -> AutoCutResult<()> {
        let mut list_file = tempfile::Builder::new()
            .prefix("autocut_concat_")
            .suffix(".txt")
            .tempfile()?;
        for part in parts {
            writeln!(list_file, "file '{}'", escape_concat_path(part))?;
        }
        list_file.flush()?;

        let args = vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-f".to_string(),
            "concat".to_string(),
            "-safe".to_string(),
            "0".to_string(),
            "-i".to_string(),
            list_file.path().display().to_string(),
            "-c".to_string(),
            "copy".to_string(),
            "-y".to_string(),
            output.display().to_string(),
        ];

        Self::check_output(self.run(&args).await, output)
            .map_err(|message| AutoCutError::FallbackExecution { message })
    }
}

/// Escape a path for the concat demuxer's single-quoted `file` directive
fn escape_concat_path(path: &Path) -> String {
    path.display().to_string().replace('\'', "'\\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_paths_escape_single_quotes() {
        let path = PathBuf::from("/tmp/it's here/part.mp4");
        assert_eq!(escape_concat_path(&path), "/tmp/it'\\''s here/part.mp4");
    }

    #[test]
    fn plain_paths_pass_through() {
        let path = PathBuf::from("/tmp/work/part_0001.mp4");
        assert_eq!(escape_concat_path(&path), "/tmp/work/part_0001.mp4");
    }
}
