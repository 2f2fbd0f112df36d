// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::model::{Interval, Token};
use crate::error::AutoCutResult;
use crate::planner::ExportPlan;

/// Port for the upstream transcription collaborator.
///
/// The implementation owns its model lifecycle (load once, reuse, explicit
/// release); the core only consumes the token sequence. Failures surface as
/// `UpstreamToken` and terminate the detection run without partial results.
#[async_trait]
pub trait TranscribePort: Send + Sync {
    /// Transcribe an audio file into word tokens with start/end timestamps
    async fn transcribe(&self, audio_path: &Path) -> AutoCutResult<Vec<Token>>;
}

/// Port for read-only media probing
#[async_trait]
pub trait MediaProbePort: Send + Sync {
    /// Total duration of the media file in seconds
    async fn duration(&self, media_path: &Path) -> AutoCutResult<f64>;
}

/// Port for the downstream encoder process.
///
/// Exit code 0 plus an existing, non-empty output file is the sole success
/// signal for any of the encode operations.
#[async_trait]
pub trait EncodePort: Send + Sync {
    /// Probe the host for available hardware encoder identifiers.
    ///
    /// Read-only; a probe failure reads as "no hardware encoders" rather
    /// than an error, since software encoding is always a valid choice.
    async fn available_hardware_encoders(&self) -> Vec<String>;

    /// Extract the audio track to a standalone file for transcription
    async fn extract_audio(&self, media_path: &Path, audio_path: &Path) -> AutoCutResult<()>;

    /// Run the single-pass filter export described by the plan
    async fn run_filter_export(
        &self,
        input: &Path,
        plan: &ExportPlan,
        output: &Path,
    ) -> AutoCutResult<()>;

    /// Extract one keep-interval as an independent clip (fallback path)
    async fn extract_range(
        &self,
        input: &Path,
        interval: Interval,
        output: &Path,
    ) -> AutoCutResult<()>;

    /// Concatenate extracted clips, in order, into the final output
    async fn concatenate(&self, parts: &[PathBuf], output: &Path) -> AutoCutResult<()>;
}
