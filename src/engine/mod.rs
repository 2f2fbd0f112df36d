//! Export engine - primary/fallback execution against the external encoder

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::model::{Clip, ClipKind, Interval};
use crate::domain::rules::IntervalReducer;

pub mod executor;
pub mod fallback;
pub mod progress;

pub use executor::ExportExecutor;

/// Lifecycle states of one export run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    Idle,
    Planning,
    PrimaryAttempt,
    FallbackAttempt,
    Succeeded,
    Failed,
}

/// Terminal outcome of a successful export run.
///
/// The primary and fallback strategies are distinguished explicitly rather
/// than signalled through mixed boolean returns and errors.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// The single-pass filter export produced the output
    Primary { output: PathBuf },
    /// The primary attempt failed; extract-and-concatenate produced the output
    Fallback { output: PathBuf },
}

impl ExportOutcome {
    pub fn output(&self) -> &PathBuf {
        match self {
            ExportOutcome::Primary { output } | ExportOutcome::Fallback { output } => output,
        }
    }
}

/// Completion summary for one export run: the outcome plus what was kept
/// and what was removed.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    #[serde(flatten)]
    pub outcome: ExportOutcome,
    /// Total duration retained in the output, in seconds
    pub retained_seconds: f64,
    pub removed_fillers: usize,
    pub removed_silences: usize,
}

impl ExportReport {
    pub fn new(outcome: ExportOutcome, intervals: &[Interval], removed: &[Clip]) -> Self {
        let removed_fillers = removed
            .iter()
            .filter(|clip| clip.kind == ClipKind::Filler)
            .count();
        Self {
            outcome,
            retained_seconds: IntervalReducer::retained_duration(intervals),
            removed_fillers,
            removed_silences: removed.len() - removed_fillers,
        }
    }
}
