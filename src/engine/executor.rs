//! Export executor state machine
//!
//! `Idle → Planning → PrimaryAttempt → {Succeeded | FallbackAttempt}
//! → {Succeeded | Failed}`. Any primary failure escalates to the fallback;
//! only a failed keep-interval computation (nothing to execute) or a failed
//! fallback terminates in `Failed`. Nothing is retried beyond the single
//! primary-to-fallback escalation.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::model::Clip;
use crate::domain::rules::IntervalReducer;
use crate::engine::progress::ProgressTracker;
use crate::engine::{fallback, ExportOutcome, ExportReport, ExportState};
use crate::error::AutoCutResult;
use crate::planner::{ExportPlan, ExportPlanner};
use crate::ports::{EncodePort, MediaProbePort};

/// Drives one export run against the external encoder.
///
/// The executor exclusively owns the subprocesses it spawns; it is created
/// per run and not shared between concurrent runs.
pub struct ExportExecutor {
    encoder: Arc<dyn EncodePort>,
    probe: Arc<dyn MediaProbePort>,
    state: ExportState,
}

impl ExportExecutor {
    pub fn new(encoder: Arc<dyn EncodePort>, probe: Arc<dyn MediaProbePort>) -> Self {
        Self {
            encoder,
            probe,
            state: ExportState::Idle,
        }
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    /// Build the export plan: probe the media duration, reduce the removal
    /// selection to keep-intervals, and pick an encoder.
    ///
    /// A failure here (no keep intervals, unreadable media) is terminal with
    /// no fallback, since there is nothing to execute.
    pub async fn plan(&mut self, input: &Path, clips_to_remove: &[Clip]) -> AutoCutResult<ExportPlan> {
        self.state = ExportState::Planning;

        let duration = match self.probe.duration(input).await {
            Ok(duration) => duration,
            Err(err) => {
                self.state = ExportState::Failed;
                return Err(err);
            }
        };

        let intervals = match IntervalReducer::reduce(clips_to_remove, duration) {
            Ok(intervals) => intervals,
            Err(err) => {
                self.state = ExportState::Failed;
                return Err(err);
            }
        };

        let available = self.encoder.available_hardware_encoders().await;
        let plan = match ExportPlanner::plan(intervals, &available) {
            Ok(plan) => plan,
            Err(err) => {
                self.state = ExportState::Failed;
                return Err(err);
            }
        };

        info!(
            encoder = %plan.encoder,
            intervals = plan.intervals.len(),
            duration,
            "export plan ready"
        );
        Ok(plan)
    }

    /// Execute the plan: primary single-pass filter export, escalating to
    /// the extract-and-concatenate fallback on any primary failure.
    pub async fn execute(
        &mut self,
        input: &Path,
        plan: &ExportPlan,
        output: &Path,
        progress: &mut ProgressTracker,
    ) -> AutoCutResult<ExportOutcome> {
        self.state = ExportState::PrimaryAttempt;
        progress.advance(20, "running single-pass filter export");

        match self
            .encoder
            .run_filter_export(input, plan, output)
            .await
        {
            Ok(()) => {
                self.state = ExportState::Succeeded;
                progress.advance(100, "export complete");
                Ok(ExportOutcome::Primary {
                    output: output.to_path_buf(),
                })
            }
            Err(err) => {
                warn!(error = %err, "primary export failed, trying fallback");
                self.state = ExportState::FallbackAttempt;
                progress.advance(25, "primary export failed, switching to fallback");

                match fallback::extract_and_concatenate(
                    self.encoder.as_ref(),
                    input,
                    &plan.intervals,
                    output,
                    progress,
                )
                .await
                {
                    Ok(()) => {
                        self.state = ExportState::Succeeded;
                        progress.advance(100, "export complete");
                        Ok(ExportOutcome::Fallback {
                            output: output.to_path_buf(),
                        })
                    }
                    Err(fallback_err) => {
                        self.state = ExportState::Failed;
                        Err(fallback_err)
                    }
                }
            }
        }
    }

    /// Plan and execute in one pass, summarizing what was kept and removed
    pub async fn export(
        &mut self,
        input: &Path,
        clips_to_remove: &[Clip],
        output: &Path,
        progress: &mut ProgressTracker,
    ) -> AutoCutResult<ExportReport> {
        progress.start("preparing export");
        progress.advance(5, "planning export");
        let plan = self.plan(input, clips_to_remove).await?;
        let outcome = self.execute(input, &plan, output, progress).await?;

        let report = ExportReport::new(outcome, &plan.intervals, clips_to_remove);
        info!(
            retained_seconds = report.retained_seconds,
            fillers = report.removed_fillers,
            silences = report.removed_silences,
            "export summary"
        );
        Ok(report)
    }
}
