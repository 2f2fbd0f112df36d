//! Progress tracking and ETA estimation
//!
//! One tracker is created per detection or export run, lives on that run's
//! worker task, and is discarded at completion. Events flow to the caller
//! over an explicit channel in non-decreasing percent order; the terminal
//! event for a run is always the last one delivered.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::utils::time::format_remaining;

/// A discrete progress update delivered to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    /// Overall progress, 0 to 100
    pub percent: u8,
    /// Human-facing description of the current stage
    pub label: String,
    /// Estimated time remaining, as display text
    pub eta: String,
    pub timestamp: DateTime<Utc>,
}

/// Monotonic progress state for one run
pub struct ProgressTracker {
    percent: u8,
    label: String,
    started_at: Option<Instant>,
    sender: Option<mpsc::UnboundedSender<ProgressEvent>>,
}

impl ProgressTracker {
    /// Create a tracker that only keeps local state
    pub fn new() -> Self {
        Self {
            percent: 0,
            label: String::new(),
            started_at: None,
            sender: None,
        }
    }

    /// Create a tracker that also delivers events over a channel
    pub fn with_channel(sender: mpsc::UnboundedSender<ProgressEvent>) -> Self {
        Self {
            sender: Some(sender),
            ..Self::new()
        }
    }

    /// Mark the start of a run, resetting percent and the wall clock
    pub fn start(&mut self, label: &str) {
        self.percent = 0;
        self.label = label.to_string();
        self.started_at = Some(Instant::now());
        self.emit();
    }

    /// Advance progress. Percent is clamped upward: a caller handing in a
    /// lower value is a bug, and the tracker never moves backwards.
    pub fn advance(&mut self, percent: u8, label: &str) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        self.percent = percent.min(100).max(self.percent);
        self.label = label.to_string();
        debug!(percent = self.percent, label, "progress");
        self.emit();
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Estimated time remaining, derived from elapsed wall-clock time under
    /// a linear-progress assumption. A crude heuristic, not a guarantee.
    pub fn estimate_remaining(&self) -> String {
        match self.started_at {
            None => "computing…".to_string(),
            Some(started_at) => {
                estimate_remaining_text(started_at.elapsed().as_secs_f64(), self.percent)
            }
        }
    }

    fn emit(&self) {
        if let Some(sender) = &self.sender {
            // A closed receiver just means nobody is listening anymore.
            let _ = sender.send(ProgressEvent {
                percent: self.percent,
                label: self.label.clone(),
                eta: self.estimate_remaining(),
                timestamp: Utc::now(),
            });
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// ETA text for a given elapsed time and percent complete
fn estimate_remaining_text(elapsed_seconds: f64, percent: u8) -> String {
    if percent == 0 {
        return "computing…".to_string();
    }
    if percent >= 100 {
        return "finishing…".to_string();
    }

    let ratio = percent as f64 / 100.0;
    let estimated_total = elapsed_seconds / ratio;
    format_remaining(estimated_total - elapsed_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamps_upward_never_downward() {
        let mut tracker = ProgressTracker::new();
        tracker.advance(30, "a");
        tracker.advance(10, "b");
        assert_eq!(tracker.percent(), 30);
        tracker.advance(70, "c");
        assert_eq!(tracker.percent(), 70);
        tracker.advance(130, "d");
        assert_eq!(tracker.percent(), 100);
    }

    #[test]
    fn eta_before_start_and_at_zero_percent() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.estimate_remaining(), "computing…");
        assert_eq!(estimate_remaining_text(5.0, 0), "computing…");
    }

    #[test]
    fn eta_at_completion() {
        assert_eq!(estimate_remaining_text(12.0, 100), "finishing…");
    }

    #[test]
    fn eta_linear_extrapolation_categories() {
        // 50% in 10s leaves 10s
        assert_eq!(estimate_remaining_text(10.0, 50), "10s");
        // 25% in 90s leaves 270s
        assert_eq!(estimate_remaining_text(90.0, 25), "4m 30s");
        // 10% in 1000s leaves 9000s
        assert_eq!(estimate_remaining_text(1000.0, 10), "2h 30m");
    }

    #[test]
    fn events_are_delivered_in_non_decreasing_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tracker = ProgressTracker::with_channel(tx);
        tracker.start("begin");
        tracker.advance(40, "mid");
        tracker.advance(20, "late caller");
        tracker.advance(100, "done");
        drop(tracker);

        let mut last = 0;
        let mut count = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(event.percent >= last);
            last = event.percent;
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(last, 100);
    }
}
