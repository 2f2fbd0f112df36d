//! Export planning - filter-expression synthesis and encoder selection

use serde::Serialize;

use crate::domain::model::Interval;
use crate::error::{AutoCutError, AutoCutResult};
use crate::utils::time::format_timestamp;

pub mod encoder;

pub use encoder::EncoderChoice;

/// The resolved, ready-to-execute description of how to produce the trimmed
/// output. Built once per export request and read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPlan {
    /// Ordered, non-overlapping keep-intervals
    pub intervals: Vec<Interval>,
    /// Selected encoder
    pub encoder: EncoderChoice,
    /// ffmpeg filter_complex expression selecting the keep-intervals
    pub filter_expression: String,
}

/// Turns keep-intervals into an encoder-consumable plan
pub struct ExportPlanner;

impl ExportPlanner {
    /// Build an export plan from keep-intervals and the probed hardware
    /// encoder identifiers. Fails with `NoKeepIntervals` when the interval
    /// sequence is empty.
    pub fn plan(
        intervals: Vec<Interval>,
        available_hardware: &[String],
    ) -> AutoCutResult<ExportPlan> {
        if intervals.is_empty() {
            return Err(AutoCutError::NoKeepIntervals);
        }

        let encoder = EncoderChoice::select(available_hardware);
        let filter_expression = Self::build_filter_expression(&intervals);

        Ok(ExportPlan {
            intervals,
            encoder,
            filter_expression,
        })
    }

    /// Render "keep" as a predicate over stream time `t`: the disjunction of
    /// `start <= t < end` over all intervals. The inclusive-exclusive bound
    /// avoids double-counting frames that sit exactly on an interval edge.
    ///
    /// The same predicate is applied to the video and audio streams so the
    /// output tracks stay time-aligned.
    pub fn build_filter_expression(intervals: &[Interval]) -> String {
        let predicate = intervals
            .iter()
            .map(|interval| {
                format!(
                    "gte(t,{})*lt(t,{})",
                    format_timestamp(interval.start),
                    format_timestamp(interval.end)
                )
            })
            .collect::<Vec<_>>()
            .join("+");

        format!(
            "[0:v]select='{predicate}',setpts=N/FRAME_RATE/TB[v];\
             [0:a]aselect='{predicate}',asetpts=N/SR/TB[a]"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_intervals_fail_to_plan() {
        let err = ExportPlanner::plan(Vec::new(), &[]).unwrap_err();
        assert!(matches!(err, AutoCutError::NoKeepIntervals));
    }

    #[test]
    fn filter_expression_covers_all_intervals() {
        let intervals = vec![Interval::new(0.0, 1.0), Interval::new(4.0, 6.0)];
        let expr = ExportPlanner::build_filter_expression(&intervals);
        assert!(expr.contains("gte(t,0)*lt(t,1)"));
        assert!(expr.contains("gte(t,4)*lt(t,6)"));
        assert!(expr.contains("[0:v]select="));
        assert!(expr.contains("[0:a]aselect="));
        assert!(expr.contains("setpts=N/FRAME_RATE/TB[v]"));
        assert!(expr.contains("asetpts=N/SR/TB[a]"));
    }

    #[test]
    fn video_and_audio_share_the_same_predicate() {
        let intervals = vec![Interval::new(0.5, 10.0)];
        let expr = ExportPlanner::build_filter_expression(&intervals);
        let predicate = "gte(t,0.5)*lt(t,10)";
        assert_eq!(expr.matches(predicate).count(), 2);
    }

    #[test]
    fn identical_inputs_build_identical_plans() {
        let intervals = vec![Interval::new(0.5, 10.0), Interval::new(12.0, 15.25)];
        let a = ExportPlanner::plan(intervals.clone(), &["h264_qsv".to_string()]).unwrap();
        let b = ExportPlanner::plan(intervals, &["h264_qsv".to_string()]).unwrap();
        assert_eq!(a.filter_expression, b.filter_expression);
        assert_eq!(a.encoder, b.encoder);
    }
}
