// Domain rules - interval-merge and complement arithmetic

use std::cmp::Ordering;

use crate::domain::model::{Clip, Interval};
use crate::error::{AutoCutError, AutoCutResult};

/// Computes the complementary keep-interval set for a selection of removal
/// clips over a media of known total duration.
pub struct IntervalReducer;

impl IntervalReducer {
    /// Reduce a set of removal clips to the ordered keep-interval sequence.
    ///
    /// Clips are stable-sorted by start time (discovery order breaks ties)
    /// and swept with a running `last_end` cursor, so overlapping removals
    /// merge into one gap. Zero-duration clips are dropped before the sweep.
    ///
    /// Returns `NoKeepIntervals` when everything would be removed: exporting
    /// zero retained content is an error, not a silent no-op.
    pub fn reduce(clips_to_remove: &[Clip], duration: f64) -> AutoCutResult<Vec<Interval>> {
        let mut removals: Vec<&Clip> = clips_to_remove
            .iter()
            .filter(|clip| clip.end > clip.start)
            .collect();
        // Vec::sort_by is stable, which keeps discovery order for clips
        // starting at the same instant.
        removals.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

        let mut intervals = Vec::new();
        let mut last_end = 0.0_f64;

        for clip in removals {
            if clip.start > last_end {
                intervals.push(Interval::new(last_end, clip.start));
            }
            last_end = last_end.max(clip.end);
        }

        if last_end < duration {
            intervals.push(Interval::new(last_end, duration));
        }

        if intervals.is_empty() {
            return Err(AutoCutError::NoKeepIntervals);
        }

        Ok(intervals)
    }

    /// Total retained duration across a keep-interval sequence
    pub fn retained_duration(intervals: &[Interval]) -> f64 {
        intervals.iter().map(Interval::duration).sum()
    }
}
