//! Fallback export strategy: sequential extract and concatenate
//!
//! Trades performance for robustness: each keep-interval is re-encoded as an
//! independent clip and the clips are concatenated in order, so the result
//! does not depend on the single-pass filter predicate compiling correctly.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::model::Interval;
use crate::engine::progress::ProgressTracker;
use crate::error::{AutoCutError, AutoCutResult};
use crate::ports::EncodePort;

/// Extract every keep-interval into a scoped temporary directory, then
/// concatenate the parts into the final output.
///
/// Intermediate clips live in a `TempDir` that is removed on every exit
/// path when the guard drops.
pub async fn extract_and_concatenate(
    encoder: &dyn EncodePort,
    input: &Path,
    intervals: &[Interval],
    output: &Path,
    progress: &mut ProgressTracker,
) -> AutoCutResult<()> {
    let work_dir = tempfile::tempdir().map_err(work_dir_error)?;
    let total = intervals.len();
    let mut parts: Vec<PathBuf> = Vec::with_capacity(total);

    for (index, interval) in intervals.iter().enumerate() {
        let part = work_dir.path().join(format!("part_{:04}.mp4", index));
        encoder.extract_range(input, *interval, &part).await?;
        parts.push(part);

        let percent = 30 + ((index + 1) * 60 / total) as u8;
        progress.advance(
            percent,
            &format!("extracted segment {}/{}", index + 1, total),
        );
    }

    progress.advance(95, "concatenating segments");
    encoder.concatenate(&parts, output).await?;

    info!(segments = total, output = %output.display(), "fallback export complete");
    Ok(())
}

/// Any failure inside the fallback path, including setting up its working
/// directory, surfaces as `FallbackExecution`.
fn work_dir_error(error: std::io::Error) -> AutoCutError {
    AutoCutError::FallbackExecution {
        message: format!("cannot create working directory: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_work_dir_is_a_fallback_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no tmp");
        assert!(matches!(
            work_dir_error(io),
            AutoCutError::FallbackExecution { .. }
        ));
    }
}
