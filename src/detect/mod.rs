//! Clip detection - scanning transcript tokens for fillers and silences

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::model::{Clip, Token};
use crate::engine::progress::ProgressTracker;
use crate::error::AutoCutResult;
use crate::ports::{EncodePort, TranscribePort};

/// Scans transcript tokens and emits removable clips.
///
/// Filler matching is case-sensitive exact match on the whitespace-trimmed
/// token text. No stemming, no substring matching: that exactness is part of
/// the contract, not a simplification.
pub struct ClipDetector {
    silence_threshold: f64,
    filler_words: HashSet<String>,
}

impl ClipDetector {
    pub fn new(silence_threshold: f64, filler_words: impl IntoIterator<Item = String>) -> Self {
        Self {
            silence_threshold,
            filler_words: filler_words.into_iter().collect(),
        }
    }

    /// Detect all removable clips in a token sequence, in discovery order
    pub fn detect(&self, tokens: &[Token]) -> Vec<Clip> {
        let mut scanner = self.scanner();
        for token in tokens {
            scanner.push(token);
        }
        scanner.finish()
    }

    /// Create a streaming scanner over tokens in arrival order
    pub fn scanner(&self) -> TokenScanner<'_> {
        TokenScanner {
            detector: self,
            last_word_end: 0.0,
            clips: Vec::new(),
        }
    }
}

/// Streaming state of one detection pass.
///
/// The `last_word_end` cursor only ever moves forward (updated via `max`), so
/// a late-arriving earlier segment never shrinks it and never produces a
/// spurious negative-duration silence clip.
pub struct TokenScanner<'a> {
    detector: &'a ClipDetector,
    last_word_end: f64,
    clips: Vec<Clip>,
}

impl TokenScanner<'_> {
    /// Feed the next token in arrival order
    pub fn push(&mut self, token: &Token) {
        if token.start - self.last_word_end > self.detector.silence_threshold {
            self.clips.push(Clip::silence(self.last_word_end, token.start));
        }

        let trimmed = token.text.trim();
        if self.detector.filler_words.contains(trimmed) {
            self.clips.push(Clip::filler(token.start, token.end, trimmed));
        }

        self.last_word_end = self.last_word_end.max(token.end);
    }

    /// Finish the pass, yielding clips in discovery order
    pub fn finish(self) -> Vec<Clip> {
        self.clips
    }
}

/// Run one full detection pass against a media file.
///
/// Extracts the audio track into a scoped temporary directory, hands it to
/// the transcription collaborator, then scans the returned tokens. The
/// temporary audio artifact is removed on every exit path, success or error,
/// when the directory guard drops.
pub async fn run_detection(
    encoder: Arc<dyn EncodePort>,
    transcriber: Arc<dyn TranscribePort>,
    detector: &ClipDetector,
    input: &Path,
    progress: &mut ProgressTracker,
) -> AutoCutResult<Vec<Clip>> {
    progress.start("preparing analysis");

    let work_dir = tempfile::tempdir()?;
    let audio_path = work_dir.path().join("audio.wav");

    progress.advance(10, "extracting audio");
    encoder.extract_audio(input, &audio_path).await?;

    progress.advance(30, "transcribing speech (this may take a while)");
    let tokens = transcriber.transcribe(&audio_path).await?;

    // Scan in chunks so long transcripts still report progress.
    let mut scanner = detector.scanner();
    let total = tokens.len();
    for (index, token) in tokens.iter().enumerate() {
        scanner.push(token);
        if total > 0 && (index + 1) % 256 == 0 {
            let percent = 30 + ((index + 1) * 40 / total) as u8;
            progress.advance(
                percent,
                &format!("scanning words for fillers and silences ({}/{})", index + 1, total),
            );
        }
    }
    let clips = scanner.finish();

    info!(
        tokens = total,
        clips = clips.len(),
        "detection pass complete"
    );
    progress.advance(100, "analysis complete");

    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ClipKind;

    fn detector(threshold: f64, fillers: &[&str]) -> ClipDetector {
        ClipDetector::new(threshold, fillers.iter().map(|s| s.to_string()))
    }

    #[test]
    fn empty_token_stream_yields_no_clips() {
        let detector = detector(0.5, &["um"]);
        assert!(detector.detect(&[]).is_empty());
    }

    #[test]
    fn clean_speech_yields_no_clips() {
        let detector = detector(1.0, &["um"]);
        let tokens = vec![
            Token::new("hello", 0.2, 0.6),
            Token::new("world", 0.7, 1.1),
            Token::new("again", 1.5, 2.0),
        ];
        assert!(detector.detect(&tokens).is_empty());
    }

    #[test]
    fn filler_word_at_stream_head() {
        // Scenario A
        let detector = detector(0.8, &["嗯"]);
        let clips = detector.detect(&[Token::new("嗯", 0.0, 0.5)]);
        assert_eq!(clips, vec![Clip::filler(0.0, 0.5, "嗯")]);
    }

    #[test]
    fn leading_silence_before_first_word() {
        // Scenario B
        let detector = detector(1.0, &[]);
        let clips = detector.detect(&[Token::new("a", 2.0, 2.1)]);
        assert_eq!(clips, vec![Clip::silence(0.0, 2.0)]);
    }

    #[test]
    fn gap_between_words_exceeding_threshold() {
        let detector = detector(0.5, &[]);
        let tokens = vec![Token::new("one", 0.0, 1.0), Token::new("two", 2.0, 2.5)];
        let clips = detector.detect(&tokens);
        assert_eq!(clips, vec![Clip::silence(1.0, 2.0)]);
    }

    #[test]
    fn gap_equal_to_threshold_is_not_silence() {
        let detector = detector(1.0, &[]);
        let tokens = vec![Token::new("one", 0.0, 1.0), Token::new("two", 2.0, 2.5)];
        assert!(detector.detect(&tokens).is_empty());
    }

    #[test]
    fn matching_trims_whitespace_but_not_case_or_substrings() {
        let detector = detector(10.0, &["um"]);
        let tokens = vec![
            Token::new(" um ", 0.0, 0.3),
            Token::new("Um", 0.4, 0.7),
            Token::new("umbrella", 0.8, 1.2),
        ];
        let clips = detector.detect(&tokens);
        assert_eq!(clips, vec![Clip::filler(0.0, 0.3, "um")]);
    }

    #[test]
    fn out_of_order_segment_never_shrinks_the_cursor() {
        let detector = detector(0.5, &[]);
        let tokens = vec![
            Token::new("late", 5.0, 6.0),
            // Earlier segment arriving after a later one: no negative
            // silence, and the cursor stays at 6.0.
            Token::new("early", 1.0, 2.0),
            Token::new("next", 6.2, 6.5),
        ];
        let clips = detector.detect(&tokens);
        assert_eq!(clips, vec![Clip::silence(0.0, 5.0)]);
    }

    #[test]
    fn filler_and_silence_from_one_token() {
        let detector = detector(0.5, &["uh"]);
        let tokens = vec![Token::new("start", 0.0, 1.0), Token::new("uh", 3.0, 3.2)];
        let clips = detector.detect(&tokens);
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0].kind, ClipKind::Silence);
        assert_eq!(clips[1], Clip::filler(3.0, 3.2, "uh"));
    }
}
