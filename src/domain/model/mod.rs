// Domain models - Core types and data structures

use serde::{Deserialize, Serialize};

/// A transcribed word with absolute stream timestamps.
///
/// Produced by the upstream transcription collaborator and never mutated by
/// the core. Tokens are ordered by start time within one transcript segment,
/// but segment boundaries may interleave out of global time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Token {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Classification of a removable clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipKind {
    /// A configured disposable filler word, matched by exact trimmed text
    Filler,
    /// A gap between consecutive recognized words exceeding the threshold
    Silence,
}

impl std::fmt::Display for ClipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipKind::Filler => write!(f, "filler"),
            ClipKind::Silence => write!(f, "silence"),
        }
    }
}

/// A detected time range marked as a candidate for removal.
///
/// Immutable after creation. Which clips a caller actually wants removed is
/// tracked as a separate selection, never as a field on the clip itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub kind: ClipKind,
    pub start: f64,
    pub end: f64,
    /// The matched word text, present for filler clips only
    pub content: Option<String>,
}

impl Clip {
    /// Create a silence clip covering a gap between words
    pub fn silence(start: f64, end: f64) -> Self {
        Self {
            kind: ClipKind::Silence,
            start,
            end,
            content: None,
        }
    }

    /// Create a filler-word clip with the matched text
    pub fn filler(start: f64, end: f64, content: impl Into<String>) -> Self {
        Self {
            kind: ClipKind::Filler,
            start,
            end,
            content: Some(content.into()),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A "keep" span retained in the final output.
///
/// Within one valid interval set the intervals are non-overlapping, strictly
/// increasing in start time, and each has `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests;
