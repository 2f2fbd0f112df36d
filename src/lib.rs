//! AutoCut CLI Library
//!
//! Transcript-driven video trimming: detect filler words and long silences
//! from word-level tokens, reduce the selection to keep-intervals, and drive
//! an external ffmpeg process to render the trimmed output with a
//! primary/fallback execution strategy.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod detect;
pub mod domain;
pub mod engine;
pub mod error;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{Clip, ClipKind, Interval, Token};
pub use error::{AutoCutError, AutoCutResult};
pub use planner::{EncoderChoice, ExportPlan};
