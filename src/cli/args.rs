//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Silence gap threshold in seconds (overrides config file)
    #[arg(long, env = "AUTOCUT_SILENCE_THRESHOLD")]
    pub silence_threshold: Option<f64>,

    /// Filler words, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',', env = "AUTOCUT_FILLER_WORDS")]
    pub filler_words: Option<Vec<String>>,

    /// Read word tokens from a JSON file instead of running the transcriber
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Output detected clips as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Clips file (JSON, as produced by `detect --json`)
    #[arg(short, long)]
    pub clips: PathBuf,

    /// Indices of clips to remove, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    pub select: Option<Vec<usize>>,

    /// Output file path (default: <input stem>_trimmed.mp4)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output the export outcome as JSON
    #[arg(long)]
    pub json: bool,
}
