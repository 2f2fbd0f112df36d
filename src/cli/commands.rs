//! Top-level command structure

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::args::{DetectArgs, ExportArgs};

/// AutoCut - transcript-driven video trimming
#[derive(Parser, Debug)]
#[command(name = "autocut", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "AUTOCUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect filler words and silences in a video's transcript
    Detect(DetectArgs),
    /// Export a trimmed video with the selected clips removed
    Export(ExportArgs),
}
