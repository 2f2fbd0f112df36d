//! AutoCut CLI
//!
//! A command-line tool that trims filler words and long silences out of
//! videos. A word-level transcript is scanned for removable clips, the
//! complement is reduced to keep-intervals, and an external ffmpeg process
//! renders the trimmed output, with a sequential extract-and-concatenate
//! fallback when the single-pass filter export fails.
//!
//! # Usage
//!
//! ```bash
//! autocut detect --input talk.mp4 --tokens talk.tokens.json --json > clips.json
//! autocut export --input talk.mp4 --clips clips.json --output talk_trimmed.mp4
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use autocut_cli::adapters::{
    CommandTranscriber, FfmpegEncoder, FfprobeAdapter, JsonFileTranscriber,
};
use autocut_cli::cli::{Cli, Commands, DetectArgs, ExportArgs};
use autocut_cli::config::AppConfig;
use autocut_cli::detect::{self, ClipDetector};
use autocut_cli::domain::model::{Clip, ClipKind};
use autocut_cli::engine::progress::{ProgressEvent, ProgressTracker};
use autocut_cli::engine::{ExportExecutor, ExportOutcome, ExportReport};
use autocut_cli::ports::{EncodePort, MediaProbePort, TranscribePort};
use autocut_cli::utils::time::format_clock;

/// Main entry point for the AutoCut CLI application
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Detect(args) => execute_detect_command(args, config).await?,
        Commands::Export(args) => execute_export_command(args, config).await?,
    }

    Ok(())
}

/// Run a detection pass on a worker task and report its progress
async fn execute_detect_command(args: DetectArgs, config: AppConfig) -> Result<()> {
    let config = config.with_overrides(args.silence_threshold, args.filler_words.clone());
    config.validate().context("invalid detection settings")?;

    let detector = ClipDetector::new(config.silence_threshold, config.filler_words.clone());
    let encoder: Arc<dyn EncodePort> = Arc::new(FfmpegEncoder::new(config.ffmpeg_binary.clone()));
    let transcriber: Arc<dyn TranscribePort> = match &args.tokens {
        Some(path) => Arc::new(JsonFileTranscriber::new(path.clone())),
        None => {
            let command = config.transcriber_command.clone().ok_or_else(|| {
                anyhow!(
                    "no transcriber configured: pass --tokens or set \
                     transcriber_command in the config file"
                )
            })?;
            Arc::new(CommandTranscriber::new(command))
        }
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let input = args.input.clone();
    let worker = tokio::spawn(async move {
        let mut progress = ProgressTracker::with_channel(tx);
        detect::run_detection(encoder, transcriber, &detector, &input, &mut progress).await
    });

    report_progress(rx).await;
    let clips = worker
        .await
        .map_err(|e| anyhow!("detection worker panicked: {e}"))?
        .context("detection failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&clips)?);
    } else {
        print_clip_listing(&clips);
    }

    Ok(())
}

/// Run an export on a worker task and report its progress
async fn execute_export_command(args: ExportArgs, config: AppConfig) -> Result<()> {
    let all_clips: Vec<Clip> = serde_json::from_str(
        &std::fs::read_to_string(&args.clips)
            .with_context(|| format!("cannot read clips file {}", args.clips.display()))?,
    )
    .with_context(|| format!("invalid clips JSON in {}", args.clips.display()))?;

    let clips_to_remove = select_clips(&all_clips, args.select.as_deref())?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let encoder: Arc<dyn EncodePort> = Arc::new(FfmpegEncoder::new(config.ffmpeg_binary.clone()));
    let probe: Arc<dyn MediaProbePort> =
        Arc::new(FfprobeAdapter::new(config.ffprobe_binary.clone()));

    let (tx, rx) = mpsc::unbounded_channel();
    let input = args.input.clone();
    let output_path = output.clone();
    let worker = tokio::spawn(async move {
        let mut executor = ExportExecutor::new(encoder, probe);
        let mut progress = ProgressTracker::with_channel(tx);
        executor
            .export(&input, &clips_to_remove, &output_path, &mut progress)
            .await
    });

    report_progress(rx).await;
    let report = worker
        .await
        .map_err(|e| anyhow!("export worker panicked: {e}"))?
        .context("export failed")?;

    print_export_summary(&report, args.json)?;
    Ok(())
}

/// Drain progress events from a run, logging each one
async fn report_progress(mut rx: mpsc::UnboundedReceiver<ProgressEvent>) {
    while let Some(event) = rx.recv().await {
        info!(percent = event.percent, eta = %event.eta, "{}", event.label);
    }
}

/// Resolve the removal selection. Selection is an index association over the
/// detected clips, not a flag on the clips themselves.
fn select_clips(clips: &[Clip], selection: Option<&[usize]>) -> Result<Vec<Clip>> {
    match selection {
        None => Ok(clips.to_vec()),
        Some(indices) => indices
            .iter()
            .map(|&index| {
                clips.get(index).cloned().ok_or_else(|| {
                    anyhow!("clip index {index} out of range ({} clips)", clips.len())
                })
            })
            .collect(),
    }
}

/// Default output path: `<input stem>_trimmed.mp4` next to the input
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("video");
    input.with_file_name(format!("{stem}_trimmed.mp4"))
}

fn print_clip_listing(clips: &[Clip]) {
    if clips.is_empty() {
        println!("No removable clips found.");
        return;
    }

    println!("{:>4}  {:<8} {:>12}  {:>12}  {:>8}  content", "#", "kind", "start", "end", "dur");
    for (index, clip) in clips.iter().enumerate() {
        println!(
            "{:>4}  {:<8} {:>12}  {:>12}  {:>7.2}s  {}",
            index,
            clip.kind.to_string(),
            format_clock(clip.start),
            format_clock(clip.end),
            clip.duration(),
            clip.content.as_deref().unwrap_or("-"),
        );
    }

    let fillers = clips.iter().filter(|c| c.kind == ClipKind::Filler).count();
    let silences = clips.iter().filter(|c| c.kind == ClipKind::Silence).count();
    let removable: f64 = clips.iter().map(Clip::duration).sum();
    println!(
        "\n{} clips ({} fillers, {} silences), {:.1}s removable",
        clips.len(),
        fillers,
        silences,
        removable
    );
}

fn print_export_summary(report: &ExportReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let strategy = match report.outcome {
        ExportOutcome::Primary { .. } => "single-pass filter export",
        ExportOutcome::Fallback { .. } => "extract-and-concatenate fallback",
    };
    println!(
        "Export complete via {strategy}: {}",
        report.outcome.output().display()
    );
    println!(
        "{:.1}s retained ({} fillers, {} silences removed)",
        report.retained_seconds, report.removed_fillers, report.removed_silences
    );
    Ok(())
}
