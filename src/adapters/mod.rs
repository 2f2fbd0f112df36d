// Adapters - Concrete implementations of the port contracts

pub mod exec_ffmpeg;
pub mod probe_ffprobe;
pub mod transcribe;

pub use exec_ffmpeg::FfmpegEncoder;
pub use probe_ffprobe::FfprobeAdapter;
pub use transcribe::{CommandTranscriber, JsonFileTranscriber};
