//! Encoder selection and quality policy

use serde::{Deserialize, Serialize};

/// The encoder chosen for an export, determined once per run by probing
/// the host for hardware encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderChoice {
    /// Software x264 encoding, always available
    SoftwareX264,
    /// NVIDIA NVENC hardware encoding
    Nvenc,
    /// AMD AMF hardware encoding
    Amf,
    /// Intel Quick Sync hardware encoding
    Qsv,
}

impl EncoderChoice {
    /// Select an encoder from the probed identifiers, in priority order
    /// nvenc > amf > qsv, falling back to software x264.
    pub fn select(available: &[String]) -> Self {
        const PRIORITY: [(&str, EncoderChoice); 3] = [
            ("h264_nvenc", EncoderChoice::Nvenc),
            ("h264_amf", EncoderChoice::Amf),
            ("h264_qsv", EncoderChoice::Qsv),
        ];

        for (identifier, choice) in PRIORITY {
            if available.iter().any(|name| name == identifier) {
                return choice;
            }
        }
        EncoderChoice::SoftwareX264
    }

    /// The ffmpeg codec identifier for this choice
    pub fn codec_name(&self) -> &'static str {
        match self {
            EncoderChoice::SoftwareX264 => "libx264",
            EncoderChoice::Nvenc => "h264_nvenc",
            EncoderChoice::Amf => "h264_amf",
            EncoderChoice::Qsv => "h264_qsv",
        }
    }

    /// Encoding preset. NVENC rejects `slower`, so it gets `medium`; the
    /// other hardware encoders take `slow` and software x264 takes `slower`.
    pub fn preset(&self) -> &'static str {
        match self {
            EncoderChoice::SoftwareX264 => "slower",
            EncoderChoice::Nvenc => "medium",
            EncoderChoice::Amf | EncoderChoice::Qsv => "slow",
        }
    }

    /// Near-lossless quality arguments for this encoder.
    ///
    /// Deterministic for a given choice: two plans built from identical
    /// inputs must be byte-identical.
    pub fn quality_args(&self) -> Vec<String> {
        let mut args = vec![
            "-preset".to_string(),
            self.preset().to_string(),
            "-crf".to_string(),
            "16".to_string(),
            "-pix_fmt".to_string(),
            "yuv420p".to_string(),
            "-b:v".to_string(),
            "20000k".to_string(),
        ];
        if *self == EncoderChoice::SoftwareX264 {
            args.push("-x264opts".to_string());
            args.push("aq-mode=2:aq-strength=1.0".to_string());
        }
        args
    }
}

impl std::fmt::Display for EncoderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.codec_name())
    }
}
