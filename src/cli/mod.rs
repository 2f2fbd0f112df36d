//! Command-line interface module

pub mod args;
pub mod commands;

pub use args::{DetectArgs, ExportArgs};
pub use commands::{Cli, Commands};
