//! Command-line interface for streamscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Streaming transcript segmentation for media audio
#[derive(Parser, Debug)]
#[command(
    name = "streamscribe",
    version,
    about = "Stream media audio through an incremental recognizer and print transcript segments"
)]
pub struct Cli {
    /// Path to the recognition model directory
    #[arg(value_name = "MODEL_DIR")]
    pub model: PathBuf,

    /// Media input: a WAV file path, or '-' to read WAV data from stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to configuration file (default: ~/.config/streamscribe/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of engine worker threads
    #[arg(long, short = 't', value_name = "N")]
    pub threads: Option<u32>,

    /// Decoding method override (greedy_search or modified_beam_search)
    #[arg(long, value_name = "METHOD")]
    pub decode_method: Option<String>,

    /// Trailing silence appended at end-of-stream (config default: 300ms).
    /// Examples: 300ms, 1s
    #[arg(long, value_name = "DURATION", value_parser = parse_tail_padding_ms)]
    pub tail_padding: Option<u64>,

    /// Print plain `index: text` lines to stdout instead of the live display
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: stream diagnostics, -vv: per-window detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a tail-padding duration string into milliseconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (milliseconds), single-unit (`300ms`, `1s`), and compound (`1s500ms`).
fn parse_tail_padding_ms(s: &str) -> Result<u64, String> {
    let s = s.trim();
    // Bare number → milliseconds
    if let Ok(ms) = s.parse::<u64>() {
        return Ok(ms);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| e.to_string())
}
