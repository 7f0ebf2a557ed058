//! streamscribe - Streaming transcript segmentation for media audio
//!
//! Streams decoded audio through format normalization into an incremental
//! speech recognizer, emitting deduplicated transcript segments as they
//! stabilize.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod interrupt;
pub mod pipeline;
pub mod stt;

// Composition root (app::run needs the real engine and is feature-gated)
pub mod app;

// Core traits (source → pipeline → sink)
pub use audio::source::MediaSource;
pub use pipeline::sink::{CollectorSink, DisplaySink, StdoutSink, TranscriptSink};
pub use stt::recognizer::RecognizerStream;

// Pipeline
pub use pipeline::orchestrator::{Pipeline, PipelineConfig, StreamSummary};
pub use pipeline::types::Segment;

// Error handling
pub use error::{Result, ScribeError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
