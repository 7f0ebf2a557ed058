//! Default configuration constants for streamscribe.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Audio sample rate in Hz after format normalization.
///
/// 16kHz is the standard for speech recognition; every window handed to the
/// recognizer is at this rate, mono, amplitude-normalized.
pub const SAMPLE_RATE: u32 = 16000;

/// Number of samples per recognition window.
///
/// 3200 samples is 0.2s at 16kHz. Windows dispatched to the recognizer are
/// always exactly this long; only the forced end-of-stream flush may be
/// shorter.
pub const WINDOW_SAMPLES: usize = 3200;

/// Tail padding appended at end-of-stream, in samples.
///
/// 4800 samples is 0.3s of silence at 16kHz. Engines with internal context
/// windows need trailing silence to flush their final acoustic hypotheses.
pub const TAIL_PADDING_SAMPLES: usize = 4800;

/// Full-scale magnitude of a signed 16-bit sample.
///
/// Normalized samples are `pcm as f32 / I16_FULL_SCALE`, giving the
/// [-1.0, 1.0) range the recognizer expects.
pub const I16_FULL_SCALE: f32 = 32768.0;

/// Default number of engine worker threads.
pub const NUM_THREADS: u32 = 4;

/// Default decoding method for the engine.
pub const DECODE_METHOD: &str = "greedy_search";

/// Endpoint rule 1: minimum trailing silence (seconds) after any speech.
pub const ENDPOINT_RULE1_TRAILING_SILENCE: f32 = 1.2;

/// Endpoint rule 2: minimum trailing silence (seconds) after a long utterance.
pub const ENDPOINT_RULE2_TRAILING_SILENCE: f32 = 0.6;

/// Endpoint rule 3: utterance length (seconds) that forces an endpoint.
pub const ENDPOINT_RULE3_UTTERANCE_LENGTH: f32 = 15.0;

/// Tail padding duration in milliseconds (the CLI default for `--tail-padding`).
pub const TAIL_PADDING_MS: u64 = 300;
