use crate::defaults;
use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub endpoint: EndpointConfig,
    pub recognizer: RecognizerConfig,
}

/// Normalized-audio and windowing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate after format normalization (Hz).
    pub sample_rate: u32,
    /// Samples per recognition window.
    pub window_samples: usize,
    /// Silence appended at end-of-stream (milliseconds).
    pub tail_padding_ms: u64,
}

/// Endpoint detection tuning passed to the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Minimum trailing silence after any speech (seconds).
    pub rule1_trailing_silence: f32,
    /// Minimum trailing silence after a long utterance (seconds).
    pub rule2_trailing_silence: f32,
    /// Utterance length that forces an endpoint (seconds).
    pub rule3_utterance_length: f32,
}

/// Recognition engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognizerConfig {
    pub num_threads: u32,
    pub decode_method: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            window_samples: defaults::WINDOW_SAMPLES,
            tail_padding_ms: defaults::TAIL_PADDING_MS,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            rule1_trailing_silence: defaults::ENDPOINT_RULE1_TRAILING_SILENCE,
            rule2_trailing_silence: defaults::ENDPOINT_RULE2_TRAILING_SILENCE,
            rule3_utterance_length: defaults::ENDPOINT_RULE3_UTTERANCE_LENGTH,
        }
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            num_threads: defaults::NUM_THREADS,
            decode_method: defaults::DECODE_METHOD.to_string(),
        }
    }
}

/// Decoding methods the engine understands.
pub const DECODE_METHODS: &[&str] = &["greedy_search", "modified_beam_search"];

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScribeError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ScribeError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file doesn't exist
    ///
    /// Only a missing file falls back to defaults; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ScribeError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Default configuration file path: `~/.config/streamscribe/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("streamscribe").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - STREAMSCRIBE_THREADS → recognizer.num_threads
    /// - STREAMSCRIBE_DECODE_METHOD → recognizer.decode_method
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(threads) = std::env::var("STREAMSCRIBE_THREADS") {
            if let Ok(n) = threads.parse::<u32>() {
                if n > 0 {
                    self.recognizer.num_threads = n;
                }
            }
        }

        if let Ok(method) = std::env::var("STREAMSCRIBE_DECODE_METHOD") {
            if !method.is_empty() {
                self.recognizer.decode_method = method;
            }
        }

        self
    }

    /// Validate configuration values
    ///
    /// Windowing math breaks down at zero sizes, and the accumulator
    /// invariant requires frames to fit inside a window, so these are
    /// checked up front rather than surfacing as runtime faults.
    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate == 0 {
            return Err(ScribeError::ConfigInvalidValue {
                key: "audio.sample_rate".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if self.audio.window_samples == 0 {
            return Err(ScribeError::ConfigInvalidValue {
                key: "audio.window_samples".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if self.recognizer.num_threads == 0 {
            return Err(ScribeError::ConfigInvalidValue {
                key: "recognizer.num_threads".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if !DECODE_METHODS.contains(&self.recognizer.decode_method.as_str()) {
            return Err(ScribeError::ConfigInvalidValue {
                key: "recognizer.decode_method".to_string(),
                message: format!(
                    "unknown method '{}', expected one of: {}",
                    self.recognizer.decode_method,
                    DECODE_METHODS.join(", ")
                ),
            });
        }

        Ok(())
    }

    /// Tail padding length in samples at the configured sample rate.
    pub fn tail_padding_samples(&self) -> usize {
        (self.audio.sample_rate as u64 * self.audio.tail_padding_ms / 1000) as usize
    }
}
