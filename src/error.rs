//! Error types for streamscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Media source errors
    #[error("Cannot open media input {path}: {message}")]
    MediaOpen { path: String, message: String },

    #[error("Media decode failed: {message}")]
    MediaDecode { message: String },

    #[error("Unsupported media format: {message}")]
    MediaFormat { message: String },

    // Windowing errors
    #[error(
        "Incoming frame of {frame_len} samples overflows the {window_samples}-sample window \
         (buffer held {buffered}); frame size must stay below the window size"
    )]
    WindowOverflow {
        frame_len: usize,
        window_samples: usize,
        buffered: usize,
    },

    // Recognition engine errors
    #[error("Recognition model not found at {path}")]
    ModelNotFound { path: String },

    #[error("Recognizer initialization failed: {message}")]
    RecognizerInit { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ScribeError>;
