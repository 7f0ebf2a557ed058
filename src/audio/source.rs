use crate::audio::frame::RawFrame;
use crate::error::{Result, ScribeError};

/// Trait for decoded-frame suppliers.
///
/// This trait allows swapping implementations (real media input vs mock).
/// Frames arrive in decode order; a source that has delivered its last frame
/// returns `Ok(None)`; end-of-stream is expected, not an error. A decode
/// fault mid-stream returns `Err` and is unrecoverable.
pub trait MediaSource {
    /// Pull the next decoded frame, blocking until one is available.
    ///
    /// # Returns
    /// `Ok(Some(frame))` while data remains, `Ok(None)` at end-of-stream,
    /// or an error on a decode fault.
    fn next_frame(&mut self) -> Result<Option<RawFrame>>;

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "source"
    }
}

/// Mock media source for testing
#[derive(Debug, Clone, Default)]
pub struct MockMediaSource {
    frames: Vec<RawFrame>,
    position: usize,
    fail_after: Option<usize>,
    error_message: String,
}

impl MockMediaSource {
    /// Create a new mock source with no frames (immediate end-of-stream)
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            position: 0,
            fail_after: None,
            error_message: "mock decode fault".to_string(),
        }
    }

    /// Configure the mock to serve the given frames in order
    pub fn with_frames(mut self, frames: Vec<RawFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// Convenience: serve mono 16kHz chunks of the given sizes, filled with
    /// a constant sample value
    pub fn with_mono_chunks(mut self, sizes: &[usize], value: i16) -> Self {
        self.frames = sizes
            .iter()
            .map(|&n| RawFrame::mono(vec![value; n], 16000))
            .collect();
        self
    }

    /// Configure the mock to fail after serving `n` frames
    pub fn with_failure_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Configure the error message for failures
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl MediaSource for MockMediaSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        if let Some(n) = self.fail_after {
            if self.position >= n {
                return Err(ScribeError::MediaDecode {
                    message: self.error_message.clone(),
                });
            }
        }

        match self.frames.get(self.position) {
            Some(frame) => {
                self.position += 1;
                Ok(Some(frame.clone()))
            }
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
