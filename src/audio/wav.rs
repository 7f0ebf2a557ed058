//! WAV file media source.
//!
//! Serves decoded PCM in decoder-sized frames at the file's native rate and
//! channel layout; format normalization happens downstream in
//! [`FormatFilter`](crate::audio::FormatFilter).

use crate::audio::frame::RawFrame;
use crate::audio::source::MediaSource;
use crate::error::{Result, ScribeError};
use std::io::Read;
use std::path::Path;

/// Sample points served per frame. Mirrors a typical compressed-audio
/// decoder frame; the pipeline must not depend on any particular size.
const FRAME_POINTS: usize = 1152;

/// Media source that reads PCM from WAV data.
pub struct WavFileSource {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
    position: usize,
    frame_points: usize,
}

impl WavFileSource {
    /// Create from any reader (for testing/flexibility).
    pub fn from_reader(reader: Box<dyn Read>) -> Result<Self> {
        let mut wav_reader = hound::WavReader::new(reader).map_err(|e| ScribeError::MediaFormat {
            message: format!("failed to parse WAV header: {}", e),
        })?;

        let spec = wav_reader.spec();
        if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(ScribeError::MediaFormat {
                message: format!(
                    "only 16-bit integer PCM is supported, got {}-bit {:?}",
                    spec.bits_per_sample, spec.sample_format
                ),
            });
        }
        if spec.channels == 0 {
            return Err(ScribeError::MediaFormat {
                message: "WAV header reports zero channels".to_string(),
            });
        }

        let samples: Vec<i16> = wav_reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ScribeError::MediaDecode {
                message: format!("failed to read WAV samples: {}", e),
            })?;

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            position: 0,
            frame_points: FRAME_POINTS,
        })
    }

    /// Open a WAV file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| ScribeError::MediaOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_reader(Box::new(std::io::BufReader::new(file)))
    }

    /// Create from stdin (reads all data up front).
    pub fn from_stdin() -> Result<Self> {
        use std::io::Cursor;

        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(|e| ScribeError::MediaOpen {
                path: "<stdin>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_reader(Box::new(Cursor::new(buffer)))
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Total duration of the input in seconds.
    pub fn duration_secs(&self) -> f64 {
        let points = self.samples.len() / self.channels as usize;
        points as f64 / self.sample_rate as f64
    }
}

impl MediaSource for WavFileSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        if self.position >= self.samples.len() {
            return Ok(None);
        }

        let stride = self.frame_points * self.channels as usize;
        let end = std::cmp::min(self.position + stride, self.samples.len());
        let chunk = self.samples[self.position..end].to_vec();
        self.position = end;

        Ok(Some(RawFrame::new(chunk, self.sample_rate, self.channels)))
    }

    fn name(&self) -> &'static str {
        "wav"
    }
}
