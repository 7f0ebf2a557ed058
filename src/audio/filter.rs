//! Format normalization: arbitrary-rate interleaved PCM → 16kHz mono.
//!
//! Stand-in for an `aresample=16000,aformat=s16:mono` filter chain: each raw
//! frame is downmixed to mono, resampled to the target rate, and handed back
//! as 16-bit PCM. Amplitude normalization to f32 is a separate step so the
//! filter output matches what a real filter graph would republish.

use crate::audio::frame::RawFrame;
use crate::defaults::I16_FULL_SCALE;
use crate::error::{Result, ScribeError};

/// Stateless per-frame format converter.
#[derive(Debug, Clone)]
pub struct FormatFilter {
    target_rate: u32,
}

impl FormatFilter {
    pub fn new(target_rate: u32) -> Self {
        Self { target_rate }
    }

    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }

    /// Convert one raw frame to mono 16-bit PCM at the target rate.
    ///
    /// Linear-interpolation resampling is enough here: recognition features
    /// are robust to the slight rolloff, and the filter stays dependency-free.
    pub fn normalize(&self, frame: &RawFrame) -> Result<Vec<i16>> {
        if frame.channels == 0 {
            return Err(ScribeError::MediaFormat {
                message: "frame has zero channels".to_string(),
            });
        }
        if frame.sample_rate == 0 {
            return Err(ScribeError::MediaFormat {
                message: "frame has zero sample rate".to_string(),
            });
        }

        let mono = downmix(&frame.samples, frame.channels);
        Ok(resample(&mono, frame.sample_rate, self.target_rate))
    }
}

/// Average interleaved channels down to mono.
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|point| {
            let sum: i32 = point.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[samples.len() - 1]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}

/// Amplitude-normalize 16-bit PCM to floating point in [-1.0, 1.0).
pub fn to_normalized(pcm: &[i16]) -> Vec<f32> {
    pcm.iter().map(|&s| s as f32 / I16_FULL_SCALE).collect()
}
