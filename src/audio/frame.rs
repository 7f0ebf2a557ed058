//! Raw decoded audio frames as produced by a media source.

/// One decoded audio frame: interleaved 16-bit PCM at the source's native
/// rate and channel layout. Frame length is decoder-determined and varies
/// from frame to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Interleaved PCM samples (channel-major within each sample point).
    pub samples: Vec<i16>,
    /// Source sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl RawFrame {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Frame already mono at the given rate, the common case for test input.
    pub fn mono(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self::new(samples, sample_rate, 1)
    }

    /// Number of sample points (samples per channel).
    pub fn len(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
