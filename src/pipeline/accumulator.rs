//! Sample accumulator: arbitrary frame sizes in, fixed windows out.
//!
//! Decouples decoder-determined frame lengths from the recognizer's fixed
//! window requirement. Dispatch timing is "drain at capacity, before folding
//! in the new frame": a window is completed and handed out the moment an
//! incoming frame would fill it, and only the excess is carried over.

use crate::error::{Result, ScribeError};

/// Fixed-capacity buffer of normalized samples.
///
/// Owned and instantiable, one per stream, so multiple concurrent streams
/// never share windowing state.
#[derive(Debug, Clone)]
pub struct SampleAccumulator {
    buffer: Vec<f32>,
    window_samples: usize,
}

impl SampleAccumulator {
    pub fn new(window_samples: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(window_samples),
            window_samples,
        }
    }

    /// Samples currently buffered (always less than the window size).
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn window_samples(&self) -> usize {
        self.window_samples
    }

    /// Append one frame of normalized samples, in order.
    ///
    /// Returns a complete window of exactly `window_samples` samples when
    /// the frame fills the buffer to capacity, `None` otherwise. At most one
    /// window is produced per call: a frame whose carry-over would itself
    /// reach capacity again means the frame size and window size are
    /// misconfigured, and that is reported as an error rather than handled
    /// silently.
    pub fn append(&mut self, frame: &[f32]) -> Result<Option<Vec<f32>>> {
        if self.buffer.len() + frame.len() < self.window_samples {
            self.buffer.extend_from_slice(frame);
            return Ok(None);
        }

        // Complete the window from the head of the incoming frame, then
        // fold the excess into the now-empty buffer.
        let need = self.window_samples - self.buffer.len();
        let carry = &frame[need..];
        if carry.len() >= self.window_samples {
            return Err(ScribeError::WindowOverflow {
                frame_len: frame.len(),
                window_samples: self.window_samples,
                buffered: self.buffer.len(),
            });
        }

        let mut window = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.window_samples));
        window.extend_from_slice(&frame[..need]);
        self.buffer.extend_from_slice(carry);

        Ok(Some(window))
    }

    /// Drain whatever is buffered, shorter than a window.
    ///
    /// Only the forced end-of-stream flush calls this; mid-stream drains
    /// always go through `append`.
    pub fn take_residual(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(n: usize, value: f32) -> Vec<f32> {
        vec![value; n]
    }

    #[test]
    fn append_below_capacity_buffers_without_dispatch() {
        let mut acc = SampleAccumulator::new(3200);
        assert!(acc.append(&chunk(1000, 0.1)).unwrap().is_none());
        assert_eq!(acc.buffered(), 1000);
    }

    #[test]
    fn append_dispatches_exact_window_at_capacity() {
        let mut acc = SampleAccumulator::new(3200);
        acc.append(&chunk(1000, 0.1)).unwrap();

        let window = acc.append(&chunk(2200, 0.2)).unwrap().unwrap();
        assert_eq!(window.len(), 3200);
        assert_eq!(acc.buffered(), 0);
        // Input order preserved across the seam
        assert_eq!(window[999], 0.1);
        assert_eq!(window[1000], 0.2);
    }

    #[test]
    fn spec_scenario_1000_2300_500() {
        // Window size 3200, chunks 1000/2300/500: one drain of exactly 3200
        // after the second append, 100 samples carried, 600 buffered at end.
        let mut acc = SampleAccumulator::new(3200);

        assert!(acc.append(&chunk(1000, 0.1)).unwrap().is_none());

        let window = acc.append(&chunk(2300, 0.2)).unwrap();
        let window = window.expect("second append must dispatch");
        assert_eq!(window.len(), 3200);
        assert_eq!(acc.buffered(), 100);

        assert!(acc.append(&chunk(500, 0.3)).unwrap().is_none());
        assert_eq!(acc.buffered(), 600);
    }

    #[test]
    fn window_integrity_for_multiple_of_window_size() {
        // Total length a multiple of the window size → exactly total/window
        // complete windows, each exactly window-sized, in input order.
        let window_samples = 320;
        let chunks = [100usize, 220, 320, 300, 20, 260, 60];
        assert_eq!(chunks.iter().sum::<usize>(), 4 * window_samples);

        let mut acc = SampleAccumulator::new(window_samples);
        let mut windows = Vec::new();
        let mut counter = 0u32;
        for &n in &chunks {
            let frame: Vec<f32> = (0..n)
                .map(|_| {
                    counter += 1;
                    counter as f32
                })
                .collect();
            if let Some(w) = acc.append(&frame).unwrap() {
                windows.push(w);
            }
        }

        assert_eq!(windows.len(), 4);
        assert!(acc.is_empty());
        let flat: Vec<f32> = windows.into_iter().flatten().collect();
        let expected: Vec<f32> = (1..=4 * window_samples as u32).map(|i| i as f32).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn frame_exactly_filling_empty_buffer_dispatches() {
        let mut acc = SampleAccumulator::new(3200);
        let window = acc.append(&chunk(3200, 0.5)).unwrap().unwrap();
        assert_eq!(window.len(), 3200);
        assert!(acc.is_empty());
    }

    #[test]
    fn oversized_frame_is_a_configuration_error() {
        let mut acc = SampleAccumulator::new(3200);
        let err = acc.append(&chunk(6400, 0.0)).unwrap_err();
        assert!(matches!(err, ScribeError::WindowOverflow { .. }));
    }

    #[test]
    fn oversized_carry_is_a_configuration_error() {
        let mut acc = SampleAccumulator::new(3200);
        acc.append(&chunk(3000, 0.0)).unwrap();
        // 3000 buffered + 3500 incoming → window leaves 3300 carry ≥ 3200
        let err = acc.append(&chunk(3500, 0.0)).unwrap_err();
        match err {
            ScribeError::WindowOverflow {
                frame_len,
                window_samples,
                buffered,
            } => {
                assert_eq!(frame_len, 3500);
                assert_eq!(window_samples, 3200);
                assert_eq!(buffered, 3000);
            }
            other => panic!("expected WindowOverflow, got {:?}", other),
        }
    }

    #[test]
    fn take_residual_drains_partial_buffer() {
        let mut acc = SampleAccumulator::new(3200);
        acc.append(&chunk(600, 0.25)).unwrap();

        let residual = acc.take_residual();
        assert_eq!(residual.len(), 600);
        assert!(residual.iter().all(|&s| s == 0.25));
        assert!(acc.is_empty());
    }

    #[test]
    fn take_residual_on_empty_buffer_is_empty() {
        let mut acc = SampleAccumulator::new(3200);
        assert!(acc.take_residual().is_empty());
    }

    #[test]
    fn empty_frame_append_is_a_noop() {
        let mut acc = SampleAccumulator::new(3200);
        acc.append(&chunk(100, 0.0)).unwrap();
        assert!(acc.append(&[]).unwrap().is_none());
        assert_eq!(acc.buffered(), 100);
    }
}
