//! Stream orchestrator: drives frames from the media pipeline into the
//! accumulator and performs end-of-stream finalization.
//!
//! Single-threaded and synchronous: every stage runs to completion on the
//! thread that calls [`Pipeline::run`], and samples, windows, and emissions
//! all stay in strict arrival order.

use crate::audio::filter::{to_normalized, FormatFilter};
use crate::audio::source::MediaSource;
use crate::config::Config;
use crate::defaults;
use crate::error::Result;
use crate::pipeline::accumulator::SampleAccumulator;
use crate::pipeline::driver::RecognitionDriver;
use crate::pipeline::emitter::SegmentEmitter;
use crate::pipeline::sink::TranscriptSink;
use crate::stt::recognizer::RecognizerStream;

/// Pipeline tuning.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Sample rate after format normalization (Hz).
    pub sample_rate: u32,
    /// Samples per recognition window.
    pub window_samples: usize,
    /// Silence appended at end-of-stream, in samples.
    pub tail_padding_samples: usize,
    /// 0: silent, 1: stream summary, 2: per-window detail (stderr).
    pub verbosity: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            window_samples: defaults::WINDOW_SAMPLES,
            tail_padding_samples: defaults::TAIL_PADDING_SAMPLES,
            verbosity: 0,
        }
    }
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sample_rate: config.audio.sample_rate,
            window_samples: config.audio.window_samples,
            tail_padding_samples: config.tail_padding_samples(),
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Counters for one completed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    /// Frames pulled from the media source.
    pub frames: usize,
    /// Complete windows dispatched to the recognizer.
    pub windows: usize,
    /// Segments finalized at endpoints (the trailing partial, if any, is
    /// emitted but not finalized).
    pub segments: usize,
    /// Normalized samples that entered the accumulator.
    pub samples: usize,
}

/// The assembled pipeline: accumulator → driver → emitter → sink.
pub struct Pipeline<R: RecognizerStream, S: TranscriptSink> {
    config: PipelineConfig,
    filter: FormatFilter,
    accumulator: SampleAccumulator,
    driver: RecognitionDriver<R>,
    emitter: SegmentEmitter,
    sink: S,
}

impl<R: RecognizerStream, S: TranscriptSink> Pipeline<R, S> {
    pub fn new(config: PipelineConfig, engine: R, sink: S) -> Self {
        let filter = FormatFilter::new(config.sample_rate);
        let accumulator = SampleAccumulator::new(config.window_samples);
        let driver = RecognitionDriver::new(engine, config.sample_rate);

        Self {
            config,
            filter,
            accumulator,
            driver,
            emitter: SegmentEmitter::new(),
            sink,
        }
    }

    /// Run the stream to completion: pull every frame, then finalize.
    ///
    /// A decode fault aborts immediately with the error; finalization runs
    /// only on a clean end-of-stream. Resources are released by drop on
    /// every exit path.
    pub fn run(&mut self, source: &mut dyn MediaSource) -> Result<StreamSummary> {
        let mut summary = StreamSummary::default();

        while let Some(frame) = source.next_frame()? {
            summary.frames += 1;

            let pcm = self.filter.normalize(&frame)?;
            let samples = to_normalized(&pcm);
            summary.samples += samples.len();

            if let Some(window) = self.accumulator.append(&samples)? {
                self.process_window(&window, &mut summary)?;
            }
        }

        self.finalize(&mut summary)?;
        Ok(summary)
    }

    fn process_window(&mut self, window: &[f32], summary: &mut StreamSummary) -> Result<()> {
        summary.windows += 1;

        let outcome = self.driver.feed(window);
        if self.config.verbosity >= 2 {
            eprintln!(
                "[window {}] endpoint={} text={:?}",
                summary.windows, outcome.is_endpoint, outcome.text
            );
        }

        let observation = self
            .emitter
            .observe(&outcome.text, outcome.is_endpoint, &mut self.sink)?;
        if observation.finalized.is_some() {
            summary.segments += 1;
        }
        if observation.reset_required {
            self.driver.reset();
        }

        Ok(())
    }

    /// End-of-stream finalization. Runs exactly once per stream:
    /// residual samples plus tail padding go to the engine, input is marked
    /// finished, the decoder is pumped dry, and whatever text remains is
    /// observed without requiring an endpoint so the trailing partial
    /// segment is never lost.
    fn finalize(&mut self, summary: &mut StreamSummary) -> Result<()> {
        let mut tail = self.accumulator.take_residual();
        summary.samples += self.config.tail_padding_samples;
        tail.resize(tail.len() + self.config.tail_padding_samples, 0.0);

        let text = self.driver.finalize(&tail);
        self.emitter.observe(&text, false, &mut self.sink)?;
        self.sink.finish()?;

        if self.config.verbosity >= 1 {
            eprintln!(
                "streamscribe: {} frames, {} windows, {} finalized segments",
                summary.frames, summary.windows, summary.segments
            );
        }

        Ok(())
    }

    /// Current segment index (the segment in progress).
    pub fn segment_index(&self) -> usize {
        self.emitter.segment_index()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the pipeline, returning the sink (library use: collect
    /// emissions after a run).
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consume the pipeline, returning engine and sink (test introspection).
    pub fn into_parts(self) -> (R, S) {
        (self.driver.into_engine(), self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::source::MockMediaSource;
    use crate::error::ScribeError;
    use crate::pipeline::sink::CollectorSink;
    use crate::stt::recognizer::ScriptedRecognizer;

    fn test_config() -> PipelineConfig {
        PipelineConfig {
            sample_rate: 16000,
            window_samples: 3200,
            tail_padding_samples: 4800,
            verbosity: 0,
        }
    }

    #[test]
    fn run_windows_frames_and_feeds_engine() {
        // 3 frames of 1600 samples = 4800 → one full window + 1600 residual
        let mut source = MockMediaSource::new().with_mono_chunks(&[1600, 1600, 1600], 100);
        let engine = ScriptedRecognizer::new().with_window("hi", false);
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let summary = pipeline.run(&mut source).unwrap();
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.windows, 1);
        assert_eq!(summary.samples, 4800 + 4800);

        let (engine, _sink) = pipeline.into_parts();
        // One window plus the finalization block (1600 residual + 4800 tail)
        assert_eq!(engine.accepted_samples(), 3200 + 1600 + 4800);
        assert!(engine.is_finished());
    }

    #[test]
    fn run_counts_finalized_segments() {
        let mut source = MockMediaSource::new().with_mono_chunks(&[3200, 3200, 3200], 0);
        let engine = ScriptedRecognizer::new()
            .with_window("one", true)
            .with_window("two", false)
            .with_window("two three", true);
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let summary = pipeline.run(&mut source).unwrap();
        assert_eq!(summary.windows, 3);
        assert_eq!(summary.segments, 2);
        assert_eq!(pipeline.segment_index(), 2);
    }

    #[test]
    fn endpoint_triggers_engine_reset() {
        let mut source = MockMediaSource::new().with_mono_chunks(&[3200, 3200], 0);
        let engine = ScriptedRecognizer::new()
            .with_window("words", true)
            .with_window("", true); // silence endpoint also resets
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        pipeline.run(&mut source).unwrap();
        let (engine, _sink) = pipeline.into_parts();
        assert_eq!(engine.reset_count(), 2);
    }

    #[test]
    fn decode_fault_aborts_without_finalization() {
        let mut source = MockMediaSource::new()
            .with_mono_chunks(&[3200, 3200], 0)
            .with_failure_after(1);
        let engine = ScriptedRecognizer::new().with_window("x", false);
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let err = pipeline.run(&mut source).unwrap_err();
        assert!(matches!(err, ScribeError::MediaDecode { .. }));

        let (engine, _sink) = pipeline.into_parts();
        assert!(!engine.is_finished());
    }

    #[test]
    fn oversized_frame_surfaces_window_overflow() {
        let mut source = MockMediaSource::new().with_mono_chunks(&[8000], 0);
        let engine = ScriptedRecognizer::new();
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let err = pipeline.run(&mut source).unwrap_err();
        assert!(matches!(err, ScribeError::WindowOverflow { .. }));
    }

    #[test]
    fn empty_stream_still_finalizes_once() {
        let mut source = MockMediaSource::new();
        let engine = ScriptedRecognizer::new();
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let summary = pipeline.run(&mut source).unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.windows, 0);

        let (engine, sink) = pipeline.into_parts();
        // Tail padding alone reached the engine, no emissions
        assert_eq!(engine.accepted_samples(), 4800);
        assert!(engine.is_finished());
        assert!(sink.emissions().is_empty());
    }

    #[test]
    fn stereo_high_rate_input_is_normalized_before_windowing() {
        use crate::audio::frame::RawFrame;

        // 48kHz stereo frames: 9600 sample points → 3200 after resampling,
        // exactly one window per frame.
        let frame = RawFrame::new(vec![300i16; 9600 * 2], 48000, 2);
        let mut source = MockMediaSource::new().with_frames(vec![frame.clone(), frame]);
        let engine = ScriptedRecognizer::new()
            .with_window("a", false)
            .with_window("b", false);
        let mut pipeline = Pipeline::new(test_config(), engine, CollectorSink::new());

        let summary = pipeline.run(&mut source).unwrap();
        assert_eq!(summary.windows, 2);
    }

    #[test]
    fn pipeline_config_from_config_uses_audio_section() {
        let mut config = Config::default();
        config.audio.window_samples = 1600;
        config.audio.tail_padding_ms = 100;

        let pc = PipelineConfig::from_config(&config).with_verbosity(1);
        assert_eq!(pc.window_samples, 1600);
        assert_eq!(pc.tail_padding_samples, 1600);
        assert_eq!(pc.verbosity, 1);
    }
}
