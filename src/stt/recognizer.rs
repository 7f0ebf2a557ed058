/// Contract with the incremental recognition engine.
///
/// One implementor holds one utterance stream: audio goes in through
/// [`accept_waveform`](RecognizerStream::accept_waveform), decode progress is
/// pumped with [`decode_step`](RecognizerStream::decode_step) while
/// [`is_ready`](RecognizerStream::is_ready) holds, and the observable outputs
/// are the endpoint flag and the current best-effort transcript. Engine calls
/// are non-failing; an engine that cannot process a window is a fatal
/// condition, not a recoverable error.
pub trait RecognizerStream {
    /// Ingest a block of amplitude-normalized mono samples at `sample_rate`.
    fn accept_waveform(&mut self, sample_rate: u32, samples: &[f32]);

    /// Whether enough acoustic context is buffered for another decode step.
    fn is_ready(&self) -> bool;

    /// Advance the decoder by one step.
    fn decode_step(&mut self);

    /// Whether the engine considers the current utterance concluded.
    fn is_endpoint(&self) -> bool;

    /// Current best-effort transcript for the active utterance.
    fn result(&mut self) -> String;

    /// Clear utterance state so the next window starts fresh.
    fn reset(&mut self);

    /// Signal that no more audio will arrive.
    fn input_finished(&mut self);
}

/// One scripted engine response, consumed per accepted waveform.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWindow {
    pub text: String,
    pub endpoint: bool,
    pub decode_steps: usize,
}

impl ScriptedWindow {
    pub fn new(text: &str, endpoint: bool) -> Self {
        Self {
            text: text.to_string(),
            endpoint,
            decode_steps: 1,
        }
    }

    pub fn with_decode_steps(mut self, steps: usize) -> Self {
        self.decode_steps = steps;
        self
    }
}

/// Scripted recognizer for testing.
///
/// Each `accept_waveform` call consumes the next scripted window; once the
/// script is exhausted further audio leaves the transcript unchanged, which
/// models an engine sitting on buffered context at end-of-stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    script: Vec<ScriptedWindow>,
    cursor: usize,
    current_text: String,
    endpoint: bool,
    pending_steps: usize,
    finished: bool,
    // Introspection counters
    accepted_samples: usize,
    accepted_rates: Vec<u32>,
    reset_count: usize,
    decode_step_count: usize,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one scripted response
    pub fn with_window(mut self, text: &str, endpoint: bool) -> Self {
        self.script.push(ScriptedWindow::new(text, endpoint));
        self
    }

    /// Append a fully specified scripted response
    pub fn with_scripted(mut self, window: ScriptedWindow) -> Self {
        self.script.push(window);
        self
    }

    /// Total samples accepted across all waveforms
    pub fn accepted_samples(&self) -> usize {
        self.accepted_samples
    }

    /// Sample rates seen by accept_waveform, in call order
    pub fn accepted_rates(&self) -> &[u32] {
        &self.accepted_rates
    }

    /// Number of reset() calls
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    /// Number of decode_step() calls
    pub fn decode_step_count(&self) -> usize {
        self.decode_step_count
    }

    /// Whether input_finished() was called
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RecognizerStream for ScriptedRecognizer {
    fn accept_waveform(&mut self, sample_rate: u32, samples: &[f32]) {
        self.accepted_samples += samples.len();
        self.accepted_rates.push(sample_rate);

        if let Some(window) = self.script.get(self.cursor) {
            self.cursor += 1;
            self.current_text = window.text.clone();
            self.endpoint = window.endpoint;
            self.pending_steps = window.decode_steps;
        } else {
            // Script exhausted: transcript unchanged, no endpoint
            self.endpoint = false;
            self.pending_steps = 0;
        }
    }

    fn is_ready(&self) -> bool {
        self.pending_steps > 0
    }

    fn decode_step(&mut self) {
        self.decode_step_count += 1;
        self.pending_steps = self.pending_steps.saturating_sub(1);
    }

    fn is_endpoint(&self) -> bool {
        self.endpoint
    }

    fn result(&mut self) -> String {
        self.current_text.clone()
    }

    fn reset(&mut self) {
        self.reset_count += 1;
        self.current_text.clear();
        self.endpoint = false;
        self.pending_steps = 0;
    }

    fn input_finished(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_recognizer_consumes_script_in_order() {
        let mut rec = ScriptedRecognizer::new()
            .with_window("hello", false)
            .with_window("hello world", true);

        rec.accept_waveform(16000, &[0.0; 3200]);
        assert_eq!(rec.result(), "hello");
        assert!(!rec.is_endpoint());

        rec.accept_waveform(16000, &[0.0; 3200]);
        assert_eq!(rec.result(), "hello world");
        assert!(rec.is_endpoint());
    }

    #[test]
    fn scripted_recognizer_ready_until_steps_exhausted() {
        let mut rec = ScriptedRecognizer::new()
            .with_scripted(ScriptedWindow::new("x", false).with_decode_steps(3));

        rec.accept_waveform(16000, &[0.0; 100]);
        let mut steps = 0;
        while rec.is_ready() {
            rec.decode_step();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(rec.decode_step_count(), 3);
    }

    #[test]
    fn scripted_recognizer_exhausted_script_keeps_text() {
        let mut rec = ScriptedRecognizer::new().with_window("tail words", false);

        rec.accept_waveform(16000, &[0.0; 3200]);
        assert_eq!(rec.result(), "tail words");

        // Tail padding after the script ran out
        rec.accept_waveform(16000, &[0.0; 4800]);
        assert_eq!(rec.result(), "tail words");
        assert!(!rec.is_endpoint());
    }

    #[test]
    fn scripted_recognizer_reset_clears_utterance_state() {
        let mut rec = ScriptedRecognizer::new().with_window("something", true);

        rec.accept_waveform(16000, &[0.0; 3200]);
        assert!(rec.is_endpoint());

        rec.reset();
        assert_eq!(rec.result(), "");
        assert!(!rec.is_endpoint());
        assert_eq!(rec.reset_count(), 1);
    }

    #[test]
    fn scripted_recognizer_tracks_accepted_audio() {
        let mut rec = ScriptedRecognizer::new();
        rec.accept_waveform(16000, &[0.0; 3200]);
        rec.accept_waveform(16000, &[0.0; 4800]);

        assert_eq!(rec.accepted_samples(), 8000);
        assert_eq!(rec.accepted_rates(), &[16000, 16000]);
    }

    #[test]
    fn scripted_recognizer_records_input_finished() {
        let mut rec = ScriptedRecognizer::new();
        assert!(!rec.is_finished());
        rec.input_finished();
        assert!(rec.is_finished());
    }

    #[test]
    fn recognizer_stream_is_object_safe() {
        let mut rec: Box<dyn RecognizerStream> =
            Box::new(ScriptedRecognizer::new().with_window("boxed", false));
        rec.accept_waveform(16000, &[0.0; 10]);
        assert_eq!(rec.result(), "boxed");
    }
}
