//! Recognition driver: pushes windows into the engine and pumps its decoder.

use crate::pipeline::types::WindowOutcome;
use crate::stt::recognizer::RecognizerStream;

/// Owns the engine stream for the lifetime of one input.
pub struct RecognitionDriver<R: RecognizerStream> {
    engine: R,
    sample_rate: u32,
}

impl<R: RecognizerStream> RecognitionDriver<R> {
    pub fn new(engine: R, sample_rate: u32) -> Self {
        Self {
            engine,
            sample_rate,
        }
    }

    /// Feed one complete window and decode to exhaustion.
    ///
    /// Returns the endpoint flag and the best-effort transcript for the
    /// active utterance, in that post-decode order.
    pub fn feed(&mut self, window: &[f32]) -> WindowOutcome {
        self.engine.accept_waveform(self.sample_rate, window);
        self.pump();

        WindowOutcome {
            is_endpoint: self.engine.is_endpoint(),
            text: self.engine.result(),
        }
    }

    /// Run decode steps while the engine has buffered acoustic context.
    ///
    /// Unbounded by design: the engine contract guarantees readiness goes
    /// false after finitely many steps for bounded input, since each step
    /// consumes buffered audio and no audio arrives inside the loop.
    pub fn pump(&mut self) {
        while self.engine.is_ready() {
            self.engine.decode_step();
        }
    }

    /// End-of-stream: feed the final block (residual audio plus tail
    /// padding), signal input finished, decode to exhaustion, and return
    /// whatever text is available. Never reports an endpoint; the caller
    /// emits the trailing partial unconditionally.
    pub fn finalize(&mut self, tail: &[f32]) -> String {
        self.engine.accept_waveform(self.sample_rate, tail);
        self.engine.input_finished();
        self.pump();
        self.engine.result()
    }

    /// Clear the engine's utterance state after an endpoint.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Consume the driver, returning the engine (test introspection).
    pub fn into_engine(self) -> R {
        self.engine
    }
}
