//! Vosk engine adapter.
//!
//! Maps the [`RecognizerStream`] contract onto the Vosk C API bindings.
//! Vosk decodes inside `accept_waveform`, so the stream is never "ready" for
//! a separate decode step; the pump loop in the driver simply falls through.

use crate::defaults::I16_FULL_SCALE;
use crate::error::{Result, ScribeError};
use crate::stt::recognizer::RecognizerStream;
use std::path::Path;
use vosk::{CompleteResult, DecodingState, Model, Recognizer};

pub struct VoskRecognizer {
    // Held so the model outlives the recognizer handle.
    _model: Model,
    rec: Recognizer,
    endpoint: bool,
    text: String,
    finished: bool,
}

impl VoskRecognizer {
    /// Load a model directory and open one utterance stream at `sample_rate`.
    pub fn new(model_dir: &Path, sample_rate: u32) -> Result<Self> {
        let model_path = model_dir.display().to_string();
        let model = Model::new(&model_path).ok_or_else(|| ScribeError::ModelNotFound {
            path: model_path.clone(),
        })?;

        let mut rec =
            Recognizer::new(&model, sample_rate as f32).ok_or_else(|| {
                ScribeError::RecognizerInit {
                    message: format!("cannot create recognizer for model at {}", model_path),
                }
            })?;
        rec.set_max_alternatives(0);
        rec.set_words(false);

        Ok(Self {
            _model: model,
            rec,
            endpoint: false,
            text: String::new(),
            finished: false,
        })
    }

    fn complete_text(result: CompleteResult) -> String {
        match result {
            CompleteResult::Single(single) => single.text.to_string(),
            CompleteResult::Multiple(multi) => multi
                .alternatives
                .first()
                .map(|alt| alt.text.to_string())
                .unwrap_or_default(),
        }
    }
}

impl RecognizerStream for VoskRecognizer {
    fn accept_waveform(&mut self, _sample_rate: u32, samples: &[f32]) {
        // Vosk ingests 16-bit PCM; undo the amplitude normalization.
        let pcm: Vec<i16> = samples
            .iter()
            .map(|&s| (s * I16_FULL_SCALE).clamp(i16::MIN as f32, i16::MAX as f32) as i16)
            .collect();

        let state = self
            .rec
            .accept_waveform(&pcm)
            .unwrap_or(DecodingState::Running);

        self.endpoint = matches!(state, DecodingState::Finalized);
        self.text = if self.endpoint {
            Self::complete_text(self.rec.result())
        } else {
            self.rec.partial_result().partial.to_string()
        };
    }

    fn is_ready(&self) -> bool {
        // Decoding happens inside accept_waveform; nothing is ever pending.
        false
    }

    fn decode_step(&mut self) {}

    fn is_endpoint(&self) -> bool {
        self.endpoint
    }

    fn result(&mut self) -> String {
        self.text.clone()
    }

    fn reset(&mut self) {
        self.rec.reset();
        self.endpoint = false;
        self.text.clear();
    }

    fn input_finished(&mut self) {
        if !self.finished {
            self.finished = true;
            self.text = Self::complete_text(self.rec.final_result());
        }
    }
}
