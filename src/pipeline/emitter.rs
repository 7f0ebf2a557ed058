//! Segment emitter: the central state machine of the pipeline.
//!
//! Converts raw per-window recognizer output into a deduplicated, segmented
//! transcript stream. A segment is in progress until the engine reports an
//! endpoint; only endpoints with non-empty text advance the segment index,
//! so pure-silence endpoints never create phantom segment numbers.

use crate::error::Result;
use crate::pipeline::sink::TranscriptSink;

/// What one observation did, and what the caller must do next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    /// Text was emitted to the sink.
    pub emitted: bool,
    /// The engine's utterance state must be reset before the next window.
    /// True for every endpoint, including empty-text ones.
    pub reset_required: bool,
    /// The index of the segment this endpoint finalized, if any.
    pub finalized: Option<usize>,
}

/// Per-stream segmentation state: the segment counter and the
/// last-emitted-text cache used for deduplication.
#[derive(Debug, Clone, Default)]
pub struct SegmentEmitter {
    segment_index: usize,
    last_text: String,
}

impl SegmentEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the segment currently in progress.
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// The most recently emitted (not-yet-finalized) text.
    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    /// Process one recognizer observation.
    ///
    /// Emits lower-cased text under the current segment index whenever the
    /// text is non-empty and differs from the last emission of this
    /// segment. On an endpoint the index advances only if text was
    /// non-empty, and the dedup cache resets so the next segment's first
    /// text is compared against a blank baseline.
    pub fn observe(
        &mut self,
        text: &str,
        is_endpoint: bool,
        sink: &mut dyn TranscriptSink,
    ) -> Result<Observation> {
        let mut observation = Observation::default();

        if !text.is_empty() && text != self.last_text {
            self.last_text = text.to_string();
            sink.emit(&crate::pipeline::types::Segment::new(
                self.segment_index,
                text.to_lowercase(),
            ))?;
            observation.emitted = true;
        }

        if is_endpoint {
            if !text.is_empty() {
                observation.finalized = Some(self.segment_index);
                self.segment_index += 1;
            }
            observation.reset_required = true;
            self.last_text.clear();
        }

        Ok(observation)
    }
}
