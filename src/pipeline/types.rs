//! Shared pipeline data types.

/// One transcript emission: the utterance index and its text at the moment
/// of emission. The same index appears repeatedly while a segment is in
/// progress; the text of the last emission under an index is that segment's
/// final transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub text: String,
}

impl Segment {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// What the recognizer reported after one window was fed and decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowOutcome {
    /// Current best-effort transcript for the active utterance.
    pub text: String,
    /// Whether the engine considers the utterance concluded.
    pub is_endpoint: bool,
}
