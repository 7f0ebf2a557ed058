//! Speech-to-text: the incremental recognizer contract and engines.

pub mod recognizer;
#[cfg(feature = "vosk-engine")]
pub mod vosk;

pub use recognizer::{RecognizerStream, ScriptedRecognizer, ScriptedWindow};
#[cfg(feature = "vosk-engine")]
pub use vosk::VoskRecognizer;
