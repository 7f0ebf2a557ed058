//! Media input: raw frame supply and format normalization.
//!
//! The pipeline consumes audio through two stages defined here: a
//! [`MediaSource`](source::MediaSource) that yields raw decoded frames at
//! whatever rate and channel layout the input carries, and a
//! [`FormatFilter`](filter::FormatFilter) that republishes them as 16kHz
//! mono 16-bit PCM ready for amplitude normalization.

pub mod filter;
pub mod frame;
pub mod source;
pub mod wav;

pub use filter::FormatFilter;
pub use frame::RawFrame;
pub use source::{MediaSource, MockMediaSource};
pub use wav::WavFileSource;
