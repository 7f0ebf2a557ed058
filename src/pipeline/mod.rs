//! The streaming synchronization and segmentation pipeline.
//!
//! Windows of normalized audio flow accumulator → driver → emitter, all on
//! the thread that drives [`Pipeline::run`](orchestrator::Pipeline::run).

pub mod accumulator;
pub mod driver;
pub mod emitter;
pub mod orchestrator;
pub mod sink;
pub mod types;

pub use accumulator::SampleAccumulator;
pub use driver::RecognitionDriver;
pub use emitter::{Observation, SegmentEmitter};
pub use orchestrator::{Pipeline, PipelineConfig, StreamSummary};
pub use sink::{CollectorSink, DisplaySink, StdoutSink, TranscriptSink};
pub use types::{Segment, WindowOutcome};
