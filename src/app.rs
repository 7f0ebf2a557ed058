//! Composition root: wire CLI + config into a running pipeline.
//!
//! Config resolution is engine-free and always built; only [`run`] needs the
//! real recognizer and sits behind the `vosk-engine` feature.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Resolve the effective configuration: file, environment, then CLI flags.
/// Flags left off the command line never touch file or default values.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    }
    .with_env_overrides();

    if let Some(threads) = cli.threads {
        config.recognizer.num_threads = threads;
    }
    if let Some(method) = &cli.decode_method {
        config.recognizer.decode_method = method.clone();
    }
    if let Some(ms) = cli.tail_padding {
        config.audio.tail_padding_ms = ms;
    }

    config.validate()?;
    Ok(config)
}

/// Open the media input named on the command line (`-` reads stdin).
#[cfg(feature = "vosk-engine")]
fn open_source(input: &str) -> Result<crate::audio::wav::WavFileSource> {
    use crate::audio::wav::WavFileSource;

    if input == "-" {
        WavFileSource::from_stdin()
    } else {
        WavFileSource::open(std::path::Path::new(input))
    }
}

/// Run one stream end to end and report its summary.
#[cfg(feature = "vosk-engine")]
pub fn run(cli: Cli) -> Result<crate::pipeline::orchestrator::StreamSummary> {
    use crate::interrupt;
    use crate::pipeline::orchestrator::{Pipeline, PipelineConfig};
    use crate::pipeline::sink::{DisplaySink, StdoutSink, TranscriptSink};
    use crate::stt::vosk::VoskRecognizer;

    let config = resolve_config(&cli)?;
    interrupt::install();

    let mut source = open_source(&cli.input)?;
    if cli.verbose >= 1 {
        eprintln!(
            "streamscribe {}: {} ({} Hz, {} ch, {:.1}s) -> model {}",
            crate::version_string(),
            cli.input,
            source.sample_rate(),
            source.channels(),
            source.duration_secs(),
            cli.model.display(),
        );
    }

    let engine = VoskRecognizer::new(&cli.model, config.audio.sample_rate)?;
    let sink: Box<dyn TranscriptSink> = if cli.quiet {
        Box::new(StdoutSink)
    } else {
        Box::new(DisplaySink::new())
    };

    let pipeline_config = PipelineConfig::from_config(&config).with_verbosity(cli.verbose);
    let mut pipeline = Pipeline::new(pipeline_config, engine, sink);
    pipeline.run(&mut source)
}
