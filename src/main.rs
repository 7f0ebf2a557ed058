use anyhow::Result;
use clap::Parser;
use streamscribe::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let summary = streamscribe::app::run(cli)?;

    if summary.windows == 0 {
        eprintln!("streamscribe: input shorter than one recognition window");
    }

    Ok(())
}
