use anyhow::Result;
use clap::Parser;
use mktest::cli::Cli;
use mktest::commands::{handle_generate, GenerateOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();
    mktest::observability::init_tracing(cli.verbosity);

    let config = cli.into_config().validate()?;

    match handle_generate(config)? {
        GenerateOutcome::Written(_) => {}
        GenerateOutcome::Preview(source) => print!("{source}"),
    }

    Ok(())
}
