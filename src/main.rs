use clap::Parser;
use dotback::config::Cli;
use dotback::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotback::logging::init();

    // Resolve the home directory and validate before touching anything
    let config = Config::try_from(cli)?;
    tracing::debug!(destination = %config.destination.display(), "configuration resolved");

    dotback::commands::backup::run(config)?;

    Ok(())
}
