//! Main entry point for the transkit command line.

use anyhow::Context;
use clap::Parser;
use transkit_cli::{Cli, Command, Puller, TranslationsCommand};
use transkit_config::{Config, ConfigLoader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).context("Failed to load configuration")?;
    if cli.verbose {
        transkit_common::init_dev_logging()?;
    } else {
        transkit_common::init_logging((&config.logging).into())?;
    }

    match cli.command {
        Command::Translations(TranslationsCommand::Pull { branch, force }) => {
            let puller = Puller::new(config.translations);

            let mut stdout = std::io::stdout().lock();
            puller.pull(&branch, force, &mut stdout).await?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> transkit_common::Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}
