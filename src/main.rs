use anyhow::Context;
use carousel::cli::Cli;
use carousel::config::Config;
use carousel::{logging, ui};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", Config::default().to_toml()?);
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading deck")?;
    tracing::info!(sliders = config.sliders.len(), "deck loaded");

    ui::runtime::run(config).await
}
