use clap::Parser;
use std::path::PathBuf;

/// Terminal slide carousel.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Terminal slide carousel")]
pub struct Cli {
    /// Deck file to load (defaults to ~/.config/carousel/deck.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write logs (defaults to the user cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the built-in deck as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}
