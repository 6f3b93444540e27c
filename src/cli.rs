use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "podpages")]
#[command(about = "Render podcast transcripts and the episode catalog as static HTML pages.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a speaker-annotated text transcript into an HTML page
    Transcript(TranscriptCmd),
    /// Regenerate the episode list page and the home page from the catalog
    Index,
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
#[command(after_help = "Example:\n    podpages transcript transcript_episode1.txt transcript_ep1.html")]
pub struct TranscriptCmd {
    /// Plain-text transcript to read
    pub input: PathBuf,

    /// HTML file to write
    pub output: PathBuf,
}
