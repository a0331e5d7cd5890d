use std::path::PathBuf;

use clap::Parser;

use crate::platform::config::LogDestination;

/// Download the media day photo archive for a player.
///
/// With both `--document` and `--name` a single retrieval runs. Otherwise
/// the form is shown on the terminal and repeats until end of input.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mediaday", version)]
pub struct Cli {
    /// Player's document number.
    #[arg(long)]
    pub document: Option<String>,

    /// Player's full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Configuration file (RON). Defaults to ./mediaday.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API base URL; empty means the page origin.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Origin used when the API base URL is empty.
    #[arg(long)]
    pub origin: Option<String>,

    /// Directory the archive is saved into.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}

impl Cli {
    /// Both identity fields, when given on the command line.
    pub fn one_shot(&self) -> Option<(String, String)> {
        match (&self.document, &self.name) {
            (Some(document), Some(name)) => Some((document.clone(), name.clone())),
            _ => None,
        }
    }
}
