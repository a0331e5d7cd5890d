//! Start-up configuration: RON file, then environment, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use mediaday_client::ClientSettings;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILENAME: &str = "mediaday.ron";

pub const ENV_API_URL: &str = "MEDIADAY_API_URL";
pub const ENV_ORIGIN: &str = "MEDIADAY_ORIGIN";
pub const ENV_OUTPUT_DIR: &str = "MEDIADAY_OUTPUT_DIR";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogDestination {
    /// Write to ./mediaday.log in current directory.
    #[default]
    File,
    /// Write to terminal (stderr/stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub origin: String,
    pub output_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_url: client.base_url,
            origin: client.origin,
            output_dir: PathBuf::from("downloads"),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_bytes: client.max_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_url.clone(),
            origin: self.origin.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(ENV_API_URL) {
            self.api_url = value;
        }
        if let Some(value) = lookup(ENV_ORIGIN) {
            self.origin = value;
        }
        if let Some(value) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(value);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(value) = &cli.api_url {
            self.api_url = value.clone();
        }
        if let Some(value) = &cli.origin {
            self.origin = value.clone();
        }
        if let Some(value) = &cli.output_dir {
            self.output_dir = value.clone();
        }
        if let Some(value) = cli.log {
            self.log_destination = value;
        }
    }
}

/// Configuration plus anything worth logging once the logger is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub notes: Vec<String>,
}

pub fn load(cli: &Cli) -> Result<LoadedConfig> {
    load_with(cli, |key| std::env::var(key).ok())
}

pub(crate) fn load_with(
    cli: &Cli,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LoadedConfig> {
    let mut notes = Vec::new();
    let mut config = match &cli.config {
        Some(path) => read_file(path)
            .with_context(|| format!("reading config file {}", path.display()))?
            .unwrap_or_else(|| {
                notes.push(format!("Config file {path:?} not found, using defaults"));
                AppConfig::default()
            }),
        None => match read_file(Path::new(DEFAULT_CONFIG_FILENAME)) {
            Ok(Some(config)) => {
                notes.push(format!("Loaded config from {DEFAULT_CONFIG_FILENAME}"));
                config
            }
            Ok(None) => AppConfig::default(),
            Err(err) => {
                notes.push(format!("Ignoring {DEFAULT_CONFIG_FILENAME}: {err:#}"));
                AppConfig::default()
            }
        },
    };

    config.apply_env(lookup);
    config.apply_cli(cli);
    Ok(LoadedConfig { config, notes })
}

fn read_file(path: &Path) -> Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let config = ron::from_str(&content).context("parsing RON")?;
    Ok(Some(config))
}
