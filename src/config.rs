//! Configuration loading and data folder resolution

use crate::error::{Error, Result};
use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default dataset file names, matching the published data drops
pub const WINNERS_FILE: &str = "ballon_dor_winners_2015_2024.csv";
pub const SHORTLIST_FILE: &str = "ballon_dor_2025_shortlist.csv";

const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "ballondor", about = "Ballon d'Or shortlist scoring service")]
pub struct Cli {
    /// Folder containing the winners and shortlist data files
    #[arg(long, env = "BALLONDOR_DATA")]
    pub data_folder: Option<PathBuf>,

    /// Address to listen on (host:port)
    #[arg(long, env = "BALLONDOR_BIND")]
    pub bind: Option<String>,
}

/// Optional TOML config file (`ballondor.toml` in the platform config dir)
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    data_folder: Option<PathBuf>,
    bind: Option<String>,
    winners_file: Option<String>,
    shortlist_file: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_folder: PathBuf,
    pub bind: SocketAddr,
    pub winners_file: String,
    pub shortlist_file: String,
}

impl Config {
    /// Full path to the winners data file
    pub fn winners_path(&self) -> PathBuf {
        self.data_folder.join(&self.winners_file)
    }

    /// Full path to the shortlist data file
    pub fn shortlist_path(&self) -> PathBuf {
        self.data_folder.join(&self.shortlist_file)
    }
}

/// Resolve configuration following the priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (handled by clap's `env` attribute)
/// 3. TOML config file
/// 4. Compiled default (current directory, loopback port 5000)
pub fn resolve(cli: &Cli) -> Result<Config> {
    let file = load_config_file()?.unwrap_or_default();

    let data_folder = cli
        .data_folder
        .clone()
        .or(file.data_folder)
        .unwrap_or_else(|| PathBuf::from("."));

    let bind_str = cli
        .bind
        .clone()
        .or(file.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    let bind: SocketAddr = bind_str
        .parse()
        .map_err(|_| Error::Config(format!("Invalid bind address: {}", bind_str)))?;

    Ok(Config {
        data_folder,
        bind,
        winners_file: file.winners_file.unwrap_or_else(|| WINNERS_FILE.to_string()),
        shortlist_file: file
            .shortlist_file
            .unwrap_or_else(|| SHORTLIST_FILE.to_string()),
    })
}

/// Load `ballondor.toml` from the platform config directory, if present.
///
/// A missing file is not an error; a malformed file is.
fn load_config_file() -> Result<Option<ConfigFile>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    parse_config_file(&path).map(Some)
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ballondor").join("ballondor.toml"))
}

fn parse_config_file(path: &Path) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path)?;
    toml::from_str(&text)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}
