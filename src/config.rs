use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Shell command that presents the external icon chooser. Every
    /// non-empty line it prints to stdout is taken as the current
    /// selection; the pick ends when the command exits.
    #[serde(default)]
    pub picker_command: Option<String>,

    /// Catalog file location, overriding the platform data directory.
    #[serde(default)]
    pub data_path: Option<String>,

    /// Write the catalog after every successful mutation instead of only
    /// on demand and at quit.
    #[serde(default)]
    pub autosave: bool,
}

/// Load configuration.
///
/// An explicit CLI path must exist. Otherwise try
/// `<config dir>/loctui/config.yaml`, then `./config.yaml`, then fall
/// back to defaults; every setting is optional.
pub fn load(cli_path: Option<String>) -> Result<Config> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if !p.exists() {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
        return read_config(&p);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("loctui").join("config.yaml");
        if config_path.exists() {
            return read_config(&config_path);
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    Ok(Config::default())
}

fn read_config(path: &PathBuf) -> Result<Config> {
    let raw = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&raw)?;
    Ok(config)
}
