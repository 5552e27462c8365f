use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from file or use defaults
///
/// Search order:
/// 1. Custom path if provided via --config
/// 2. .stackscanrc in current directory
/// 3. ~/.stackscanrc in home directory
/// 4. Built-in defaults
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    // If custom path provided, use it exclusively
    if let Some(path) = custom_path {
        return load_config_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    // Try current directory
    let current_config = PathBuf::from(".stackscanrc");
    if current_config.exists() {
        if let Ok(config) = load_config_from_file(&current_config) {
            return Ok(config);
        }
    }

    // Try home directory
    if let Some(home_config) = get_home_config_path() {
        if home_config.exists() {
            if let Ok(config) = load_config_from_file(&home_config) {
                return Ok(config);
            }
        }
    }

    // Fall back to defaults
    Ok(Config::default())
}

/// Load config from a specific file
fn load_config_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Get path to home directory config file
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".stackscanrc"))
}

/// Save a config to a file (useful for creating example configs)
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context("Failed to serialize config")?;

    fs::write(path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}
