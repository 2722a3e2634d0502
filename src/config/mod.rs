mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Environment variable consulted for the PageSpeed API key when the config
/// file does not provide one
pub const ENV_PAGESPEED_KEY: &str = "PAGESPEED_KEY";

/// Get the config directory path (~/.config/presence-audit/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("presence-audit")
}

/// Get the default config file path (~/.config/presence-audit/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/presence-audit/config.yaml)
///
/// A missing file is not an error: the tool runs fine with no config, so the
/// defaults are returned. An explicitly passed path that does not exist is an
/// error, since the operator asked for that exact file.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_config_yields_defaults() {
        // The default path may or may not exist on the machine running the
        // tests; an explicit bogus path must fail instead.
        let result = load_config(Some(PathBuf::from("/nonexistent/presence-audit.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_dir_under_dot_config() {
        let dir = get_config_dir();
        assert!(dir.ends_with(".config/presence-audit"));
    }
}
