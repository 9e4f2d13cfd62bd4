pub mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{validate_config, Config, ThemeChoice};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/devspectrum/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("devspectrum")
}

/// Get the default config file path (~/.config/devspectrum/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/devspectrum/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error; defaults are used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => read_config_file(&config_path),
        None => {
            let config_path = get_config_path();
            if !config_path.exists() {
                return Ok(Config::default());
            }
            read_config_file(&config_path)
        }
    }
}

fn read_config_file(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `devspectrum init` to create one",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::env;

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_path = env::temp_dir().join("devspectrum_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_path = env::temp_dir().join("devspectrum_test_config.yaml");
        fs::write(&temp_path, "language: en\ntheme: dark\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.language, Some(Language::En));
        assert_eq!(config.theme, ThemeChoice::Dark);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_path = env::temp_dir().join("devspectrum_test_bad_config.yaml");
        fs::write(&temp_path, "language: [unterminated\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_config_path_under_config_dir() {
        let path = get_config_path();
        assert!(path.ends_with(".config/devspectrum/config.yaml"));
    }
}
