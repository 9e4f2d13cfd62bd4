use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::i18n::Language;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interface language; `--lang` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    #[serde(default)]
    pub theme: ThemeChoice,

    /// JSON file replacing the built-in persona content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_content: Option<PathBuf>,

    /// Directory exported reports are written to (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

/// TUI color scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Auto => "auto",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ThemeChoice::Auto),
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(format!(
                "unknown theme '{}' (expected auto, dark or light)",
                other
            )),
        }
    }
}

/// Check paths in the config against the filesystem.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref dir) = config.export_dir {
        if dir.exists() && !dir.is_dir() {
            errors.push(format!(
                "export_dir: '{}' exists and is not a directory",
                dir.display()
            ));
        }
    }

    if let Some(ref path) = config.persona_content {
        if path.is_dir() {
            errors.push(format!(
                "persona_content: '{}' is a directory, expected a JSON file",
                path.display()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, ThemeChoice::Auto);
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
language: en
theme: light
persona_content: /tmp/personas.json
export_dir: /tmp/reports
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.language, Some(Language::En));
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.persona_content, Some(PathBuf::from("/tmp/personas.json")));
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/reports")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("language: fr\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<ThemeChoice>(), Ok(ThemeChoice::Dark));
        assert_eq!(" auto ".parse::<ThemeChoice>(), Ok(ThemeChoice::Auto));
        assert!("solarized".parse::<ThemeChoice>().is_err());
    }

    #[test]
    fn test_serialize_skips_unset_paths() {
        let config = Config {
            language: Some(Language::Zh),
            ..Default::default()
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        assert!(yaml.contains("language: zh"));
        assert!(yaml.contains("theme: auto"));
        assert!(!yaml.contains("export_dir"));
    }

    #[test]
    fn test_validate_config_collects_errors() {
        let file = env::temp_dir().join("devspectrum_test_not_a_dir.txt");
        std::fs::write(&file, "x").unwrap();

        let config = Config {
            export_dir: Some(file.clone()),
            persona_content: Some(env::temp_dir()),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("export_dir:"));
        assert!(errors[1].starts_with("persona_content:"));

        let _ = std::fs::remove_file(&file);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
