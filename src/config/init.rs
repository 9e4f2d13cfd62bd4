use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config, ThemeChoice};
use crate::i18n::{Language, DEFAULT_LANGUAGE};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Empty input or "none" means unset
fn optional_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Accept only the codes we ship; anything else asks again
fn parse_language_answer(input: &str) -> Option<Language> {
    let code = input.trim().to_lowercase();
    Language::ALL.into_iter().find(|l| l.code() == code)
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("DevSpectrum Configuration Wizard");
    println!("================================");
    println!();

    let language = loop {
        let input = prompt_with_default("Interface language (zh/en)", DEFAULT_LANGUAGE.code())?;
        match parse_language_answer(&input) {
            Some(lang) => break lang,
            None => println!("  Invalid: expected 'zh' or 'en'. Try again."),
        }
    };

    println!();
    println!("The quiz can pick colors for dark or light terminals. 'auto' asks the terminal.");
    let theme = loop {
        let input = prompt_with_default("Theme (auto/dark/light)", ThemeChoice::Auto.as_str())?;
        match input.parse::<ThemeChoice>() {
            Ok(theme) => break theme,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let export_dir = optional_path(&prompt_with_default(
        "Directory for exported reports (none = current directory)",
        "none",
    )?);

    let persona_content = optional_path(&prompt_with_default(
        "Custom persona content JSON (none = built-in)",
        "none",
    )?);

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        language: Some(language),
        theme,
        persona_content,
        export_dir,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `devspectrum` to start the quiz.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_path() {
        assert_eq!(optional_path(""), None);
        assert_eq!(optional_path("  NONE "), None);
        assert_eq!(optional_path("~/reports"), Some(PathBuf::from("~/reports")));
    }

    #[test]
    fn test_parse_language_answer() {
        assert_eq!(parse_language_answer("EN"), Some(Language::En));
        assert_eq!(parse_language_answer("zh"), Some(Language::Zh));
        assert_eq!(parse_language_answer("fr"), None);
    }
}
