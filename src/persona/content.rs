use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::buffered_eprintln;
use crate::i18n::{Language, DEFAULT_LANGUAGE};

/// Content shipped with the binary, used when no file is configured
const EMBEDDED_CONTENT_JSON: &str = include_str!("../../data/persona_content.json");

/// Long-form persona copy for one language.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PersonaContent {
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub tagline_heading: Option<String>,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

impl PersonaContent {
    /// An entry counts only if it has sections or a non-blank tagline
    pub fn has_content(&self) -> bool {
        !self.sections.is_empty()
            || self
                .tagline
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Content found by [`ContentStore::lookup`], tagged with the language that
/// actually supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedContent<'a> {
    pub language: Language,
    pub content: &'a PersonaContent,
}

impl ResolvedContent<'_> {
    /// True when the requested language had nothing and the default was used
    pub fn is_fallback(&self, requested: Language) -> bool {
        self.language != requested
    }
}

/// Persona copy keyed by profile code, then language code.
///
/// Example JSON:
/// ```json
/// { "RPEA": { "en": { "tagline": "...", "sections": [{ "heading": "...", "paragraphs": ["..."] }] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ContentStore {
    entries: HashMap<String, HashMap<String, PersonaContent>>,
}

impl ContentStore {
    /// The store compiled into the binary
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CONTENT_JSON).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse persona content JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read persona content at {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid persona content in {}", path.display()))
    }

    /// Number of profile codes with any entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-step lookup: the requested language first, then the default
    /// language. Each step only accepts an entry that has content.
    pub fn lookup(&self, code: &str, language: Language) -> Option<ResolvedContent<'_>> {
        let entry = self.entries.get(code)?;

        let resolve = |lang: Language| {
            entry
                .get(lang.code())
                .filter(|content| content.has_content())
                .map(|content| ResolvedContent {
                    language: lang,
                    content,
                })
        };

        resolve(language).or_else(|| resolve(DEFAULT_LANGUAGE))
    }
}

/// Load the configured persona content, or the embedded content when no path
/// is configured. A file that cannot be read or parsed is reported and the
/// embedded content is used instead.
pub fn load_content_store(path: Option<&Path>, verbose: bool) -> ContentStore {
    let Some(path) = path else {
        return ContentStore::embedded();
    };

    match ContentStore::load(path) {
        Ok(store) => {
            if verbose {
                buffered_eprintln!(
                    "Loaded persona content for {} codes from {}",
                    store.len(),
                    path.display()
                );
            }
            store
        }
        Err(e) => {
            buffered_eprintln!("Warning: {:#}. Using built-in persona content.", e);
            ContentStore::embedded()
        }
    }
}
