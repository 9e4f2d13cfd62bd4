//! Language selection and localized strings.

mod text;

pub use text::{text, ErrorText, QuizText, ReportText, ResultText, UiText};

use crate::questionnaire::Letter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

pub const DEFAULT_LANGUAGE: Language = Language::Zh;

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Name shown in the language switcher
    pub fn label(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }

    /// The other language (used by the TUI toggle)
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a user-supplied language code. Unknown or empty values fall back
/// to the default language.
pub fn resolve_language(value: Option<&str>) -> Language {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => {
            Language::from_code(&v.to_lowercase()).unwrap_or(DEFAULT_LANGUAGE)
        }
        _ => DEFAULT_LANGUAGE,
    }
}

/// Letter -> display label ("A - Abstract")
pub type LetterDescriptions = BTreeMap<Letter, String>;

pub fn letter_descriptions(language: Language) -> LetterDescriptions {
    Letter::ALL
        .into_iter()
        .map(|l| (l, format!("{} - {}", l, letter_name(l, language))))
        .collect()
}

fn letter_name(letter: Letter, language: Language) -> &'static str {
    match (language, letter) {
        (Language::En, Letter::A) => "Abstract",
        (Language::En, Letter::V) => "Visual",
        (Language::En, Letter::F) => "Familiar",
        (Language::En, Letter::E) => "Exploration",
        (Language::En, Letter::R) => "Rapid",
        (Language::En, Letter::Q) => "Quality",
        (Language::En, Letter::P) => "Performance",
        (Language::En, Letter::C) => "Code Readability",
        (Language::Zh, Letter::A) => "抽象",
        (Language::Zh, Letter::V) => "视觉",
        (Language::Zh, Letter::F) => "熟悉领域",
        (Language::Zh, Letter::E) => "探索",
        (Language::Zh, Letter::R) => "速成",
        (Language::Zh, Letter::Q) => "质量",
        (Language::Zh, Letter::P) => "性能",
        (Language::Zh, Letter::C) => "代码可读性",
    }
}

/// Label for a point on the 7-point scale. Values outside -3..=3 have no label.
pub fn likert_label(value: i8, language: Language) -> Option<&'static str> {
    let (zh, en) = match value {
        -3 => ("非常反对", "Strongly Disagree"),
        -2 => ("反对", "Disagree"),
        -1 => ("略反对", "Slightly Disagree"),
        0 => ("中立", "Neutral"),
        1 => ("略同意", "Slightly Agree"),
        2 => ("同意", "Agree"),
        3 => ("非常同意", "Strongly Agree"),
        _ => return None,
    };
    Some(match language {
        Language::Zh => zh,
        Language::En => en,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_default() {
        assert_eq!(resolve_language(None), Language::Zh);
        assert_eq!(resolve_language(Some("")), Language::Zh);
    }

    #[test]
    fn test_resolve_language_case_insensitive() {
        assert_eq!(resolve_language(Some("EN")), Language::En);
        assert_eq!(resolve_language(Some(" zh ")), Language::Zh);
    }

    #[test]
    fn test_resolve_language_unknown_falls_back() {
        assert_eq!(resolve_language(Some("fr")), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_letter_descriptions() {
        let en = letter_descriptions(Language::En);
        assert_eq!(en.len(), 8);
        assert_eq!(en[&Letter::C], "C - Code Readability");
        let zh = letter_descriptions(Language::Zh);
        assert_eq!(zh[&Letter::A], "A - 抽象");
    }

    #[test]
    fn test_likert_labels() {
        assert_eq!(likert_label(-3, Language::En), Some("Strongly Disagree"));
        assert_eq!(likert_label(0, Language::Zh), Some("中立"));
        assert_eq!(likert_label(4, Language::En), None);
    }

    #[test]
    fn test_language_serde_lowercase() {
        let lang: Language = serde_saphyr::from_str("en").unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(serde_json::to_string(&Language::Zh).unwrap(), "\"zh\"");
    }
}
