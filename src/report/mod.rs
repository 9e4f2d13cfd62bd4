pub mod export;

pub use export::{default_export_path, export_report, render_markdown, sanitize_text};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::i18n::{letter_descriptions, Language};
use crate::persona::{persona_title, ContentStore, PersonaContent};
use crate::scoring::{
    build_profile_code, compute_scores, AnswerSet, AxisScores, BreakdownEntry, ProfileCode,
    ScoredResponse,
};

/// Everything the result screen, the `score` command and the exporter show
/// for one answer set.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub language: Language,
    pub code: ProfileCode,
    pub persona_title: Option<&'static str>,
    /// Language that actually supplied `persona_content`
    pub content_language: Option<Language>,
    pub persona_content: Option<PersonaContent>,
    pub axis_scores: AxisScores,
    pub breakdown: Vec<BreakdownEntry>,
    pub responses: Vec<ScoredResponse>,
    pub generated_at: DateTime<Utc>,
}

impl ProfileReport {
    /// File name used when no output path is given
    pub fn default_file_name(&self) -> String {
        format!("DevSpectrum_{}.md", self.code)
    }
}

/// Score `answers` and collect the profile, persona and breakdown for
/// `language`.
pub fn build_report(answers: &AnswerSet, language: Language, store: &ContentStore) -> ProfileReport {
    let sheet = compute_scores(answers);
    let profile = build_profile_code(&sheet.axis_scores, &letter_descriptions(language));
    let resolved = store.lookup(&profile.code.to_string(), language);

    ProfileReport {
        language,
        code: profile.code,
        persona_title: persona_title(&profile.code, language),
        content_language: resolved.map(|r| r.language),
        persona_content: resolved.map(|r| r.content.clone()),
        axis_scores: sheet.axis_scores,
        breakdown: profile.breakdown,
        responses: sheet.responses,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Likert;

    #[test]
    fn test_build_report_regression_vector() {
        let answers = AnswerSet::uniform(Likert::new(1).unwrap());
        let report = build_report(&answers, Language::En, &ContentStore::embedded());

        assert_eq!(report.code.to_string(), "RPEA");
        assert_eq!(report.axis_scores, AxisScores::new(3, 1, -1, 1));
        assert_eq!(report.persona_title, Some("Algorithm Competitor"));
        assert_eq!(report.content_language, Some(Language::En));
        assert_eq!(report.responses.len(), 28);
        assert_eq!(report.breakdown.len(), 4);
        assert_eq!(report.default_file_name(), "DevSpectrum_RPEA.md");
    }

    #[test]
    fn test_build_report_without_content() {
        let answers = AnswerSet::uniform(Likert::new(1).unwrap());
        let report = build_report(&answers, Language::Zh, &ContentStore::default());

        assert_eq!(report.persona_title, Some("算法竞赛人"));
        assert!(report.persona_content.is_none());
        assert!(report.content_language.is_none());
    }

    #[test]
    fn test_report_serializes_code_and_scores() {
        let answers = AnswerSet::uniform(Likert::NEUTRAL);
        let report = build_report(&answers, Language::En, &ContentStore::default());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["code"], "RPFA");
        assert_eq!(value["language"], "en");
        assert_eq!(value["axis_scores"]["RQ"], 0);
        assert_eq!(value["responses"][0]["question"]["id"], 1);
    }
}
