use std::fmt;

use super::answers::{AnswerSet, Likert, RawAnswers, RawValue};
use crate::i18n::{self, Language};
use crate::questionnaire::QUESTIONS;

/// A problem with a submitted answer set.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerIssue {
    /// Every unanswered question id, ascending
    Missing(Vec<u8>),
    NotInteger { id: u8, value: String },
    OutOfRange { id: u8, value: i64 },
    /// One source answered the same question under two keys (`q7` and `7`)
    Duplicate { id: u8 },
}

impl AnswerIssue {
    /// Message in the user's language
    pub fn localized(&self, language: Language) -> String {
        let errors = &i18n::text(language).errors;
        match self {
            AnswerIssue::Missing(ids) => errors
                .missing_questions
                .replace("{missing}", &join_ids(ids)),
            AnswerIssue::NotInteger { id, value } => errors
                .not_integer
                .replace("{id}", &id.to_string())
                .replace("{value}", value),
            AnswerIssue::OutOfRange { id, value } => errors
                .out_of_range
                .replace("{id}", &id.to_string())
                .replace("{value}", &value.to_string()),
            AnswerIssue::Duplicate { id } => {
                errors.duplicate_answer.replace("{id}", &id.to_string())
            }
        }
    }
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerIssue::Missing(ids) => write!(f, "missing answers for questions {}", join_ids(ids)),
            AnswerIssue::NotInteger { id, value } => {
                write!(f, "q{}: '{}' is not an integer", id, value)
            }
            AnswerIssue::OutOfRange { id, value } => {
                write!(f, "q{}: {} is outside {}..{}", id, value, Likert::MIN, Likert::MAX)
            }
            AnswerIssue::Duplicate { id } => write!(f, "q{}: answered more than once", id),
        }
    }
}

impl std::error::Error for AnswerIssue {}

fn join_ids(ids: &[u8]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ids of every question without an answer, ascending
pub fn missing_questions(raw: &RawAnswers) -> Vec<u8> {
    QUESTIONS
        .iter()
        .filter(|q| raw.get(q.id).is_none())
        .map(|q| q.id)
        .collect()
}

/// Validate raw answers into a complete answer set.
/// Returns all validation errors at once (not just the first): missing ids
/// are gathered into a single `Missing` issue, listed first.
pub fn validate_answers(raw: &RawAnswers) -> Result<AnswerSet, Vec<AnswerIssue>> {
    let mut errors = Vec::new();

    let missing = missing_questions(raw);
    if !missing.is_empty() {
        errors.push(AnswerIssue::Missing(missing));
    }

    let duplicates = raw.duplicate_ids();

    let mut values = Vec::with_capacity(QUESTIONS.len());
    for question in QUESTIONS.iter() {
        let Some(value) = raw.get(question.id) else {
            continue;
        };
        if duplicates.contains(&question.id) {
            errors.push(AnswerIssue::Duplicate { id: question.id });
            continue;
        }
        match parse_value(value) {
            Ok(number) => match Likert::new(number) {
                Some(likert) => values.push(likert),
                None => errors.push(AnswerIssue::OutOfRange {
                    id: question.id,
                    value: number,
                }),
            },
            Err(text) => errors.push(AnswerIssue::NotInteger {
                id: question.id,
                value: text,
            }),
        }
    }

    if errors.is_empty() {
        let mut values = values.into_iter();
        Ok(AnswerSet::from_fn(|_| values.next().unwrap_or_default()))
    } else {
        Err(errors)
    }
}

fn parse_value(value: &RawValue) -> Result<i64, String> {
    match value {
        RawValue::Int(n) => Ok(*n),
        RawValue::Float(_) => Err(value.to_string()),
        RawValue::Text(s) => s.trim().parse::<i64>().map_err(|_| s.clone()),
        RawValue::Other(_) => Err(value.to_string()),
    }
}

/// Localized lines describing a rejected answer set: the optional headline,
/// then each issue. The missing-questions message stands on its own line and
/// the per-question problems are listed under it.
pub fn issue_lines(
    issues: &[AnswerIssue],
    language: Language,
    headline: Option<&str>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(issues.len() + 1);
    if let Some(headline) = headline {
        lines.push(headline.to_string());
    }
    for issue in issues {
        match issue {
            AnswerIssue::Missing(_) => lines.push(issue.localized(language)),
            _ => lines.push(format!("  - {}", issue.localized(language))),
        }
    }
    lines
}
