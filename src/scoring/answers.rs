use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::questionnaire::{Question, QUESTIONS, QUESTION_COUNT};

/// A point on the 7-point agreement scale, -3 (strongly disagree) to 3
/// (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Likert(i8);

impl Likert {
    pub const MIN: i8 = -3;
    pub const MAX: i8 = 3;
    pub const NEUTRAL: Likert = Likert(0);

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Likert(value as i8))
        } else {
            None
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// All scale points from -3 to 3
    pub fn scale() -> impl Iterator<Item = Likert> {
        (Self::MIN..=Self::MAX).map(Likert)
    }

    /// One step toward agreement, saturating at 3
    pub fn increment(self) -> Self {
        Likert((self.0 + 1).min(Self::MAX))
    }

    /// One step toward disagreement, saturating at -3
    pub fn decrement(self) -> Self {
        Likert((self.0 - 1).max(Self::MIN))
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete, validated answer set: exactly one answer per question.
///
/// The scoring engine only accepts this type, so completeness is checked
/// once, before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    values: [Likert; QUESTION_COUNT],
}

impl AnswerSet {
    /// Build an answer set by choosing an answer for every question
    pub fn from_fn<F>(mut answer: F) -> Self
    where
        F: FnMut(&Question) -> Likert,
    {
        let mut values = [Likert::NEUTRAL; QUESTION_COUNT];
        for (slot, question) in values.iter_mut().zip(QUESTIONS.iter()) {
            *slot = answer(question);
        }
        Self { values }
    }

    /// Every question answered with the same value
    pub fn uniform(value: Likert) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn get(&self, question: &Question) -> Likert {
        self.values[usize::from(question.id) - 1]
    }

    /// Answers paired with their questions, in question order
    pub fn iter(&self) -> impl Iterator<Item = (&'static Question, Likert)> + '_ {
        QUESTIONS.iter().zip(self.values.iter().copied())
    }

    /// Convert back to form-style raw answers ("q1" -> 2)
    pub fn to_raw(&self) -> RawAnswers {
        let mut raw = RawAnswers::default();
        for (question, value) in self.iter() {
            raw.insert(question.field_name(), RawValue::Int(i64::from(value.value())));
        }
        raw
    }
}

/// An unvalidated answer value as it arrives from a file or the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Booleans, nulls, lists and maps. Never a valid answer, but kept so
    /// validation can report it alongside every other problem.
    Other(serde_json::Value),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Float(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Form-style answers keyed by field name.
///
/// Keys are accepted as `q7`, `Q7` or `7`. Keys that name no question are
/// kept but ignored during validation. Two spellings of the same question in
/// one source are kept as they are and reported by validation.
///
/// Example YAML:
/// ```yaml
/// q1: 2
/// q2: -1
/// q3: "0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawAnswers(BTreeMap<String, RawValue>);

impl RawAnswers {
    pub fn insert(&mut self, key: String, value: RawValue) {
        self.0.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value submitted for `question_id`, if any
    pub fn get(&self, question_id: u8) -> Option<&RawValue> {
        self.0
            .iter()
            .find(|(key, _)| parse_field_key(key) == Some(question_id))
            .map(|(_, value)| value)
    }

    /// Apply a `qN=V` assignment, e.g. from `--set q3=-2`
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let Some((key, value)) = assignment.split_once('=') else {
            bail!("Invalid answer '{}': expected qN=VALUE", assignment);
        };
        let Some(id) = parse_field_key(key) else {
            bail!("Invalid question '{}' in '{}'", key.trim(), assignment);
        };
        // Drop any existing spelling of the same key so the override wins
        self.0.retain(|k, _| parse_field_key(k) != Some(id));
        self.0
            .insert(format!("q{}", id), RawValue::Text(value.trim().to_string()));
        Ok(())
    }

    /// Question ids answered under more than one key, e.g. both `q7` and `7`
    pub fn duplicate_ids(&self) -> Vec<u8> {
        let mut counts = [0usize; QUESTION_COUNT];
        for id in self.0.keys().filter_map(|k| parse_field_key(k)) {
            counts[usize::from(id) - 1] += 1;
        }
        QUESTIONS
            .iter()
            .filter(|q| counts[usize::from(q.id) - 1] > 1)
            .map(|q| q.id)
            .collect()
    }

    /// Merge `other` on top of these answers. Every question `other` answers
    /// replaces all of this set's spellings for it; spellings within `other`
    /// are kept together so a conflict there still reaches validation.
    pub fn merge(&mut self, other: RawAnswers) {
        let replaced: Vec<u8> = other.0.keys().filter_map(|k| parse_field_key(k)).collect();
        self.0
            .retain(|k, _| parse_field_key(k).map_or(true, |id| !replaced.contains(&id)));
        self.0.extend(other.0);
    }
}

/// Parse "q7", "Q7" or "7" into a question id. Returns None for anything
/// outside 1..=28.
pub fn parse_field_key(key: &str) -> Option<u8> {
    let key = key.trim();
    let digits = key
        .strip_prefix('q')
        .or_else(|| key.strip_prefix('Q'))
        .unwrap_or(key);
    let id: u8 = digits.parse().ok()?;
    crate::questionnaire::question(id).map(|q| q.id)
}

/// Load raw answers from a YAML or JSON file. `-` reads from stdin.
pub fn load_raw_answers(path: &Path) -> Result<RawAnswers> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file at {}", path.display()))?
    };

    if content.trim().is_empty() {
        return Ok(RawAnswers::default());
    }

    let answers: RawAnswers = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid YAML/JSON in {}", path.display()))?;
    Ok(answers)
}
