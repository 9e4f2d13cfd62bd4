use serde::{Serialize, Serializer};
use std::fmt;

use super::engine::AxisScores;
use crate::i18n::LetterDescriptions;
use crate::questionnaire::{Axis, Letter, AXIS_SEQUENCE};

/// Four letters, one per axis in RQ, PC, FE, AV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileCode([Letter; 4]);

impl ProfileCode {
    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    /// Parse a code like "RPEA". Each position must hold a letter of the
    /// matching axis.
    pub fn parse(code: &str) -> Option<Self> {
        let chars: Vec<char> = code.trim().chars().collect();
        if chars.len() != AXIS_SEQUENCE.len() {
            return None;
        }
        let mut letters = [Letter::R; 4];
        for ((slot, axis), c) in letters.iter_mut().zip(AXIS_SEQUENCE).zip(chars) {
            let letter = Letter::from_char(c)?;
            if letter.axis() != axis {
                return None;
            }
            *slot = letter;
        }
        Some(Self(letters))
    }

    /// The letter chosen on `axis`
    pub fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }
}

impl fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl Serialize for ProfileCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One axis of the result, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub axis: Axis,
    pub title: &'static str,
    pub score: i32,
    pub selected: Letter,
    pub magnitude: u32,
    pub positive_label: String,
    pub negative_label: String,
    pub selected_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub code: ProfileCode,
    /// One entry per axis, in code order
    pub breakdown: Vec<BreakdownEntry>,
}

/// Pick a letter on every axis and build the display breakdown.
///
/// A score of exactly zero selects the positive letter. Labels missing from
/// `letter_descriptions` fall back to the bare letter.
pub fn build_profile_code(
    axis_scores: &AxisScores,
    letter_descriptions: &LetterDescriptions,
) -> Profile {
    let label = |letter: Letter| {
        letter_descriptions
            .get(&letter)
            .cloned()
            .unwrap_or_else(|| letter.to_string())
    };

    let mut letters = [Letter::R; 4];
    let mut breakdown = Vec::with_capacity(AXIS_SEQUENCE.len());

    for (slot, axis) in letters.iter_mut().zip(AXIS_SEQUENCE) {
        let score = axis_scores.get(axis);
        let selected = if score >= 0 {
            axis.positive()
        } else {
            axis.negative()
        };
        *slot = selected;

        breakdown.push(BreakdownEntry {
            axis,
            title: axis.title(),
            score,
            selected,
            magnitude: score.unsigned_abs(),
            positive_label: label(axis.positive()),
            negative_label: label(axis.negative()),
            selected_label: label(selected),
        });
    }

    Profile {
        code: ProfileCode(letters),
        breakdown,
    }
}
