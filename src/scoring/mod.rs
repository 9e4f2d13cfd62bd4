pub mod answers;
pub mod engine;
pub mod profile;
pub mod validation;

pub use answers::{load_raw_answers, AnswerSet, Likert, RawAnswers, RawValue};
pub use engine::{compute_scores, AxisScores, ScoreSheet, ScoredResponse};
pub use profile::{build_profile_code, BreakdownEntry, Profile, ProfileCode};
pub use validation::{issue_lines, missing_questions, validate_answers, AnswerIssue};
