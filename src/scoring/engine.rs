use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::answers::AnswerSet;
use crate::questionnaire::{Axis, Question, AXIS_SEQUENCE, QUESTIONS};

/// How one answer contributed to its axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse {
    pub question: &'static Question,
    pub raw: i8,
    pub adjusted: i32, // raw, negated for reverse-scored questions
    pub axis: Axis,
    pub orientation: i32, // +1 if the question's letter is the axis's positive pole
    pub weighted: i32, // orientation * adjusted
}

/// Per-axis sums of weighted answers. Each axis has seven questions, so a
/// score lies in -21..=21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisScores([i32; 4]);

impl AxisScores {
    pub fn new(rq: i32, pc: i32, fe: i32, av: i32) -> Self {
        Self([rq, pc, fe, av])
    }

    pub fn get(&self, axis: Axis) -> i32 {
        self.0[axis.index()]
    }

    fn add(&mut self, axis: Axis, value: i32) {
        self.0[axis.index()] += value;
    }

    /// Scores in profile code order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i32)> + '_ {
        AXIS_SEQUENCE.iter().map(move |axis| (*axis, self.get(*axis)))
    }
}

impl Serialize for AxisScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_SEQUENCE.len()))?;
        for (axis, score) in self.iter() {
            map.serialize_entry(axis.key(), &score)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub axis_scores: AxisScores,
    /// One record per question, in question order
    pub responses: Vec<ScoredResponse>,
}

/// Score a complete answer set.
///
/// For each question: reverse-scored answers are negated, then the value is
/// signed by whether the question's letter is its axis's positive or
/// negative pole, then summed into that axis.
pub fn compute_scores(answers: &AnswerSet) -> ScoreSheet {
    let mut axis_scores = AxisScores::default();
    let mut responses = Vec::with_capacity(QUESTIONS.len());

    for (question, answer) in answers.iter() {
        let raw = answer.value();
        let adjusted = if question.reverse {
            -i32::from(raw)
        } else {
            i32::from(raw)
        };
        let axis = question.axis();
        let orientation = axis.orientation(question.dimension);
        let weighted = orientation * adjusted;
        axis_scores.add(axis, weighted);

        responses.push(ScoredResponse {
            question,
            raw,
            adjusted,
            axis,
            orientation,
            weighted,
        });
    }

    ScoreSheet {
        axis_scores,
        responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Likert;

    #[test]
    fn test_all_zero_answers_score_zero() {
        let sheet = compute_scores(&AnswerSet::uniform(Likert::NEUTRAL));
        for axis in AXIS_SEQUENCE {
            assert_eq!(sheet.axis_scores.get(axis), 0);
        }
    }

    #[test]
    fn test_all_slightly_agree() {
        // Every axis mixes reverse/direct and positive/negative questions
        let sheet = compute_scores(&AnswerSet::uniform(Likert::new(1).unwrap()));
        assert_eq!(sheet.axis_scores, AxisScores::new(3, 1, -1, 1));
    }

    #[test]
    fn test_responses_in_question_order() {
        let sheet = compute_scores(&AnswerSet::uniform(Likert::new(2).unwrap()));
        assert_eq!(sheet.responses.len(), 28);
        for (i, response) in sheet.responses.iter().enumerate() {
            assert_eq!(usize::from(response.question.id), i + 1);
        }
    }

    #[test]
    fn test_reverse_and_orientation_applied() {
        let sheet = compute_scores(&AnswerSet::uniform(Likert::new(2).unwrap()));

        // q9: E (negative pole of FE), reverse scored
        let q9 = &sheet.responses[8];
        assert_eq!(q9.raw, 2);
        assert_eq!(q9.adjusted, -2);
        assert_eq!(q9.axis, Axis::FE);
        assert_eq!(q9.orientation, -1);
        assert_eq!(q9.weighted, 2);

        // q15: R (positive pole of RQ), direct
        let q15 = &sheet.responses[14];
        assert_eq!(q15.adjusted, 2);
        assert_eq!(q15.orientation, 1);
        assert_eq!(q15.weighted, 2);
    }

    #[test]
    fn test_axis_score_is_sum_of_signed_answers() {
        let answers = AnswerSet::from_fn(|q| Likert::new(i64::from(q.id % 7) - 3).unwrap());
        let sheet = compute_scores(&answers);
        for axis in AXIS_SEQUENCE {
            let expected: i32 = answers
                .iter()
                .filter(|(q, _)| q.axis() == axis)
                .map(|(q, v)| q.sign() * i32::from(v.value()))
                .sum();
            assert_eq!(sheet.axis_scores.get(axis), expected, "axis {}", axis);
        }
    }

    #[test]
    fn test_compute_scores_is_deterministic() {
        let answers = AnswerSet::from_fn(|q| Likert::new(i64::from(q.id % 5) - 2).unwrap());
        let first = compute_scores(&answers);
        for _ in 0..3 {
            assert_eq!(compute_scores(&answers), first);
        }
    }

    #[test]
    fn test_extreme_scores_bounded() {
        let answers = AnswerSet::from_fn(|q| Likert::new(i64::from(3 * q.sign())).unwrap());
        let sheet = compute_scores(&answers);
        for axis in AXIS_SEQUENCE {
            assert_eq!(sheet.axis_scores.get(axis), 21);
        }
    }

    #[test]
    fn test_axis_scores_serialize_as_map() {
        let json = serde_json::to_string(&AxisScores::new(3, 1, -1, 1)).unwrap();
        assert_eq!(json, r#"{"RQ":3,"PC":1,"FE":-1,"AV":1}"#);
    }
}
