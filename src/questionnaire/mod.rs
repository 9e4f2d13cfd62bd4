pub mod axis;
pub mod questions;

pub use axis::{Axis, Letter, AXIS_SEQUENCE};
pub use questions::{question, Question, QUESTIONS, QUESTION_COUNT};
