use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::i18n::{self, Language};
use crate::persona::PERSONAS;
use crate::questionnaire::QUESTIONS;
use crate::report::ProfileReport;

/// Cells on each side of the axis bar's center mark
const BAR_HALF_WIDTH: usize = 10;

/// Largest possible |axis score|: seven questions at ±3
const MAX_AXIS_SCORE: u32 = 21;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Axis score with one decimal, as shown everywhere scores are printed
pub fn format_axis_score(score: i32) -> String {
    format!("{:.1}", f64::from(score))
}

/// Diverging bar: positive scores fill toward the first trait (left),
/// negative scores toward the second (right).
pub fn axis_bar(score: i32) -> String {
    let filled = ((score.unsigned_abs().min(MAX_AXIS_SCORE) as usize) * BAR_HALF_WIDTH
        + (MAX_AXIS_SCORE as usize) / 2)
        / MAX_AXIS_SCORE as usize;
    let empty = BAR_HALF_WIDTH - filled;

    let (left, right) = if score >= 0 {
        (
            format!("{}{}", "░".repeat(empty), "█".repeat(filled)),
            "░".repeat(BAR_HALF_WIDTH),
        )
    } else {
        (
            "░".repeat(BAR_HALF_WIDTH),
            format!("{}{}", "█".repeat(filled), "░".repeat(empty)),
        )
    };
    format!("{}|{}", left, right)
}

/// List every question with its dimension and scoring direction.
/// Format: "{id}. [{letter}] {direction} {prompt}"
pub fn format_question_list(language: Language, use_colors: bool) -> String {
    let quiz = &i18n::text(language).quiz;
    let term_width = get_terminal_width();

    QUESTIONS
        .iter()
        .map(|q| {
            let index_str = format!("{:>2}.", q.id);
            let dimension = format!("[{}]", q.dimension);
            let direction = if q.reverse {
                quiz.reverse_scoring
            } else {
                quiz.direct_scoring
            };
            let fixed_width = index_str.len() + dimension.len() + direction.chars().count() + 3;
            let prompt = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(q.prompt(language), width - fixed_width)
                }
                Some(_) => truncate_text(q.prompt(language), 20),
                None => q.prompt(language).to_string(),
            };

            if use_colors {
                let direction = if q.reverse {
                    direction.yellow().to_string()
                } else {
                    direction.dimmed().to_string()
                };
                format!(
                    "{} {} {} {}",
                    index_str.dimmed(),
                    dimension.cyan(),
                    direction,
                    prompt
                )
            } else {
                format!("{} {} {} {}", index_str, dimension, direction, prompt)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List all sixteen persona codes with their localized titles
pub fn format_persona_list(language: Language, use_colors: bool) -> String {
    PERSONAS
        .iter()
        .map(|p| {
            if use_colors {
                format!("{}  {}", p.code.bold(), p.title(language))
            } else {
                format!("{}  {}", p.code, p.title(language))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a report for the terminal: code, persona, axis breakdown.
/// With `detailed`, each question's contribution follows.
pub fn format_report_text(report: &ProfileReport, use_colors: bool, detailed: bool) -> String {
    let text = i18n::text(report.language);
    let result = &text.result;
    let mut lines = Vec::new();

    let code = report.code.to_string();
    if use_colors {
        lines.push(format!("{}: {}", result.profile_label, code.bold().cyan()));
    } else {
        lines.push(format!("{}: {}", result.profile_label, code));
    }
    match report.persona_title {
        Some(title) => lines.push(format!("{}: {}", result.persona_label, title)),
        None => lines.push(result.no_persona.to_string()),
    }
    if let Some(tagline) = report
        .persona_content
        .as_ref()
        .and_then(|c| c.tagline.as_deref())
    {
        if use_colors {
            lines.push(tagline.italic().to_string());
        } else {
            lines.push(tagline.to_string());
        }
    }

    lines.push(String::new());
    lines.push(result.axis_breakdown.to_string());

    let label_width = report
        .breakdown
        .iter()
        .map(|e| e.positive_label.chars().count())
        .max()
        .unwrap_or(0);

    for entry in &report.breakdown {
        let score = format!("{:>5}", format_axis_score(entry.score));
        let bar = axis_bar(entry.score);
        let positive = format!("{:>width$}", entry.positive_label, width = label_width);
        if use_colors {
            let (positive, negative) = if entry.selected == entry.axis.positive() {
                (positive.bold().to_string(), entry.negative_label.dimmed().to_string())
            } else {
                (positive.dimmed().to_string(), entry.negative_label.bold().to_string())
            };
            lines.push(format!("  {} {} {}  {}", positive, bar, negative, score.bold()));
        } else {
            lines.push(format!(
                "  {} {} {}  {}",
                positive, bar, entry.negative_label, score
            ));
        }
    }

    if detailed {
        lines.push(String::new());
        lines.push(result.answer_review.to_string());
        for response in &report.responses {
            let q = response.question;
            let marker = if q.reverse { " 🔁" } else { "" };
            lines.push(format!(
                "  Q{:<2} [{}]{} {}: {:+}  {}: {:+}  {}: {:+}",
                q.id,
                q.dimension,
                marker,
                result.answer_label,
                response.raw,
                result.adjusted_label,
                response.adjusted,
                result.contribution_label,
                response.weighted
            ));
        }
        lines.push(String::new());
        lines.push(result.reverse_hint.to_string());
    }

    lines.join("\n")
}

/// Format a report as one tab-separated row for scripting
/// Columns: code, RQ, PC, FE, AV, persona title (no headers, no colors)
pub fn format_report_tsv(report: &ProfileReport) -> String {
    let mut fields = vec![report.code.to_string()];
    fields.extend(report.axis_scores.iter().map(|(_, score)| score.to_string()));
    fields.push(report.persona_title.unwrap_or_default().to_string());
    fields.join("\t")
}

/// Format a report as pretty-printed JSON
pub fn format_report_json(report: &ProfileReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::ContentStore;
    use crate::report::build_report;
    use crate::scoring::{AnswerSet, Likert};

    fn sample_report(language: Language) -> ProfileReport {
        build_report(
            &AnswerSet::uniform(Likert::new(1).unwrap()),
            language,
            &ContentStore::embedded(),
        )
    }

    #[test]
    fn test_format_axis_score() {
        assert_eq!(format_axis_score(3), "3.0");
        assert_eq!(format_axis_score(-1), "-1.0");
        assert_eq!(format_axis_score(0), "0.0");
    }

    #[test]
    fn test_axis_bar_neutral() {
        assert_eq!(axis_bar(0), format!("{}|{}", "░".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn test_axis_bar_extremes() {
        assert_eq!(axis_bar(21), format!("{}|{}", "█".repeat(10), "░".repeat(10)));
        assert_eq!(axis_bar(-21), format!("{}|{}", "░".repeat(10), "█".repeat(10)));
    }

    #[test]
    fn test_axis_bar_direction() {
        let positive = axis_bar(10);
        let (left, right) = positive.split_once('|').unwrap();
        assert!(left.ends_with('█'));
        assert!(!right.contains('█'));

        let negative = axis_bar(-10);
        let (left, right) = negative.split_once('|').unwrap();
        assert!(!left.contains('█'));
        assert!(right.starts_with('█'));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 20), "Short");
        assert_eq!(truncate_text("This is a very long title", 15), "This is a ve...");
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_question_list() {
        let result = format_question_list(Language::En, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 28);
        assert!(lines[0].starts_with(" 1. ["));
        assert!(lines[1].contains("Reverse scored"));
        assert!(lines[27].starts_with("28. "));
    }

    #[test]
    fn test_format_persona_list() {
        let result = format_persona_list(Language::En, false);
        assert_eq!(result.lines().count(), 16);
        assert!(result.contains("RPEA  Algorithm Competitor"));
    }

    #[test]
    fn test_format_report_text() {
        let result = format_report_text(&sample_report(Language::En), false, false);
        assert!(result.starts_with("Your Profile: RPEA"));
        assert!(result.contains("Persona: Algorithm Competitor"));
        assert!(result.contains("You are a fast-thinking problem solver"));
        assert!(result.contains("Axis Breakdown"));
        assert!(result.contains("E - Exploration   -1.0"));
        assert!(!result.contains("Answer Review"));
    }

    #[test]
    fn test_format_report_text_detailed() {
        let result = format_report_text(&sample_report(Language::En), false, true);
        assert!(result.contains("Answer Review"));
        assert!(result.contains("Q1 "));
        assert!(result.contains("Q28"));
        assert!(result.contains("🔁"));
    }

    #[test]
    fn test_format_report_tsv() {
        let result = format_report_tsv(&sample_report(Language::En));
        assert_eq!(result, "RPEA\t3\t1\t-1\t1\tAlgorithm Competitor");
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report_json(&sample_report(Language::Zh)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"], "RPEA");
        assert_eq!(value["persona_title"], "算法竞赛人");
        assert_eq!(value["axis_scores"]["FE"], -1);
    }
}
