use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::i18n::{self, likert_label};
use crate::output::{axis_bar, format_axis_score};
use crate::questionnaire::{QUESTIONS, QUESTION_COUNT};
use crate::scoring::Likert;
use crate::tui::app::{App, FlashKind, InputMode, Screen};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    match app.screen {
        Screen::Quiz => {
            // Layout: Title(1) + Questions(fill) + Selector(6) + Status(1)
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(area);

            render_title(frame, chunks[0], app);
            render_question_table(frame, chunks[1], app);
            render_selector(frame, chunks[2], app);
            render_status_bar(frame, chunks[3], app);
        }
        Screen::Result => {
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

            render_title(frame, chunks[0], app);
            render_result(frame, chunks[1], app);
            render_status_bar(frame, chunks[2], app);
        }
    }

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let text = i18n::text(app.language);
    let left = format!("DevSpectrum · {}", text.quiz.title);
    let right = format!(
        "{}  {}",
        app.language.label(),
        text.quiz
            .progress
            .replace("{answered}", &app.answered_count().to_string())
            .replace("{total}", &QUESTION_COUNT.to_string())
    );

    let padding_len = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count() + 2);
    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_question_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let text = i18n::text(app.language);

    let rows: Vec<Row> = QUESTIONS
        .iter()
        .zip(app.answers.iter())
        .enumerate()
        .map(|(idx, (question, answer))| {
            let marker = if question.reverse { "🔁" } else { "" };
            let answer_cell = match answer {
                Some(value) => Cell::from(format_answer(*value, app.language)),
                None => Cell::from(text.quiz.unanswered)
                    .style(Style::default().fg(theme.unanswered).italic()),
            };

            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(format!("{}.", question.id)).style(Style::default().fg(theme.index_color)),
                Cell::from(Line::from(vec![
                    Span::styled(
                        format!("[{}]", question.dimension),
                        Style::default().fg(theme.dimension_color),
                    ),
                    Span::styled(marker, Style::default().fg(theme.reverse_marker)),
                ])),
                Cell::from(question.prompt(app.language)),
                answer_cell,
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),  // "28."
        Constraint::Length(6),  // "[R]🔁"
        Constraint::Fill(1),    // Prompt
        Constraint::Length(22), // "+3 Strongly Agree"
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec![
                "#",
                "",
                text.quiz.hero_tagline,
                text.result.answer_label,
            ])
            .style(theme.header_style)
            .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// "+1 Slightly Agree"
fn format_answer(value: Likert, language: i18n::Language) -> String {
    let label = likert_label(value.value(), language).unwrap_or_default();
    format!("{:+} {}", value.value(), label)
}

/// The 7-point scale for the highlighted question
fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = i18n::text(app.language);
    let question = &QUESTIONS[app.selected_index()];

    let direction = if question.reverse {
        text.quiz.reverse_scoring
    } else {
        text.quiz.direct_scoring
    };
    let title = format!(" Q{} · [{}] · {} ", question.id, question.dimension, direction);
    let block = Block::bordered()
        .title(Span::styled(title, theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

    let prompt = Paragraph::new(question.prompt(app.language))
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[0]);

    let selected = app.selected_answer();
    let mut spans = Vec::new();
    for point in Likert::scale() {
        let style = if Some(point) == selected {
            theme.scale_selected
        } else {
            theme.scale_idle
        };
        spans.push(Span::styled(format!(" {:+} ", point.value()), style));
        spans.push(Span::raw(" "));
    }
    if let Some(label) = selected.and_then(|v| likert_label(v.value(), app.language)) {
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(theme.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn render_result(frame: &mut Frame, area: Rect, app: &mut App) {
    let lines = match &app.report {
        Some(report) => result_lines(report, app.language, &app.theme),
        None => vec![Line::from(i18n::text(app.language).errors.incomplete_export)],
    };

    app.result_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    if app.result_scroll >= app.result_lines {
        app.result_scroll = app.result_lines.saturating_sub(1);
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn result_lines(
    report: &crate::report::ProfileReport,
    language: i18n::Language,
    theme: &ThemeColors,
) -> Vec<Line<'static>> {
    let text = i18n::text(language);
    let result = &text.result;
    let muted = Style::default().fg(theme.muted);
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::raw(format!("{}: ", result.profile_label)),
        Span::styled(report.code.to_string(), theme.code_style),
    ]));
    match report.persona_title {
        Some(title) => lines.push(Line::from(vec![
            Span::raw(format!("{}: ", result.persona_label)),
            Span::styled(title, Style::default().bold()),
        ])),
        None => lines.push(Line::styled(result.no_persona, muted)),
    }

    if let Some(content) = &report.persona_content {
        if let Some(tagline) = &content.tagline {
            let heading = content.tagline_heading.clone().unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", heading), theme.section_heading),
                Span::styled(tagline.clone(), Style::default().italic()),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(result.lede, muted));
    lines.push(Line::default());
    lines.push(Line::styled(result.axis_breakdown, Style::default().bold()));

    for entry in &report.breakdown {
        lines.push(Line::default());
        lines.push(Line::styled(entry.title, Style::default().underlined()));
        let mut spans = vec![Span::raw(format!("  {} ", entry.positive_label))];
        spans.extend(bar_spans(entry.score, theme));
        spans.push(Span::raw(format!(" {}", entry.negative_label)));
        lines.push(Line::from(spans));
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", result.score_label), muted),
            Span::styled(format_axis_score(entry.score), Style::default().bold()),
            Span::styled(format!("  {} ", result.favours_label), muted),
            Span::raw(entry.selected_label.clone()),
        ]));
    }

    if let Some(content) = &report.persona_content {
        for section in &content.sections {
            lines.push(Line::default());
            lines.push(Line::styled(section.heading.clone(), theme.section_heading));
            for paragraph in &section.paragraphs {
                lines.push(Line::raw(format!("  {}", paragraph)));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(result.answer_review, Style::default().bold()));
    for response in &report.responses {
        let question = response.question;
        let marker = if question.reverse { " 🔁" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("Q{} ", question.id), Style::default().fg(theme.index_color)),
            Span::styled(
                format!("[{}]", question.dimension),
                Style::default().fg(theme.dimension_color),
            ),
            Span::styled(marker, Style::default().fg(theme.reverse_marker)),
            Span::raw(format!(" {}", question.prompt(language))),
        ]));
        lines.push(Line::styled(
            format!(
                "    {}: {:+}  {}: {:+}  {}: {:+}",
                result.answer_label,
                response.raw,
                result.adjusted_label,
                response.adjusted,
                result.contribution_label,
                response.weighted
            ),
            muted,
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled(result.reverse_hint, muted));

    lines
}

/// Color the plain-text axis bar: filled cells in the pole's color, growing
/// outward from the center mark
fn bar_spans(score: i32, theme: &ThemeColors) -> Vec<Span<'static>> {
    let bar = axis_bar(score);
    let (left, right) = bar.split_once('|').unwrap_or((bar.as_str(), ""));
    let count = |part: &str| {
        let filled = part.chars().filter(|c| *c == '█').count();
        (filled, part.chars().count() - filled)
    };
    let empty_style = Style::default().fg(theme.bar_empty);

    let (left_filled, left_empty) = count(left);
    let (right_filled, right_empty) = count(right);

    vec![
        Span::styled("░".repeat(left_empty), empty_style),
        Span::styled("█".repeat(left_filled), Style::default().fg(theme.bar_positive)),
        Span::styled("|", Style::default().fg(theme.muted)),
        Span::styled("█".repeat(right_filled), Style::default().fg(theme.bar_negative)),
        Span::styled("░".repeat(right_empty), empty_style),
    ]
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme.flash_success,
            FlashKind::Error => theme.flash_error,
            FlashKind::Info => theme.flash_info,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.screen {
            Screen::Quiz => &[
                ("j/k", ":nav "),
                ("h/l 1-7", ":answer "),
                ("Enter", ":submit "),
                ("L", ":lang "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Screen::Result => &[
                ("j/k", ":scroll "),
                ("e", ":export "),
                ("b", ":back "),
                ("n", ":start over "),
                ("L", ":lang "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let entries: &[(&str, &str)] = match app.screen {
        Screen::Quiz => &[
            ("j / Down      ", "Next question"),
            ("k / Up        ", "Previous question"),
            ("h / Left      ", "Less agreement"),
            ("l / Right     ", "More agreement"),
            ("1-7           ", "Answer -3 .. +3"),
            ("Enter         ", "Submit answers"),
            ("L             ", "Switch language"),
            ("?             ", "Show/hide this help"),
            ("q / Ctrl-c    ", "Quit"),
        ],
        Screen::Result => &[
            ("j / Down      ", "Scroll down"),
            ("k / Up        ", "Scroll up"),
            ("e             ", "Export report"),
            ("b             ", "Back to answers"),
            ("n             ", "Start over"),
            ("L             ", "Switch language"),
            ("?             ", "Show/hide this help"),
            ("q / Ctrl-c    ", "Quit"),
        ],
    };

    let height = u16::try_from(entries.len()).unwrap_or(10) + 4;
    let popup_area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(*key, Style::default().fg(theme.status_key_color).bold()),
                Span::raw(*action),
            ])
        })
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(40, 10, area);
        assert_eq!(rect, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamped() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(40, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn test_format_answer() {
        assert_eq!(format_answer(Likert::new(1).unwrap(), Language::En), "+1 Slightly Agree");
        assert_eq!(format_answer(Likert::new(-3).unwrap(), Language::Zh), "-3 非常反对");
        assert_eq!(format_answer(Likert::NEUTRAL, Language::En), "+0 Neutral");
    }

    #[test]
    fn test_bar_spans_cover_both_halves() {
        let theme = ThemeColors::dark();
        let width: usize = bar_spans(7, &theme)
            .iter()
            .map(|s| s.content.chars().count())
            .sum();
        assert_eq!(width, 21);
    }
}
