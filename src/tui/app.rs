use ratatui::widgets::TableState;
use std::path::PathBuf;
use std::time::Instant;

use crate::buffered_eprintln;
use crate::i18n::{self, Language};
use crate::persona::ContentStore;
use crate::questionnaire::{QUESTIONS, QUESTION_COUNT};
use crate::report::{build_report, default_export_path, export_report, ProfileReport};
use crate::scoring::{validate_answers, AnswerIssue, AnswerSet, Likert, RawAnswers, RawValue};
use crate::tui::theme::ThemeColors;

/// Seconds a flash message stays in the status bar
const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Quiz,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

pub struct App {
    pub language: Language,
    pub answers: [Option<Likert>; QUESTION_COUNT],
    pub table_state: TableState,
    pub screen: Screen,
    pub input_mode: InputMode,
    /// The submitted answers, kept so the report can be rebuilt on language switch
    pub submitted: Option<AnswerSet>,
    pub report: Option<ProfileReport>,
    pub result_scroll: u16,
    /// Rendered line count of the result screen, updated on draw
    pub result_lines: u16,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub should_quit: bool,
    pub content: ContentStore,
    pub export_dir: Option<PathBuf>,
    pub theme: ThemeColors,
    pub verbose: bool,
}

impl App {
    pub fn new(
        language: Language,
        content: ContentStore,
        export_dir: Option<PathBuf>,
        theme: ThemeColors,
        verbose: bool,
    ) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            language,
            answers: [None; QUESTION_COUNT],
            table_state,
            screen: Screen::Quiz,
            input_mode: InputMode::Normal,
            submitted: None,
            report: None,
            result_scroll: 0,
            result_lines: 0,
            flash_message: None,
            should_quit: false,
            content,
            export_dir,
            theme,
            verbose,
        }
    }

    /// Index into `QUESTIONS` of the highlighted row
    pub fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0).min(QUESTION_COUNT - 1)
    }

    pub fn next_question(&mut self) {
        let i = self.selected_index();
        let next = if i >= QUESTION_COUNT - 1 { 0 } else { i + 1 };
        self.table_state.select(Some(next));
    }

    pub fn previous_question(&mut self) {
        let i = self.selected_index();
        let previous = if i == 0 { QUESTION_COUNT - 1 } else { i - 1 };
        self.table_state.select(Some(previous));
    }

    pub fn selected_answer(&self) -> Option<Likert> {
        self.answers[self.selected_index()]
    }

    /// Answer the highlighted question. Values outside -3..=3 are ignored.
    pub fn set_answer(&mut self, value: i64) {
        if let Some(likert) = Likert::new(value) {
            let i = self.selected_index();
            self.answers[i] = Some(likert);
        }
    }

    /// Map the number keys 1-7 onto -3..=3
    pub fn answer_from_key(&mut self, digit: char) {
        if let Some(d) = digit.to_digit(10).filter(|d| (1..=7).contains(d)) {
            self.set_answer(i64::from(d) - 4);
        }
    }

    /// Move the answer toward agreement. An unanswered question starts at neutral.
    pub fn increment_answer(&mut self) {
        let i = self.selected_index();
        self.answers[i] = Some(self.answers[i].unwrap_or_default().increment());
    }

    pub fn decrement_answer(&mut self) {
        let i = self.selected_index();
        self.answers[i] = Some(self.answers[i].unwrap_or_default().decrement());
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Answered questions only, keyed by field name
    pub fn raw_answers(&self) -> RawAnswers {
        let mut raw = RawAnswers::default();
        for (question, answer) in QUESTIONS.iter().zip(self.answers.iter()) {
            if let Some(value) = answer {
                raw.insert(question.field_name(), RawValue::Int(i64::from(value.value())));
            }
        }
        raw
    }

    /// Validate and score. Missing answers keep the quiz open and move the
    /// cursor to the first unanswered question.
    pub fn submit(&mut self) {
        match validate_answers(&self.raw_answers()) {
            Ok(answers) => {
                self.report = Some(build_report(&answers, self.language, &self.content));
                self.submitted = Some(answers);
                self.screen = Screen::Result;
                self.result_scroll = 0;
            }
            Err(issues) => {
                if let Some(AnswerIssue::Missing(ids)) = issues.first() {
                    if let Some(first) = ids.first() {
                        self.table_state.select(Some(usize::from(*first) - 1));
                    }
                }
                let message = issues
                    .first()
                    .map(|issue| issue.localized(self.language))
                    .unwrap_or_default();
                self.show_flash(message, FlashKind::Error);
            }
        }
    }

    /// Switch between Chinese and English, rebuilding the report if one is shown
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        if let Some(answers) = &self.submitted {
            self.report = Some(build_report(answers, self.language, &self.content));
        }
        let message = i18n::text(self.language)
            .language_switched
            .replace("{language}", self.language.label());
        self.show_flash(message, FlashKind::Info);
    }

    /// Export the current report to the configured directory
    pub fn export(&mut self) {
        let Some(report) = &self.report else {
            let message = i18n::text(self.language).errors.incomplete_export.to_string();
            self.show_flash(message, FlashKind::Error);
            return;
        };

        let path = default_export_path(report, self.export_dir.as_deref());
        match export_report(report, &path, false) {
            Ok(()) => {
                if self.verbose {
                    buffered_eprintln!("Exported {} report to {}", report.code, path.display());
                }
                let message = i18n::text(self.language)
                    .result
                    .exported
                    .replace("{path}", &path.display().to_string());
                self.show_flash(message, FlashKind::Success);
            }
            Err(e) => {
                if self.verbose {
                    buffered_eprintln!("Export to {} failed: {:#}", path.display(), e);
                }
                self.show_flash(format!("Failed to export: {:#}", e), FlashKind::Error)
            }
        }
    }

    /// Return to the quiz with every answer kept
    pub fn back_to_quiz(&mut self) {
        self.screen = Screen::Quiz;
    }

    /// Clear all answers and the result
    pub fn start_over(&mut self) {
        self.answers = [None; QUESTION_COUNT];
        self.submitted = None;
        self.report = None;
        self.result_scroll = 0;
        self.screen = Screen::Quiz;
        self.table_state.select(Some(0));
    }

    pub fn scroll_down(&mut self) {
        if self.result_scroll + 1 < self.result_lines {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn test_app() -> App {
        App::new(
            Language::En,
            ContentStore::default(),
            None,
            ThemeColors::dark(),
            false,
        )
    }

    fn answer_all(app: &mut App, key: char) {
        for _ in 0..QUESTION_COUNT {
            app.answer_from_key(key);
            app.next_question();
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = test_app();
        app.previous_question();
        assert_eq!(app.selected_index(), QUESTION_COUNT - 1);
        app.next_question();
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_number_keys_map_to_scale() {
        let mut app = test_app();
        app.answer_from_key('1');
        assert_eq!(app.selected_answer(), Likert::new(-3));
        app.answer_from_key('4');
        assert_eq!(app.selected_answer(), Likert::new(0));
        app.answer_from_key('7');
        assert_eq!(app.selected_answer(), Likert::new(3));
        app.answer_from_key('8');
        assert_eq!(app.selected_answer(), Likert::new(3));
    }

    #[test]
    fn test_increment_from_unanswered() {
        let mut app = test_app();
        app.increment_answer();
        assert_eq!(app.selected_answer(), Likert::new(1));
        app.next_question();
        app.decrement_answer();
        app.decrement_answer();
        assert_eq!(app.selected_answer(), Likert::new(-2));
        assert_eq!(app.answered_count(), 2);
    }

    #[test]
    fn test_submit_with_missing_jumps_to_first_missing() {
        let mut app = test_app();
        answer_all(&mut app, '5');
        app.answers[16] = None;
        app.answers[20] = None;

        app.submit();

        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.selected_index(), 16);
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Error);
        assert!(msg.ends_with("Missing: 17, 21"));
        // answers are kept for retry
        assert_eq!(app.answered_count(), QUESTION_COUNT - 2);
    }

    #[test]
    fn test_submit_complete_shows_result() {
        let mut app = test_app();
        answer_all(&mut app, '5');
        app.submit();

        assert_eq!(app.screen, Screen::Result);
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.code.to_string(), "RPEA");
    }

    #[test]
    fn test_toggle_language_rebuilds_report() {
        let mut app = test_app();
        answer_all(&mut app, '5');
        app.submit();
        app.toggle_language();

        assert_eq!(app.language, Language::Zh);
        assert_eq!(app.report.as_ref().unwrap().persona_title, Some("算法竞赛人"));
    }

    #[test]
    fn test_language_flash_is_localized() {
        let mut app = test_app();
        app.toggle_language();
        assert_eq!(app.flash_message.clone().unwrap().0, "语言：中文");
        app.toggle_language();
        assert_eq!(app.flash_message.clone().unwrap().0, "Language: English");
    }

    #[test]
    fn test_back_keeps_answers_and_start_over_clears() {
        let mut app = test_app();
        answer_all(&mut app, '2');
        app.submit();
        app.back_to_quiz();
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.answered_count(), QUESTION_COUNT);

        app.start_over();
        assert_eq!(app.answered_count(), 0);
        assert!(app.report.is_none());
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_export_without_report_is_error() {
        let mut app = test_app();
        app.export();
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Error);
        assert_eq!(msg, "Unable to export report because answers are incomplete.");
    }

    #[test]
    fn test_export_writes_report() {
        let dir = env::temp_dir().join("devspectrum_test_tui_export");
        let _ = std::fs::remove_dir_all(&dir);

        let mut app = test_app();
        app.export_dir = Some(dir.clone());
        answer_all(&mut app, '4');
        app.submit();
        app.export();

        let (_, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Success);
        assert!(dir.join("DevSpectrum_RPFA.md").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_verbose_export_log_is_buffered() {
        let dir = env::temp_dir().join("devspectrum_test_tui_export_verbose");
        let _ = std::fs::remove_dir_all(&dir);

        let mut app = test_app();
        app.verbose = true;
        app.export_dir = Some(dir.clone());
        answer_all(&mut app, '5');
        app.submit();

        let _guard = crate::stderr_buffer::TEST_LOCK
            .lock()
            .unwrap_or_else(|p| p.into_inner());
        crate::stderr_buffer::activate();
        app.export();
        let held = crate::stderr_buffer::drain();

        let expected = format!(
            "Exported RPEA report to {}",
            dir.join("DevSpectrum_RPEA.md").display()
        );
        assert!(held.contains(&expected), "{:?}", held);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_scroll_bounded() {
        let mut app = test_app();
        app.result_lines = 2;
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.result_scroll, 1);
        app.scroll_up();
        app.scroll_up();
        assert_eq!(app.result_scroll, 0);
    }
}
