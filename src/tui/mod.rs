pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use app::{InputMode, Screen};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    if app.verbose {
        eprintln!(
            "Quit with {}/{} answers",
            app.answered_count(),
            crate::questionnaire::QUESTION_COUNT
        );
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.input_mode == InputMode::Help {
        // Any key exits help
        app.dismiss_help();
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('L') => {
            app.toggle_language();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help();
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Quiz => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.next_question(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_question(),
            KeyCode::Char('h') | KeyCode::Left => app.decrement_answer(),
            KeyCode::Char('l') | KeyCode::Right => app.increment_answer(),
            KeyCode::Char(c @ '1'..='7') => {
                app.answer_from_key(c);
                app.next_question();
            }
            KeyCode::Enter => app.submit(),
            _ => {}
        },
        Screen::Result => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
            KeyCode::Char('e') => app.export(),
            KeyCode::Char('b') | KeyCode::Esc => app.back_to_quiz(),
            KeyCode::Char('n') => app.start_over(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::persona::ContentStore;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app() -> App {
        App::new(
            Language::En,
            ContentStore::default(),
            None,
            ThemeColors::dark(),
            false,
        )
    }

    #[test]
    fn test_number_key_answers_and_advances() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.answers[0].map(|v| v.value()), Some(2));
        assert_eq!(app.selected_index(), 1);
    }

    #[test]
    fn test_full_quiz_by_keys() {
        let mut app = test_app();
        for _ in 0..crate::questionnaire::QUESTION_COUNT {
            press(&mut app, KeyCode::Char('5'));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Result);
        assert_eq!(app.report.as_ref().unwrap().code.to_string(), "RPEA");

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.screen, Screen::Quiz);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, InputMode::Help);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_language_toggle_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.language, Language::Zh);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
