//! Color palettes for the quiz TUI

use ratatui::prelude::*;

use crate::config::ThemeChoice;

/// Terminal background luma above which the light palette is used
const LIGHT_BACKGROUND_LUMA: f32 = 0.6;

/// Complete color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // General colors
    pub title_color: Color,
    pub muted: Color,
    pub text: Color,

    // Question table
    pub header_style: Style,
    pub row_selected: Style,
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub dimension_color: Color,
    pub reverse_marker: Color,
    pub unanswered: Color,

    // Likert selector
    pub scale_selected: Style,
    pub scale_idle: Style,

    // Axis bars on the result screen
    pub bar_positive: Color,
    pub bar_negative: Color,
    pub bar_empty: Color,
    pub code_style: Style,
    pub section_heading: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_info: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            title_color: Color::Cyan,
            muted: Color::Gray,
            text: Color::White,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            dimension_color: Color::Cyan,
            reverse_marker: Color::Yellow,
            unanswered: Color::DarkGray,
            scale_selected: Style::new().fg(Color::Black).bg(Color::Cyan).bold(),
            scale_idle: Style::new().fg(Color::Gray),
            bar_positive: Color::Cyan,
            bar_negative: Color::Magenta,
            bar_empty: Color::DarkGray,
            code_style: Style::new().fg(Color::Cyan).bold(),
            section_heading: Style::new().fg(Color::Yellow).bold(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_info: Color::White,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            title_color: Color::Blue,
            muted: Color::DarkGray,
            text: Color::Black,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Gray,
            dimension_color: Color::Blue,
            reverse_marker: Color::Rgb(176, 96, 0),
            unanswered: Color::Gray,
            scale_selected: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            scale_idle: Style::new().fg(Color::DarkGray),
            bar_positive: Color::Blue,
            bar_negative: Color::Magenta,
            bar_empty: Color::Indexed(252),
            code_style: Style::new().fg(Color::Blue).bold(),
            section_heading: Style::new().fg(Color::Rgb(176, 96, 0)).bold(),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_info: Color::Black,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Red,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }
}

/// Pick the palette for a configured theme. `Auto` queries the terminal
/// background and falls back to dark when the terminal doesn't answer.
pub fn resolve_theme(choice: ThemeChoice) -> ThemeColors {
    match choice {
        ThemeChoice::Dark => ThemeColors::dark(),
        ThemeChoice::Light => ThemeColors::light(),
        ThemeChoice::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_BACKGROUND_LUMA => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
