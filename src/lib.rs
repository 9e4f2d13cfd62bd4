pub mod browser;
pub mod config;
pub mod i18n;
pub mod output;
pub mod persona;
pub mod questionnaire;
pub mod report;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
