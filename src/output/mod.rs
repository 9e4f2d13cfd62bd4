pub mod formatter;

pub use formatter::{
    axis_bar, format_axis_score, format_persona_list, format_question_list, format_report_json,
    format_report_text, format_report_tsv, should_use_colors,
};
