use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ProfileReport;
use crate::i18n;

/// Replacements applied in ASCII mode. Multi-codepoint sequences come before
/// their parts.
const ASCII_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    ("\u{2026}", "..."),
    ("🧑\u{200d}💻", "[Engineer] "),
    ("💡", "[Idea] "),
    ("🏢", "[Industry] "),
    ("🌍", "[Trend] "),
    ("⚙\u{fe0f}", "[Challenge] "),
    ("🚀", "[Opportunity] "),
    ("📈", "[Growth] "),
    ("🌱", "[Development] "),
    ("✅", "[Tagline] "),
    ("🧮", "[Analytics] "),
    ("🏗\u{fe0f}", "[Backend] "),
    ("💻", "[Frontend] "),
    ("🎮", "[Game] "),
    ("🖥\u{fe0f}", "[Tech] "),
    ("🧭", "[Architect] "),
    ("🧪", "[Innovation] "),
    ("⛏\u{fe0f}", "[Miner] "),
    ("🎯", "[Target] "),
    ("📊", "[Data] "),
    ("🚦", "[Ops] "),
    ("🧠", "[Mindset] "),
    ("🤖", "[AI] "),
    ("🔁", "[Reverse] "),
    ("🌐", "[Global] "),
    ("🔧", "[Tool] "),
    ("📌", "[Point] "),
    ("🔗", "[Link] "),
    ("\u{fe0f}", ""),
    ("\u{20e3}", ""),
    ("™", "TM"),
];

const BULLET_PREFIXES: [&str; 3] = ["- ", "• ", "•\u{a0}"];

/// Replace typographic quotes, dashes and known emoji with ASCII stand-ins
pub fn sanitize_text(text: &str) -> String {
    ASCII_REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Render the report as a Markdown document.
///
/// With `ascii` set, every line goes through [`sanitize_text`].
pub fn render_markdown(report: &ProfileReport, ascii: bool) -> String {
    let t = &i18n::text(report.language).report;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", t.title));
    lines.push(String::new());
    lines.push(format!("**{}:** {}", t.profile_code, report.code));
    if let Some(title) = report.persona_title {
        lines.push(String::new());
        lines.push(format!("**{}:** {}", t.persona, title));
    }

    if let Some(content) = &report.persona_content {
        if let Some(tagline) = content.tagline.as_deref().filter(|s| !s.trim().is_empty()) {
            lines.push(String::new());
            match content.tagline_heading.as_deref().filter(|s| !s.is_empty()) {
                Some(heading) => lines.push(format!("> **{}** {}", heading, tagline)),
                None => lines.push(format!("> {}", tagline)),
            }
        }

        if !content.sections.is_empty() {
            lines.push(String::new());
            lines.push(format!("## {}", t.persona_sections));
            for section in &content.sections {
                lines.push(String::new());
                if !section.heading.is_empty() {
                    lines.push(format!("### {}", section.heading));
                    lines.push(String::new());
                }
                for paragraph in &section.paragraphs {
                    lines.push(bulleted(paragraph));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("## {}", t.axis_breakdown));
    lines.push(String::new());
    for entry in &report.breakdown {
        lines.push(format!(
            "- {}: {:.1} ({} {})",
            entry.title,
            f64::from(entry.score),
            t.favours,
            entry.selected_label
        ));
    }

    lines.push(String::new());
    lines.push(format!("## {}", t.answer_summary));
    for response in &report.responses {
        let question = response.question;
        lines.push(String::new());
        lines.push(format!(
            "**Q{}:** {}",
            question.id,
            question.prompt(report.language)
        ));
        lines.push(String::new());
        lines.push(
            t.answer_line
                .replace("{raw}", &response.raw.to_string())
                .replace("{adjusted}", &response.adjusted.to_string())
                .replace("{weighted}", &format!("{:.1}", f64::from(response.weighted))),
        );
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!(
        "_{}: {}_",
        t.generated,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    let mut document = lines.join("\n");
    document.push('\n');
    if ascii {
        sanitize_text(&document)
    } else {
        document
    }
}

/// Paragraphs that start with a bullet marker become Markdown list items
fn bulleted(paragraph: &str) -> String {
    for prefix in BULLET_PREFIXES {
        if let Some(rest) = paragraph.strip_prefix(prefix) {
            return format!("- {}", rest.trim_start());
        }
    }
    format!("{}\n", paragraph)
}

/// Where a report lands when no explicit output path is given
pub fn default_export_path(report: &ProfileReport, export_dir: Option<&Path>) -> PathBuf {
    let file_name = report.default_file_name();
    match export_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write the rendered report to `path` atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn export_report(report: &ProfileReport, path: &Path, ascii: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let document = render_markdown(report, ascii);

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(document.as_bytes())
        .context("Failed to write report")?;
    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::persona::ContentStore;
    use crate::report::build_report;
    use crate::scoring::{AnswerSet, Likert};
    use std::env;

    fn sample_report(language: Language, store: &ContentStore) -> ProfileReport {
        build_report(&AnswerSet::uniform(Likert::new(1).unwrap()), language, store)
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("“Hi” – it’s…"), "\"Hi\" - it's...");
        assert_eq!(sanitize_text("🚀 Launch"), "[Opportunity]  Launch");
        assert_eq!(sanitize_text("⚙️ Setup"), "[Challenge]  Setup");
        assert_eq!(sanitize_text("🧑‍💻 Dev"), "[Engineer]  Dev");
        assert_eq!(sanitize_text("Rust™"), "RustTM");
        assert_eq!(sanitize_text("plain"), "plain");
    }

    #[test]
    fn test_render_axis_and_answer_lines() {
        let report = sample_report(Language::En, &ContentStore::default());
        let doc = render_markdown(&report, false);

        assert!(doc.starts_with("# DevSpectrum Profile Report\n"));
        assert!(doc.contains("**Profile Code:** RPEA"));
        assert!(doc.contains("**Persona:** Algorithm Competitor"));
        assert!(doc.contains("- Familiar vs Exploration: -1.0 (favours E - Exploration)"));
        assert!(doc.contains("- Rapid vs Quality: 3.0 (favours R - Rapid)"));
        assert!(doc.contains("**Q1:** "));
        assert!(doc.contains("**Q28:** "));
        assert!(doc.contains("Answer 1 · Adjusted"));
    }

    #[test]
    fn test_render_omits_missing_persona_content() {
        let report = sample_report(Language::En, &ContentStore::default());
        let doc = render_markdown(&report, false);
        assert!(!doc.contains("## Persona Insights"));
        assert!(!doc.contains("> "));
    }

    #[test]
    fn test_render_includes_persona_content() {
        let report = sample_report(Language::En, &ContentStore::embedded());
        let doc = render_markdown(&report, false);
        assert!(doc.contains("You are a fast-thinking problem solver"));
        assert!(doc.contains("## Persona Insights"));
        assert!(doc.contains("### "));
    }

    #[test]
    fn test_render_localized() {
        let report = sample_report(Language::Zh, &ContentStore::default());
        let doc = render_markdown(&report, false);
        assert!(doc.starts_with("# DevSpectrum 画像报告"));
        assert!(doc.contains("(倾向 "));
        assert!(doc.contains("回答 1 · 调整值"));
    }

    #[test]
    fn test_ascii_mode_strips_decorations() {
        let report = sample_report(Language::En, &ContentStore::embedded());
        let doc = render_markdown(&report, true);
        assert!(!doc.contains('\u{2014}'));
        assert!(!doc.contains('\u{fe0f}'));
        assert!(!doc.contains('🚀'));
    }

    #[test]
    fn test_bullet_prefixes_normalized() {
        assert_eq!(bulleted("- one"), "- one");
        assert_eq!(bulleted("•  two"), "- two");
        assert_eq!(bulleted("•\u{a0}three"), "- three");
        assert_eq!(bulleted("prose"), "prose\n");
    }

    #[test]
    fn test_default_export_path() {
        let report = sample_report(Language::En, &ContentStore::default());
        assert_eq!(
            default_export_path(&report, None),
            PathBuf::from("DevSpectrum_RPEA.md")
        );
        assert_eq!(
            default_export_path(&report, Some(Path::new("/tmp/reports"))),
            PathBuf::from("/tmp/reports/DevSpectrum_RPEA.md")
        );
    }

    #[test]
    fn test_export_report_writes_file() {
        let dir = env::temp_dir().join("devspectrum_test_export");
        let _ = fs::remove_dir_all(&dir);
        let report = sample_report(Language::En, &ContentStore::default());
        let path = default_export_path(&report, Some(&dir));

        export_report(&report, &path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_markdown(&report, false));

        let _ = fs::remove_dir_all(&dir);
    }
}
