use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use devspectrum::i18n::{self, resolve_language, Language};
use devspectrum::scoring::{issue_lines, validate_answers, AnswerSet, RawAnswers};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_ANSWERS: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the questionnaire interactively (default if no subcommand)
    Quiz,
    /// List the questions with their dimension and scoring direction
    Questions,
    /// Score an answer file and print the profile
    Score {
        /// YAML or JSON answer file (`q1: 2` ...), `-` for stdin. Repeat to merge files.
        #[arg(short, long)]
        answers: Vec<PathBuf>,

        /// Override one answer, e.g. `--set q3=-2`
        #[arg(long = "set", value_name = "qN=VALUE")]
        set: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Score an answer file and write a Markdown report
    Export {
        /// YAML or JSON answer file, `-` for stdin. Repeat to merge files.
        #[arg(short, long)]
        answers: Vec<PathBuf>,

        /// Override one answer, e.g. `--set q3=-2`
        #[arg(long = "set", value_name = "qN=VALUE")]
        set: Vec<String>,

        /// Output path (defaults to DevSpectrum_{CODE}.md in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace typographic punctuation and emoji with ASCII
        #[arg(long)]
        ascii: bool,

        /// Open the report after writing it
        #[arg(long)]
        open: bool,
    },
    /// List the sixteen persona codes
    Personas,
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "devspectrum")]
#[command(about = "Developer persona questionnaire", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/devspectrum/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Interface language: zh or en
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Quiz);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = devspectrum::config::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_IO);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match devspectrum::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = devspectrum::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let language = match cli.lang.as_deref() {
        Some(code) => {
            let language = resolve_language(Some(code));
            if cli.verbose && language.code() != code.trim().to_lowercase() {
                eprintln!("Unknown language '{}', using {}", code, language);
            }
            language
        }
        None => config.language.unwrap_or_default(),
    };

    if cli.verbose {
        eprintln!("Language: {}", language);
        eprintln!("Theme: {}", config.theme);
        if let Some(ref dir) = config.export_dir {
            eprintln!("Export directory: {}", dir.display());
        }
    }

    let content = devspectrum::persona::load_content_store(
        config.persona_content.as_deref(),
        cli.verbose,
    );

    let use_colors = devspectrum::output::should_use_colors();

    match command {
        Commands::Quiz => {
            let theme = devspectrum::tui::resolve_theme(config.theme);
            let app = devspectrum::tui::App::new(
                language,
                content,
                config.export_dir.clone(),
                theme,
                cli.verbose,
            );
            if let Err(e) = devspectrum::tui::run_tui(app).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Questions => {
            println!(
                "{}",
                devspectrum::output::format_question_list(language, use_colors)
            );
        }
        Commands::Personas => {
            println!(
                "{}",
                devspectrum::output::format_persona_list(language, use_colors)
            );
        }
        Commands::Score {
            answers,
            set,
            format,
        } => {
            let answer_set = answers_or_exit(&answers, &set, language, None, cli.verbose);

            let report = devspectrum::report::build_report(&answer_set, language, &content);
            match format {
                OutputFormat::Text => println!(
                    "{}",
                    devspectrum::output::format_report_text(&report, use_colors, cli.verbose)
                ),
                OutputFormat::Tsv => println!("{}", devspectrum::output::format_report_tsv(&report)),
                OutputFormat::Json => match devspectrum::output::format_report_json(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
            }
        }
        Commands::Export {
            answers,
            set,
            output,
            ascii,
            open,
        } => {
            let incomplete = i18n::text(language).errors.incomplete_export;
            let answer_set =
                answers_or_exit(&answers, &set, language, Some(incomplete), cli.verbose);

            let report = devspectrum::report::build_report(&answer_set, language, &content);
            let path = output.unwrap_or_else(|| {
                devspectrum::report::default_export_path(&report, config.export_dir.as_deref())
            });

            if let Err(e) = devspectrum::report::export_report(&report, &path, ascii) {
                eprintln!("Export failed: {:#}", e);
                std::process::exit(EXIT_IO);
            }

            println!(
                "{}",
                i18n::text(language)
                    .result
                    .exported
                    .replace("{path}", &path.display().to_string())
            );

            if open {
                if let Err(e) = devspectrum::browser::open_path(&path) {
                    eprintln!("Failed to open report: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            }
        }
        // Handled before config loading
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Merge answer files in order, apply `--set` overrides, then validate.
/// Unreadable files exit with EXIT_IO; bad or incomplete answers print every
/// problem and exit with EXIT_INVALID_ANSWERS. `headline` is printed before
/// the problems when given (export uses it for its incomplete-answers message).
fn answers_or_exit(
    files: &[PathBuf],
    sets: &[String],
    language: Language,
    headline: Option<&str>,
    verbose: bool,
) -> AnswerSet {
    let mut raw = RawAnswers::default();
    for file in files {
        match devspectrum::scoring::load_raw_answers(file) {
            Ok(loaded) => {
                if verbose {
                    eprintln!("Loaded {} answers from {}", loaded.len(), file.display());
                }
                raw.merge(loaded);
            }
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
    }

    for assignment in sets {
        if let Err(e) = raw.apply_assignment(assignment) {
            eprintln!("{}", e);
            std::process::exit(EXIT_INVALID_ANSWERS);
        }
    }

    match validate_answers(&raw) {
        Ok(answers) => answers,
        Err(issues) => {
            for line in issue_lines(&issues, language, headline) {
                eprintln!("{}", line);
            }
            std::process::exit(EXIT_INVALID_ANSWERS);
        }
    }
}
