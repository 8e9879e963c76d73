//! Quiz preview runner - scores a set of answers and prints the result
//!
//! Usage:
//!   cargo run -- q1-life-stage=single q2-challenge=career-purpose
//!   cargo run -- --lang es --name Ana q4-commitment=exploring   # also saves es as the preference
//!   cargo run -- --json q3-goals=healing-peace
//!
//! Optional environment variables: see `Config::from_env`.

use anyhow::{bail, Context, Result};
use change180::config::Config;
use change180::i18n::{FileStore, Language, LanguageSession, TranslationMetrics};
use change180::quiz::{self, roadmap_filename, render_roadmap, slug_title, QuizAnswer};
use tracing::{info, warn};

struct PreviewArgs {
    language: Option<Language>,
    first_name: String,
    json: bool,
    answers: Vec<QuizAnswer>,
}

fn parse_args(args: &[String]) -> Result<PreviewArgs> {
    let mut parsed = PreviewArgs {
        language: None,
        first_name: "Friend".to_string(),
        json: false,
        answers: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                let code = iter.next().context("--lang needs a language code")?;
                parsed.language = Some(Language::from_code(code)?);
            }
            "--name" => {
                parsed.first_name = iter.next().context("--name needs a value")?.clone();
            }
            "--json" => parsed.json = true,
            other => {
                let Some((question_id, option_id)) = other.split_once('=') else {
                    bail!("Expected questionId=optionId, got '{}'", other);
                };
                if quiz::find_question(question_id)
                    .and_then(|q| q.option(option_id))
                    .is_none()
                {
                    warn!("Unknown answer {}={}, it will not score", question_id, option_id);
                }
                quiz::session::upsert_answer(&mut parsed.answers, question_id, option_id);
            }
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("change180=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let preview = parse_args(&args)?;
    let translator = config.translator()?;

    // DEFAULT_LANGUAGE stands in for the browser locale; a saved choice wins
    let mut session = LanguageSession::open(
        FileStore::new(&config.preferences_file),
        Some(config.default_language.code()),
    );
    if let Some(language) = preview.language {
        session.set_language(language)?;
    }
    let language = session.language();

    info!(
        "Scoring {} answers in {}",
        preview.answers.len(),
        language.name()
    );
    let result = quiz::compute_result(&preview.answers);

    if preview.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n========== {} ==========\n", roadmap_filename(&preview.first_name));
    println!(
        "{}",
        render_roadmap(&translator, &config, language, &preview.first_name, &result)
    );

    if !result.related_blog_slugs.is_empty() {
        println!(
            "\n{}:",
            translator.resolve_string(language, "quiz.results.relatedResources")
        );
        for slug in &result.related_blog_slugs {
            println!("  - {} (/blog/{})", slug_title(slug), slug);
        }
    }

    let report = TranslationMetrics::global().report();
    info!(
        "Translation lookups: {} direct, {} fallback, {} missing",
        report.direct_hits, report.fallback_hits, report.misses
    );
    Ok(())
}
