//! Translation coverage check - validates every translation against English
//!
//! Usage:
//!   cargo run --bin check-translations
//!   LOCALES_DIR=locales cargo run --bin check-translations
//!
//! Exits non-zero when any translation has errors. Warnings (missing keys
//! that fall back to English, placeholder mismatches) are printed but do
//! not fail the check.

use anyhow::{Context, Result};
use change180::config::Config;
use change180::i18n::{Language, LanguageRegistry, TranslationValidator};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("change180=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let translator = config.translator()?;
    let canonical = Language::canonical();
    let english = translator
        .dictionary(canonical)
        .context("No dictionary for the default language")?;

    info!("Checking translations against {}", canonical.name());

    let mut failed = false;
    for language_config in LanguageRegistry::get().list_enabled() {
        if language_config.is_canonical {
            continue;
        }

        let language = Language::from_code(language_config.code)?;
        let dictionary = translator
            .dictionary(language)
            .with_context(|| format!("No dictionary for {}", language.name()))?;

        let report = TranslationValidator::validate(english, dictionary);

        println!("\n========== {} ({}) ==========", language.name(), language.code());
        for error in &report.errors {
            println!("ERROR   {}", error);
        }
        for warning in &report.warnings {
            println!("WARNING {}", warning);
        }
        if report.is_clean() {
            println!("OK");
        }
        println!(
            "{} errors, {} warnings",
            report.errors.len(),
            report.warnings.len()
        );

        failed |= report.has_errors();
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
