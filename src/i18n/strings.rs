//! Dictionaries bundled into the binary.
//!
//! English is authoritative. Spanish may lag behind; missing Spanish keys
//! resolve through the English fallback.

use crate::i18n::{Dictionary, Language};
use anyhow::{Context, Result};

/// English dictionary source (canonical)
pub const ENGLISH_JSON: &str = include_str!("../../locales/en.json");

/// Spanish dictionary source
pub const SPANISH_JSON: &str = include_str!("../../locales/es.json");

/// Raw bundled JSON for a language.
pub fn bundled_json(language: Language) -> &'static str {
    match language.code() {
        "es" => SPANISH_JSON,
        _ => ENGLISH_JSON,
    }
}

/// Parse the bundled dictionary for a language.
pub fn bundled_dictionary(language: Language) -> Result<Dictionary> {
    Dictionary::from_json(bundled_json(language))
        .with_context(|| format!("Bundled {} dictionary is invalid", language.name()))
}
