//! Dictionary coverage validation.
//!
//! Compares a translated dictionary against the canonical (English) one.
//! English is authoritative, so a key that exists only in the translation
//! is an error, while a key missing from the translation is only a warning
//! because lookups fall back to English.

use crate::i18n::{Dictionary, TranslationNode};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break the fallback contract
    pub errors: Vec<String>,

    /// Gaps and mismatches that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated dictionaries.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check a translated dictionary against the canonical one.
    ///
    /// Errors:
    /// - a leaf only the translation has
    /// - a leaf whose kind (text/list) differs between the two
    ///
    /// Warnings:
    /// - a canonical leaf the translation lacks
    /// - a text whose `{placeholder}` set differs from the canonical text
    pub fn validate(canonical: &Dictionary, translation: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        let canonical_leaves: BTreeMap<String, &TranslationNode> =
            canonical.leaves().into_iter().collect();
        let translated_leaves: BTreeMap<String, &TranslationNode> =
            translation.leaves().into_iter().collect();

        for (key, translated) in &translated_leaves {
            match canonical_leaves.get(key) {
                None => report
                    .errors
                    .push(format!("Key {} has no canonical entry", key)),
                Some(original) if original.kind() != translated.kind() => {
                    report.errors.push(format!(
                        "Key {} is {} in canonical but {} in translation",
                        key,
                        original.kind(),
                        translated.kind()
                    ))
                }
                Some(original) => {
                    if let (Some(a), Some(b)) = (original.as_text(), translated.as_text()) {
                        let expected = Self::extract_placeholders(a);
                        let found = Self::extract_placeholders(b);
                        if expected != found {
                            report.warnings.push(format!(
                                "Placeholder mismatch in {}: canonical has {:?}, translation has {:?}",
                                key, expected, found
                            ));
                        }
                    }
                }
            }
        }

        for key in canonical_leaves.keys() {
            if !translated_leaves.contains_key(key) {
                report
                    .warnings
                    .push(format!("Key {} is missing and will fall back", key));
            }
        }

        report
    }

    /// Extract `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
