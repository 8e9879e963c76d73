//! Translation resolver.
//!
//! Resolves dotted keys against per-language dictionaries with a fallback to
//! the default language. Both operations are total: a missing string
//! degrades to the key itself, a missing list degrades to an empty list.

use crate::i18n::{strings, Dictionary, Language, TranslationMetrics, TranslationNode};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Immutable set of dictionaries plus the lookup rules.
///
/// Holds no notion of a "current" language; every call names one.
pub struct Translator {
    dictionaries: HashMap<Language, Dictionary>,
    metrics: &'static TranslationMetrics,
}

impl Translator {
    /// Build a translator from the English (authoritative) and Spanish
    /// dictionaries.
    pub fn new(english: Dictionary, spanish: Dictionary) -> Self {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(Language::ENGLISH, english);
        dictionaries.insert(Language::SPANISH, spanish);

        Self {
            dictionaries,
            metrics: TranslationMetrics::global(),
        }
    }

    /// Translator over the dictionaries compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            strings::bundled_dictionary(Language::ENGLISH)?,
            strings::bundled_dictionary(Language::SPANISH)?,
        ))
    }

    /// Translator over `en.json` and `es.json` in a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let english = Dictionary::from_file(&dir.join("en.json"))
            .context("Failed to load English dictionary")?;
        let spanish = Dictionary::from_file(&dir.join("es.json"))
            .context("Failed to load Spanish dictionary")?;

        debug!("Loaded dictionaries from {}", dir.display());
        Ok(Self::new(english, spanish))
    }

    /// Record lookups into the given counters instead of the global ones.
    pub fn with_metrics(mut self, metrics: &'static TranslationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Resolve a string, returning the key unchanged when nothing matches.
    pub fn resolve_string(&self, language: Language, key: &str) -> String {
        match self.resolve_string_opt(language, key) {
            Some(text) => text,
            None => {
                self.metrics.record_miss();
                warn!("Translation not found for key: {}", key);
                key.to_string()
            }
        }
    }

    /// Resolve a string without degrading to the key.
    ///
    /// Used by callers that have their own fallback key to try. A `None`
    /// is not counted as a miss; the caller's final lookup decides that.
    pub fn resolve_string_opt(&self, language: Language, key: &str) -> Option<String> {
        self.resolve_with(language, key, TranslationNode::as_text)
            .map(str::to_string)
    }

    /// Resolve a list of strings, returning an empty list when nothing
    /// matches.
    pub fn resolve_array(&self, language: Language, key: &str) -> Vec<String> {
        match self.resolve_with(language, key, TranslationNode::as_list) {
            Some(items) => items.to_vec(),
            None => {
                self.metrics.record_miss();
                warn!("Translation array not found for key: {}", key);
                Vec::new()
            }
        }
    }

    /// Shared fallback chain: requested language, then the default language
    /// when they differ. `pick` decides which node kind counts as a hit.
    /// Hits are counted here, misses by the public callers.
    fn resolve_with<'a, T: ?Sized>(
        &'a self,
        language: Language,
        key: &str,
        pick: impl Fn(&'a TranslationNode) -> Option<&'a T>,
    ) -> Option<&'a T> {
        if let Some(value) = self.lookup(language, key).and_then(&pick) {
            self.metrics.record_direct_hit();
            return Some(value);
        }

        let default = Language::canonical();
        if language != default {
            if let Some(value) = self.lookup(default, key).and_then(&pick) {
                debug!(
                    "Key {} missing in {}, using {}",
                    key,
                    language.code(),
                    default.code()
                );
                self.metrics.record_fallback_hit();
                return Some(value);
            }
        }

        None
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&TranslationNode> {
        self.dictionaries.get(&language)?.lookup(key)
    }
}
