//! Language type: a validated site language.
//!
//! The current language is never stored here. Whoever owns the session
//! (see [`crate::i18n::LanguageSession`]) holds a `Language` and passes it
//! to the translator explicitly.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A language that exists in the registry and is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The default language, used as the fallback for missing translations.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Pick a language from a browser locale tag such as `es-419`.
    ///
    /// Anything that doesn't start with a known non-default prefix maps to
    /// the default language.
    pub fn from_locale(locale: &str) -> Language {
        LanguageRegistry::get()
            .match_locale(locale)
            .map(|config| Language { code: config.code })
            .unwrap_or_else(Language::canonical)
    }

    /// Resolve the initial language of a session.
    ///
    /// Order: saved preference (only if it names an enabled language), then
    /// the browser locale prefix, then the default language.
    pub fn detect(saved: Option<&str>, locale: Option<&str>) -> Language {
        if let Some(language) = saved.and_then(|code| Language::from_code(code).ok()) {
            return language;
        }

        locale
            .map(Language::from_locale)
            .unwrap_or_else(Language::canonical)
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which can't happen
    /// for values built through `from_code`, `detect` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(serde::de::Error::custom)
    }
}
