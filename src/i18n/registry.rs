//! Language registry: the set of languages the site can render.
//!
//! Initialised once through `OnceLock` and read-only afterwards.

use std::sync::OnceLock;

/// Metadata for one supported site language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also used as the stored preference value and the
    /// document `lang` attribute (e.g. "en", "es")
    pub code: &'static str,

    /// English name (e.g. "Spanish")
    pub name: &'static str,

    /// Name shown in the language switcher (e.g. "Español")
    pub native_name: &'static str,

    /// Lowercase browser-locale prefix that selects this language
    pub locale_prefix: &'static str,

    /// Whether this is the authoritative/default language (exactly one)
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry, building it on first access.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: site_languages(),
        })
    }

    /// Look up a language by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Find the enabled, non-canonical language whose prefix starts the
    /// given browser locale tag (e.g. "es-MX").
    ///
    /// The canonical language is never returned here; callers fall back to
    /// it themselves.
    pub fn match_locale(&self, locale: &str) -> Option<&LanguageConfig> {
        let locale = locale.trim().to_lowercase();
        self.languages
            .iter()
            .filter(|lang| lang.enabled && !lang.is_canonical)
            .find(|lang| locale.starts_with(lang.locale_prefix))
    }

    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The canonical (default) language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one canonical
    /// language, which is a programming error in `site_languages`.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// English is authoritative; Spanish is the translated variant.
fn site_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale_prefix: "en",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            locale_prefix: "es",
            is_canonical: false,
            enabled: true,
        },
    ]
}
