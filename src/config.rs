use crate::i18n::{Language, Translator};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Site links
    pub booking_url: String,
    pub contact_email: String,
    pub site_url: String,

    // Localization
    pub default_language: Language,
    /// Directory holding `en.json` and `es.json`; the bundled copies are
    /// used when unset.
    pub locales_dir: Option<PathBuf>,

    // Persistence
    pub preferences_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            booking_url: "https://calendly.com/change180lifecoach".to_string(),
            contact_email: "change180lifecoach@gmail.com".to_string(),
            site_url: "change180.org".to_string(),
            default_language: Language::canonical(),
            locales_dir: None,
            preferences_file: PathBuf::from("data/preferences.json"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .context("DEFAULT_LANGUAGE is not an enabled language")?,
            Err(_) => defaults.default_language,
        };

        Ok(Self {
            // Site links
            booking_url: std::env::var("BOOKING_URL").unwrap_or(defaults.booking_url),
            contact_email: std::env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            site_url: std::env::var("SITE_URL").unwrap_or(defaults.site_url),

            // Localization
            default_language,
            locales_dir: std::env::var("LOCALES_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),

            // Persistence
            preferences_file: std::env::var("PREFERENCES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_file),
        })
    }

    /// Translator over `locales_dir` if set, otherwise the bundled files.
    pub fn translator(&self) -> Result<Translator> {
        match &self.locales_dir {
            Some(dir) => Translator::from_dir(dir)
                .with_context(|| format!("Failed to load locales from {}", dir.display())),
            None => Translator::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "BOOKING_URL",
        "CONTACT_EMAIL",
        "SITE_URL",
        "DEFAULT_LANGUAGE",
        "LOCALES_DIR",
        "PREFERENCES_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.booking_url, "https://calendly.com/change180lifecoach");
        assert_eq!(config.contact_email, "change180lifecoach@gmail.com");
        assert_eq!(config.site_url, "change180.org");
        assert_eq!(config.default_language, Language::ENGLISH);
        assert!(config.locales_dir.is_none());
        assert_eq!(config.preferences_file, PathBuf::from("data/preferences.json"));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("BOOKING_URL", "https://example.com/book");
        std::env::set_var("DEFAULT_LANGUAGE", "es");
        std::env::set_var("LOCALES_DIR", "/srv/locales");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.booking_url, "https://example.com/book");
        assert_eq!(config.default_language, Language::SPANISH);
        assert_eq!(config.locales_dir, Some(PathBuf::from("/srv/locales")));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "fr");

        let err = Config::from_env().unwrap_err();
        clear_env();

        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_blank_locales_dir_means_bundled() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "  ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert!(config.locales_dir.is_none());
        assert!(config.translator().is_ok());
    }

    #[test]
    fn test_translator_from_missing_dir_fails() {
        let config = Config {
            locales_dir: Some(PathBuf::from("/nonexistent/locales")),
            ..Config::default()
        };
        assert!(config.translator().is_err());
    }
}
