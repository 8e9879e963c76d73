//! Language preference persistence and the per-session language state.

use crate::i18n::Language;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Key under which the chosen language is stored.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// A small string key-value store, the role browser local storage plays
/// on the site.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk.
///
/// The file is created on first save; a missing file reads as empty. An
/// unreadable file is replaced on the next save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid preferences file {}", self.path.display()))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(e) => {
                warn!("Discarding unreadable preferences: {:#}", e);
                BTreeMap::new()
            }
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&values)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences {}", self.path.display()))?;
        Ok(())
    }
}

/// The language state of one interactive session.
///
/// Owns the store it persists to. Nothing else shares this state.
pub struct LanguageSession<S: PreferenceStore> {
    language: Language,
    store: S,
}

impl<S: PreferenceStore> LanguageSession<S> {
    /// Open a session: saved preference, then browser locale, then the
    /// default language. A store that cannot be read counts as having no
    /// saved preference.
    pub fn open(store: S, browser_locale: Option<&str>) -> Self {
        let saved = store.load(LANGUAGE_PREFERENCE_KEY).unwrap_or_else(|e| {
            warn!("Ignoring saved language preference: {:#}", e);
            None
        });
        let language = Language::detect(saved.as_deref(), browser_locale);

        debug!(
            "Session language {} (saved: {:?}, locale: {:?})",
            language, saved, browser_locale
        );
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist the choice.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store
            .save(LANGUAGE_PREFERENCE_KEY, language.code())
            .context("Failed to persist language preference")?;
        self.language = language;

        info!("Language changed to {}", language.name());
        Ok(())
    }

    /// Value for the document-level `lang` attribute.
    pub fn document_lang(&self) -> &'static str {
        self.language.code()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
