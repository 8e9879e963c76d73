//! Internationalization (i18n) for the site's English and Spanish text.
//!
//! # Architecture
//!
//! - `registry`: the supported languages and their metadata
//! - `language`: validated `Language` value and session-language detection
//! - `dictionary`: typed translation trees parsed from JSON
//! - `strings`: dictionaries bundled into the binary
//! - `resolver`: dotted-key lookup with default-language fallback
//! - `preference`: persisted language choice and per-session state
//! - `validator`: coverage checks of a translation against English
//! - `metrics`: lookup hit/fallback/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use change180::i18n::{Language, Translator};
//!
//! let translator = Translator::bundled()?;
//! let headline = translator.resolve_string(Language::SPANISH, "quiz.navigation.next");
//! let features = translator.resolve_array(Language::ENGLISH, "quiz.results.packageFeatures.rooted");
//! ```

mod dictionary;
mod language;
mod metrics;
mod preference;
mod registry;
mod resolver;
pub mod strings;
mod validator;

pub use dictionary::{Dictionary, TranslationNode};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use preference::{
    FileStore, LanguageSession, MemoryStore, PreferenceStore, LANGUAGE_PREFERENCE_KEY,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Translator;
pub use validator::{TranslationValidator, ValidationReport};
