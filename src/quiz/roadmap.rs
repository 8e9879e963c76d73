//! Localized presentation of a quiz result: the personalised message and
//! the downloadable plain-text growth roadmap.

use crate::config::Config;
use crate::i18n::{Language, Translator};
use crate::quiz::engine::{message_key, GENERAL_MESSAGE_SEGMENT};
use crate::quiz::packages::package_details;
use crate::quiz::types::QuizResult;
use tracing::debug;

const BRAND_NAME: &str = "Change 180 Life Coaching";

/// Resolve the result's personalised message.
///
/// When no language has text for the specific challenge key, the package's
/// `general` message is used instead.
pub fn personalized_message(translator: &Translator, language: Language, result: &QuizResult) -> String {
    if let Some(message) = translator.resolve_string_opt(language, &result.personalized_message_key) {
        return message;
    }

    let general = message_key(
        result.primary_recommendation.package_id,
        GENERAL_MESSAGE_SEGMENT,
    );
    debug!(
        "No message for {}, using {}",
        result.personalized_message_key, general
    );
    translator.resolve_string(language, &general)
}

/// `finding-peace-in-chaos` -> `Finding Peace In Chaos`
pub fn slug_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Download name for a visitor's roadmap.
pub fn roadmap_filename(first_name: &str) -> String {
    let name: String = first_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("Change180-Growth-Roadmap-{}.txt", name)
}

/// Render the plain-text growth roadmap for a completed quiz.
pub fn render_roadmap(
    translator: &Translator,
    config: &Config,
    language: Language,
    first_name: &str,
    result: &QuizResult,
) -> String {
    let t = |key: &str| translator.resolve_string(language, key);
    let primary = result.primary_recommendation;
    let package = package_details(primary.package_id);

    let title = t("quiz.results.roadmap.title");
    let features = translator
        .resolve_array(language, &package.features_key())
        .iter()
        .map(|feature| format!("• {}", feature))
        .collect::<Vec<String>>()
        .join("\n");

    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.chars().count())));
    out.push_str(&format!("{} {}!\n\n", t("quiz.results.greeting"), first_name.trim()));
    out.push_str(&format!(
        "{}: {}\n\n",
        t("quiz.results.roadmap.recommendation"),
        t(package.name_key)
    ));
    out.push_str(&format!(
        "{}: {}%\n\n",
        t("quiz.results.roadmap.matchScore"),
        primary.match_percentage
    ));
    out.push_str(&format!("{}\n\n", personalized_message(translator, language, result)));
    out.push_str(&format!("{}:\n{}\n\n", t("quiz.results.roadmap.whatYouGet"), features));
    out.push_str(&format!("{}: {}\n", t("quiz.results.price"), package.price));
    out.push_str(&format!(
        "{}: {}\n\n",
        t("quiz.results.duration"),
        t(package.duration_key)
    ));
    out.push_str(&format!(
        "{}:\n{}\n\n",
        t("quiz.results.roadmap.bookingPrompt"),
        config.booking_url
    ));
    out.push_str(&format!(
        "{}:\n{}\n\n",
        t("quiz.results.roadmap.contactPrompt"),
        config.contact_email
    ));
    out.push_str(&format!(
        "---\n{}\n{}\n{}",
        BRAND_NAME,
        t("quiz.results.roadmap.tagline"),
        config.site_url
    ));

    out
}
