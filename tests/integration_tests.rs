//! Integration tests for the change180 site core
//!
//! These tests exercise the public library API end to end: answering the
//! quiz, scoring, resolving the results in both languages, and the
//! translation tooling around it.

use change180::config::Config;
use change180::i18n::{
    Dictionary, FileStore, Language, LanguageSession, PreferenceStore, TranslationMetrics,
    TranslationValidator, Translator, LANGUAGE_PREFERENCE_KEY,
};
use change180::quiz::engine::{compute_scores, rank, MAX_RELATED_SLUGS};
use change180::quiz::{
    self, personalized_message, questions, render_roadmap, PackageId, QuizAnswer, QuizSession,
    QuizStep, ScoreVector,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Translator with its own counters, so parallel tests don't share them.
fn isolated_translator() -> (Translator, &'static TranslationMetrics) {
    let metrics: &'static TranslationMetrics = Box::leak(Box::new(TranslationMetrics::new()));
    let translator = Translator::bundled()
        .expect("bundled dictionaries parse")
        .with_metrics(metrics);
    (translator, metrics)
}

/// One answer per question, picking option `choices[i] % len` for question i.
fn answers_from_choices(choices: &[usize]) -> Vec<QuizAnswer> {
    questions()
        .iter()
        .zip(choices)
        .map(|(question, choice)| {
            let option = &question.options[choice % question.options.len()];
            QuizAnswer::new(question.id, option.id)
        })
        .collect()
}

// ==================== End-to-End Quiz Tests ====================

#[test]
fn test_exploring_alone_recommends_discovery() {
    let result = quiz::compute_result(&[QuizAnswer::new("q4-commitment", "exploring")]);

    assert_eq!(result.primary_recommendation.package_id, PackageId::Discovery);
    assert_eq!(result.primary_recommendation.score, 5);
    assert_eq!(result.primary_recommendation.match_percentage, 17);
    assert_eq!(
        result.personalized_message_key,
        "quiz.results.messages.discovery.general"
    );
}

#[test]
fn test_full_rooted_score_is_100_percent() {
    let top = rank(&ScoreVector::new(0, 0, 30, 0, 0))[0];
    assert_eq!(top.package_id, PackageId::Rooted);
    assert_eq!(top.match_percentage, 100);
}

#[test]
fn test_session_to_spanish_roadmap() {
    let (translator, metrics) = isolated_translator();
    let mut session = QuizSession::new();
    session.start();

    for option in [
        "empty-nester",
        "stress-overwhelm",
        "confidence",
        "ready-invest",
        "central",
        "crisis",
    ] {
        session.select_option(option);
        session.next();
    }
    assert_eq!(session.step(), QuizStep::Email);

    let completed_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let data = session
        .submit_contact("Lucía", "lucia@example.com", Language::SPANISH, completed_at)
        .expect("valid contact")
        .clone();

    assert_eq!(data.result.primary_recommendation.package_id, PackageId::Rooted);
    assert_eq!(data.result.primary_recommendation.match_percentage, 80);

    let roadmap = render_roadmap(
        &translator,
        &Config::default(),
        data.language,
        &data.first_name,
        &data.result,
    );
    assert!(roadmap.contains("Hola Lucía!"));
    assert!(roadmap.contains("$600"));
    assert_eq!(metrics.misses(), 0);
}

#[test]
fn test_result_json_shape() {
    let result = quiz::compute_result(&answers_from_choices(&[0, 0, 0, 0, 0, 0]));
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["primaryRecommendation"]["matchPercentage"].is_u64());
    assert!(json["scores"]["rooted"].is_u64());
    assert!(json["personalizedMessage"]
        .as_str()
        .unwrap()
        .starts_with("quiz.results.messages."));
    assert!(json["relatedBlogSlugs"].is_array());
}

// ==================== Translation Fallback Tests ====================

#[test]
fn test_spanish_direct_hit() {
    let (translator, metrics) = isolated_translator();

    assert_eq!(
        translator.resolve_string(Language::SPANISH, "quiz.navigation.next"),
        "Siguiente"
    );
    assert_eq!(metrics.direct_hits(), 1);
    assert_eq!(metrics.fallback_hits(), 0);
}

#[test]
fn test_spanish_gaps_fall_back_to_english() {
    let (translator, metrics) = isolated_translator();
    let english = translator.dictionary(Language::ENGLISH).unwrap();

    let key = "newsletter.confirmationMessage";
    assert_eq!(
        translator.resolve_string(Language::SPANISH, key),
        english.lookup(key).and_then(|node| node.as_text()).unwrap()
    );

    let features = translator.resolve_array(Language::SPANISH, "quiz.results.packageFeatures.family");
    assert_eq!(
        features,
        translator.resolve_array(Language::ENGLISH, "quiz.results.packageFeatures.family")
    );
    assert!(!features.is_empty());
    assert_eq!(metrics.fallback_hits(), 2);
}

#[test]
fn test_miss_in_both_languages() {
    let (translator, metrics) = isolated_translator();

    assert_eq!(
        translator.resolve_string(Language::SPANISH, "quiz.does.not.exist"),
        "quiz.does.not.exist"
    );
    assert!(translator
        .resolve_array(Language::ENGLISH, "quiz.does.not.exist")
        .is_empty());
    assert_eq!(metrics.misses(), 2);
}

#[test]
fn test_kind_mismatch_is_a_miss() {
    let (translator, _) = isolated_translator();

    // A list read as a string and a string read as a list both miss
    assert_eq!(
        translator.resolve_string(Language::ENGLISH, "quiz.results.packageFeatures.rooted"),
        "quiz.results.packageFeatures.rooted"
    );
    assert!(translator
        .resolve_array(Language::ENGLISH, "quiz.navigation.next")
        .is_empty());
}

#[test]
fn test_personalized_message_for_spanish_gap() {
    let (translator, _) = isolated_translator();
    let result = quiz::compute_result(&[
        QuizAnswer::new("q2-challenge", "career-purpose"),
        QuizAnswer::new("q3-goals", "clarity-direction"),
        QuizAnswer::new("q4-commitment", "ready-short"),
    ]);
    assert_eq!(result.primary_recommendation.package_id, PackageId::Clarity);

    let spanish = personalized_message(&translator, Language::SPANISH, &result);
    let english = personalized_message(&translator, Language::ENGLISH, &result);
    assert_eq!(spanish, english);
}

// ==================== Translation Tooling Tests ====================

#[test]
fn test_bundled_spanish_validates_without_errors() {
    let (translator, _) = isolated_translator();
    let report = TranslationValidator::validate(
        translator.dictionary(Language::ENGLISH).unwrap(),
        translator.dictionary(Language::SPANISH).unwrap(),
    );

    assert!(!report.has_errors(), "{:?}", report.errors);
    assert_eq!(
        report
            .warnings
            .iter()
            .filter(|w| w.contains("will fall back"))
            .count(),
        3
    );
}

#[test]
fn test_translator_from_locales_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("en.json"), r#"{"hero": {"headline": "Hello"}}"#).unwrap();
    std::fs::write(dir.path().join("es.json"), r#"{"hero": {}}"#).unwrap();

    let config = Config {
        locales_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let translator = config.translator().unwrap();

    assert_eq!(translator.resolve_string(Language::SPANISH, "hero.headline"), "Hello");
}

#[test]
fn test_translator_rejects_non_object_dictionary() {
    assert!(Dictionary::from_json(r#"["not", "an", "object"]"#).is_err());
}

// ==================== Language Preference Tests ====================

#[test]
fn test_language_choice_survives_new_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs").join("preferences.json");

    let mut session = LanguageSession::open(FileStore::new(&path), Some("en-US"));
    assert_eq!(session.language(), Language::ENGLISH);
    session.set_language(Language::SPANISH).unwrap();

    let reopened = LanguageSession::open(FileStore::new(&path), Some("en-US"));
    assert_eq!(reopened.language(), Language::SPANISH);
    assert_eq!(reopened.document_lang(), "es");
    assert_eq!(
        reopened.store().load(LANGUAGE_PREFERENCE_KEY).unwrap().as_deref(),
        Some("es")
    );
}

#[test]
fn test_invalid_saved_language_uses_locale() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let mut store = FileStore::new(&path);
    store.save(LANGUAGE_PREFERENCE_KEY, "fr").unwrap();

    let session = LanguageSession::open(store, Some("es-MX"));
    assert_eq!(session.language(), Language::SPANISH);
}

#[test]
fn test_truncated_preferences_file_is_recoverable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ truncated").unwrap();

    let mut session = LanguageSession::open(FileStore::new(&path), Some("es-MX"));
    assert_eq!(session.language(), Language::SPANISH);

    session.set_language(Language::ENGLISH).unwrap();
    let store = FileStore::new(&path);
    assert_eq!(
        store.load(LANGUAGE_PREFERENCE_KEY).unwrap().as_deref(),
        Some("en")
    );
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_scores_are_additive_over_disjoint_questions(
        choices in proptest::collection::vec(0usize..8, 6),
        split in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let answers = answers_from_choices(&choices);
        let (left, right): (Vec<_>, Vec<_>) = answers
            .iter()
            .cloned()
            .zip(split)
            .partition(|(_, side)| *side);
        let left: Vec<QuizAnswer> = left.into_iter().map(|(a, _)| a).collect();
        let right: Vec<QuizAnswer> = right.into_iter().map(|(a, _)| a).collect();

        prop_assert_eq!(
            compute_scores(&answers),
            compute_scores(&left) + compute_scores(&right)
        );
    }

    #[test]
    fn prop_match_percentage_within_bounds(choices in proptest::collection::vec(0usize..8, 0..=6)) {
        let result = quiz::compute_result(&answers_from_choices(&choices));
        for recommendation in rank(&result.scores) {
            prop_assert!(recommendation.match_percentage <= 100);
        }
        prop_assert!(result.primary_recommendation.score >= result
            .secondary_recommendation
            .map(|s| s.score)
            .unwrap_or(0));
    }

    #[test]
    fn prop_related_slugs_capped_and_unique(choices in proptest::collection::vec(0usize..8, 0..=6)) {
        let result = quiz::compute_result(&answers_from_choices(&choices));
        let slugs = &result.related_blog_slugs;

        prop_assert!(slugs.len() <= MAX_RELATED_SLUGS);
        if slugs.len() == 2 {
            prop_assert_ne!(&slugs[0], &slugs[1]);
        }
    }

    #[test]
    fn prop_compute_result_is_idempotent(choices in proptest::collection::vec(0usize..8, 0..=6)) {
        let answers = answers_from_choices(&choices);
        prop_assert_eq!(quiz::compute_result(&answers), quiz::compute_result(&answers));
    }

    #[test]
    fn prop_rank_ties_follow_canonical_order(
        weights in proptest::collection::vec(0u32..4, 5),
    ) {
        let scores = ScoreVector::new(weights[0], weights[1], weights[2], weights[3], weights[4]);
        let ranked = rank(&scores);
        let position = |id: PackageId| PackageId::ALL.iter().position(|p| *p == id).unwrap();

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(position(pair[0].package_id) < position(pair[1].package_id));
            }
        }
    }
}
