//! Quiz scoring engine.
//!
//! Pure functions from an answer list to a [`QuizResult`]. No I/O, no
//! clock, no randomness: the same answers always give the same result.

use crate::quiz::questions::{
    find_question, CHALLENGE_QUESTION_ID, MAX_SCORE_PER_QUESTION, QUESTION_COUNT,
};
use crate::quiz::types::{PackageId, PackageRecommendation, QuizAnswer, QuizResult, QuizScores};
use tracing::debug;

/// At most this many related posts are suggested.
pub const MAX_RELATED_SLUGS: usize = 2;

/// Message segment used when the challenge question was not answered.
pub const GENERAL_MESSAGE_SEGMENT: &str = "general";

/// Option id -> related blog post slugs.
const BLOG_MAPPING: &[(&str, &[&str])] = &[
    ("stress-overwhelm", &["finding-peace-in-chaos"]),
    ("parenting", &["supporting-your-childs-emotions"]),
    ("life-transition", &["embracing-new-beginnings"]),
    (
        "faith-spiritual",
        &["embracing-new-beginnings", "finding-peace-in-chaos"],
    ),
    ("relationships", &["supporting-your-childs-emotions"]),
    ("career-purpose", &["embracing-new-beginnings"]),
    ("healing-peace", &["finding-peace-in-chaos"]),
];

/// Sum the score vectors of every answered option.
///
/// Answers naming an unknown question or option are skipped. Duplicate
/// answers for one question are counted twice; keeping one answer per
/// question is the caller's job.
pub fn compute_scores(answers: &[QuizAnswer]) -> QuizScores {
    let mut scores = QuizScores::ZERO;

    for answer in answers {
        let Some(question) = find_question(&answer.question_id) else {
            debug!("Skipping answer to unknown question {}", answer.question_id);
            continue;
        };
        let Some(option) = question.option(&answer.option_id) else {
            debug!(
                "Skipping unknown option {} for {}",
                answer.option_id, answer.question_id
            );
            continue;
        };

        scores += option.scores;
    }

    scores
}

/// `round(score / (questions * 5) * 100)`, rounding halves up.
pub fn match_percentage(score: u32) -> u32 {
    let max_possible = (QUESTION_COUNT as u32 * MAX_SCORE_PER_QUESTION) as f64;
    ((score as f64 / max_possible) * 100.0).round() as u32
}

/// All five packages, best first.
///
/// The sort is stable, so equal scores keep canonical package order.
pub fn rank(scores: &QuizScores) -> [PackageRecommendation; 5] {
    let mut recommendations = PackageId::ALL.map(|package_id| {
        let score = scores.get(package_id);
        PackageRecommendation {
            package_id,
            score,
            match_percentage: match_percentage(score),
        }
    });

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations
}

/// Translation key of the personalised results message:
/// `quiz.results.messages.{package}.{challengeOptionId}`, with `general`
/// standing in for an unanswered challenge question.
///
/// Only builds the key. Whether it resolves is up to the caller.
pub fn personalized_message_key(primary: PackageId, answers: &[QuizAnswer]) -> String {
    let challenge = answers
        .iter()
        .find(|a| a.question_id == CHALLENGE_QUESTION_ID)
        .map(|a| a.option_id.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(GENERAL_MESSAGE_SEGMENT);

    message_key(primary, challenge)
}

/// `quiz.results.messages.{package}.{segment}`
pub fn message_key(package: PackageId, segment: &str) -> String {
    format!("quiz.results.messages.{}.{}", package.as_str(), segment)
}

/// Related blog posts for the chosen options, first-seen order, at most
/// [`MAX_RELATED_SLUGS`].
pub fn related_blog_slugs(answers: &[QuizAnswer]) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();

    for answer in answers {
        let mapped = BLOG_MAPPING
            .iter()
            .find(|(option_id, _)| *option_id == answer.option_id)
            .map(|(_, slugs)| *slugs)
            .unwrap_or(&[]);

        for slug in mapped {
            if !slugs.iter().any(|s| s == slug) {
                slugs.push(slug.to_string());
            }
        }
    }

    slugs.truncate(MAX_RELATED_SLUGS);
    slugs
}

/// Score, rank and annotate an answer list.
///
/// The secondary recommendation is present only when the runner-up scored
/// above zero.
pub fn build_result(answers: &[QuizAnswer]) -> QuizResult {
    let scores = compute_scores(answers);
    let [primary, secondary, ..] = rank(&scores);

    let result = QuizResult {
        primary_recommendation: primary,
        secondary_recommendation: (secondary.score > 0).then_some(secondary),
        scores,
        personalized_message_key: personalized_message_key(primary.package_id, answers),
        related_blog_slugs: related_blog_slugs(answers),
    };

    debug!(
        "Quiz result: {} ({}%) from {} answers",
        primary.package_id,
        primary.match_percentage,
        answers.len()
    );
    result
}
