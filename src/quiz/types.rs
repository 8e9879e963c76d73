//! Quiz data model.

use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// One of the five coaching packages the quiz can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Discovery,
    Clarity,
    Rooted,
    Flourish,
    Family,
}

impl PackageId {
    /// Canonical order. Ranking ties keep this order.
    pub const ALL: [PackageId; 5] = [
        PackageId::Discovery,
        PackageId::Clarity,
        PackageId::Rooted,
        PackageId::Flourish,
        PackageId::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Discovery => "discovery",
            PackageId::Clarity => "clarity",
            PackageId::Rooted => "rooted",
            PackageId::Flourish => "flourish",
            PackageId::Family => "family",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    LifeStage,
    Challenge,
    Goals,
    Commitment,
}

/// Per-package weights. Used both for an option's score vector and for the
/// summed quiz scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreVector {
    pub discovery: u32,
    pub clarity: u32,
    pub rooted: u32,
    pub flourish: u32,
    pub family: u32,
}

/// Summed scores across all answers.
pub type QuizScores = ScoreVector;

impl ScoreVector {
    pub const ZERO: ScoreVector = ScoreVector::new(0, 0, 0, 0, 0);

    /// Weights in canonical package order.
    pub const fn new(discovery: u32, clarity: u32, rooted: u32, flourish: u32, family: u32) -> Self {
        Self {
            discovery,
            clarity,
            rooted,
            flourish,
            family,
        }
    }

    pub fn get(&self, package: PackageId) -> u32 {
        match package {
            PackageId::Discovery => self.discovery,
            PackageId::Clarity => self.clarity,
            PackageId::Rooted => self.rooted,
            PackageId::Flourish => self.flourish,
            PackageId::Family => self.family,
        }
    }

    /// Largest single weight in the vector.
    pub fn max_weight(&self) -> u32 {
        PackageId::ALL
            .iter()
            .map(|package| self.get(*package))
            .max()
            .unwrap_or(0)
    }
}

impl AddAssign for ScoreVector {
    fn add_assign(&mut self, other: ScoreVector) {
        self.discovery += other.discovery;
        self.clarity += other.clarity;
        self.rooted += other.rooted;
        self.flourish += other.flourish;
        self.family += other.family;
    }
}

impl Add for ScoreVector {
    type Output = ScoreVector;

    fn add(mut self, other: ScoreVector) -> ScoreVector {
        self += other;
        self
    }
}

/// A selectable answer to a question. Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Unique within the parent question
    pub id: &'static str,
    pub label_key: &'static str,
    pub scores: ScoreVector,
}

/// A quiz question. Static reference data; bank order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub category: Category,
    pub prompt_key: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// The option a user picked for a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub option_id: String,
}

impl QuizAnswer {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// A package with its raw score and normalised match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecommendation {
    pub package_id: PackageId,
    pub score: u32,
    pub match_percentage: u32,
}

/// Everything the results page needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub primary_recommendation: PackageRecommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_recommendation: Option<PackageRecommendation>,
    pub scores: QuizScores,
    /// Translation key, not resolved text
    #[serde(rename = "personalizedMessage")]
    pub personalized_message_key: String,
    pub related_blog_slugs: Vec<String>,
}

/// Lead record assembled when a visitor finishes the quiz.
///
/// Not persisted here; the caller hands it to whatever delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizUserData {
    pub email: String,
    pub first_name: String,
    pub answers: Vec<QuizAnswer>,
    pub result: QuizResult,
    pub completed_at: DateTime<Utc>,
    pub language: Language,
}
