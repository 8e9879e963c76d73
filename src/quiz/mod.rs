//! The package-matching quiz.
//!
//! - `types`: data model shared by the rest of the module
//! - `questions`: the fixed question bank
//! - `engine`: pure scoring and ranking
//! - `packages`: package display details
//! - `capture`: email form validation
//! - `session`: the intro/questions/email/results flow
//! - `roadmap`: localized message and downloadable roadmap

pub mod capture;
pub mod engine;
pub mod packages;
pub mod questions;
pub mod roadmap;
pub mod session;
pub mod types;

pub use capture::{validate_contact, validate_newsletter_email, CaptureError, Contact};
pub use packages::{all_packages, package_details, PackageDetails};
pub use questions::{find_question, questions};
pub use roadmap::{personalized_message, render_roadmap, roadmap_filename, slug_title};
pub use session::{QuizSession, QuizStep};
pub use types::{
    Category, PackageId, PackageRecommendation, QuizAnswer, QuizOption, QuizQuestion, QuizResult,
    QuizScores, QuizUserData, ScoreVector,
};

/// Score a finished answer list.
pub fn compute_result(answers: &[QuizAnswer]) -> QuizResult {
    engine::build_result(answers)
}
