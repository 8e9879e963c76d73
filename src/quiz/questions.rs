//! The fixed question bank.
//!
//! Scoring philosophy:
//! - Discovery: exploring, first-timers, unsure about coaching
//! - Clarity: a specific transition, short-term focus
//! - Rooted: deep work, changing patterns
//! - Flourish: long-term commitment, comprehensive change
//! - Family: parenting and family challenges

use crate::quiz::types::{Category, QuizOption, QuizQuestion, ScoreVector};

/// Highest weight a single option gives any package. Match percentages
/// are normalised against `QUESTION_COUNT * MAX_SCORE_PER_QUESTION`.
pub const MAX_SCORE_PER_QUESTION: u32 = 5;

/// The question whose answer personalises the results message.
pub const CHALLENGE_QUESTION_ID: &str = "q2-challenge";

const fn opt(id: &'static str, label_key: &'static str, scores: ScoreVector) -> QuizOption {
    QuizOption {
        id,
        label_key,
        scores,
    }
}

const QUESTION_BANK: &[QuizQuestion] = &[
    QuizQuestion {
        id: "q1-life-stage",
        category: Category::LifeStage,
        prompt_key: "quiz.questions.lifeStage",
        options: &[
            opt("single", "quiz.options.lifeStage.single", ScoreVector::new(2, 3, 2, 2, 0)),
            opt("married-no-kids", "quiz.options.lifeStage.marriedNoKids", ScoreVector::new(2, 2, 3, 2, 1)),
            opt("parent-young", "quiz.options.lifeStage.parentYoung", ScoreVector::new(1, 2, 3, 3, 4)),
            opt("parent-teens", "quiz.options.lifeStage.parentTeens", ScoreVector::new(1, 2, 3, 3, 4)),
            opt("empty-nester", "quiz.options.lifeStage.emptyNester", ScoreVector::new(2, 3, 3, 2, 1)),
            opt("caregiver", "quiz.options.lifeStage.caregiver", ScoreVector::new(1, 2, 3, 3, 2)),
        ],
    },
    QuizQuestion {
        id: CHALLENGE_QUESTION_ID,
        category: Category::Challenge,
        prompt_key: "quiz.questions.challenge",
        options: &[
            opt("stress-overwhelm", "quiz.options.challenge.stressOverwhelm", ScoreVector::new(2, 3, 4, 3, 2)),
            opt("relationships", "quiz.options.challenge.relationships", ScoreVector::new(2, 2, 3, 4, 3)),
            opt("career-purpose", "quiz.options.challenge.careerPurpose", ScoreVector::new(3, 4, 3, 2, 0)),
            opt("parenting", "quiz.options.challenge.parenting", ScoreVector::new(1, 2, 3, 3, 5)),
            opt("faith-spiritual", "quiz.options.challenge.faithSpiritual", ScoreVector::new(2, 2, 4, 4, 1)),
            opt("life-transition", "quiz.options.challenge.lifeTransition", ScoreVector::new(3, 4, 3, 2, 1)),
        ],
    },
    QuizQuestion {
        id: "q3-goals",
        category: Category::Goals,
        prompt_key: "quiz.questions.goals",
        options: &[
            opt("clarity-direction", "quiz.options.goals.clarityDirection", ScoreVector::new(4, 5, 2, 1, 1)),
            opt("healing-peace", "quiz.options.goals.healingPeace", ScoreVector::new(1, 2, 4, 4, 2)),
            opt("personal-growth", "quiz.options.goals.personalGrowth", ScoreVector::new(2, 3, 4, 4, 1)),
            opt("family-harmony", "quiz.options.goals.familyHarmony", ScoreVector::new(1, 2, 3, 3, 5)),
            opt("confidence", "quiz.options.goals.confidence", ScoreVector::new(2, 3, 4, 3, 1)),
            opt("faith-alignment", "quiz.options.goals.faithAlignment", ScoreVector::new(2, 2, 4, 5, 2)),
        ],
    },
    QuizQuestion {
        id: "q4-commitment",
        category: Category::Commitment,
        prompt_key: "quiz.questions.commitment",
        options: &[
            opt("exploring", "quiz.options.commitment.exploring", ScoreVector::new(5, 2, 1, 0, 1)),
            opt("ready-short", "quiz.options.commitment.readyShort", ScoreVector::new(3, 5, 2, 1, 2)),
            opt("ready-invest", "quiz.options.commitment.readyInvest", ScoreVector::new(1, 2, 5, 4, 3)),
            opt("fully-committed", "quiz.options.commitment.fullyCommitted", ScoreVector::new(0, 1, 3, 5, 3)),
        ],
    },
    QuizQuestion {
        id: "q5-faith-importance",
        category: Category::Goals,
        prompt_key: "quiz.questions.faithImportance",
        options: &[
            opt("central", "quiz.options.faithImportance.central", ScoreVector::new(2, 2, 4, 5, 2)),
            opt("important", "quiz.options.faithImportance.important", ScoreVector::new(2, 3, 3, 3, 2)),
            opt("open", "quiz.options.faithImportance.open", ScoreVector::new(3, 3, 2, 2, 2)),
            opt("prefer-secular", "quiz.options.faithImportance.preferSecular", ScoreVector::new(3, 4, 2, 1, 2)),
        ],
    },
    QuizQuestion {
        id: "q6-urgency",
        category: Category::Commitment,
        prompt_key: "quiz.questions.urgency",
        options: &[
            opt("crisis", "quiz.options.urgency.crisis", ScoreVector::new(2, 3, 4, 3, 3)),
            opt("turning-point", "quiz.options.urgency.turningPoint", ScoreVector::new(2, 4, 4, 3, 2)),
            opt("gradual-desire", "quiz.options.urgency.gradualDesire", ScoreVector::new(3, 3, 3, 4, 2)),
            opt("curious", "quiz.options.urgency.curious", ScoreVector::new(5, 2, 1, 1, 1)),
        ],
    },
];

/// Number of questions in the bank.
pub const QUESTION_COUNT: usize = QUESTION_BANK.len();

/// All questions in display order.
pub fn questions() -> &'static [QuizQuestion] {
    QUESTION_BANK
}

pub fn find_question(question_id: &str) -> Option<&'static QuizQuestion> {
    QUESTION_BANK.iter().find(|q| q.id == question_id)
}
