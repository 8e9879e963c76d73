//! Interactive quiz flow: intro, questions, email capture, results.
//!
//! A session is owned by one visitor. It keeps at most one answer per
//! question and only hands the answer list to the engine when results are
//! requested.

use crate::i18n::Language;
use crate::quiz::capture::{validate_contact, CaptureError};
use crate::quiz::engine::build_result;
use crate::quiz::questions::questions;
use crate::quiz::types::{QuizAnswer, QuizQuestion, QuizResult, QuizUserData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStep {
    Intro,
    Questions,
    Email,
    Results,
}

/// Insert an answer, replacing any earlier answer to the same question.
///
/// A replaced answer keeps its original position in the list.
pub fn upsert_answer(answers: &mut Vec<QuizAnswer>, question_id: &str, option_id: &str) {
    let answer = QuizAnswer::new(question_id, option_id);
    match answers.iter_mut().find(|a| a.question_id == question_id) {
        Some(existing) => *existing = answer,
        None => answers.push(answer),
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    step: QuizStep,
    current_index: usize,
    answers: Vec<QuizAnswer>,
    result: Option<QuizResult>,
    user_data: Option<QuizUserData>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Intro,
            current_index: 0,
            answers: Vec::new(),
            result: None,
            user_data: None,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn user_data(&self) -> Option<&QuizUserData> {
        self.user_data.as_ref()
    }

    /// Leave the intro and show the first question with a clean slate.
    pub fn start(&mut self) {
        self.step = QuizStep::Questions;
        self.current_index = 0;
        self.answers.clear();
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.step {
            QuizStep::Questions => questions().get(self.current_index),
            _ => None,
        }
    }

    /// Answer already recorded for the question on screen.
    pub fn current_answer(&self) -> Option<&QuizAnswer> {
        let question = self.current_question()?;
        self.answers.iter().find(|a| a.question_id == question.id)
    }

    /// 1-based position and total, for the progress bar. Only shown while
    /// answering questions.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.step {
            QuizStep::Questions => Some((self.current_index + 1, questions().len())),
            _ => None,
        }
    }

    pub fn is_first_question(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= questions().len()
    }

    /// Record an answer for any question (upsert by question id).
    pub fn submit_answer(&mut self, question_id: &str, option_id: &str) {
        debug!("Answer {} -> {}", question_id, option_id);
        upsert_answer(&mut self.answers, question_id, option_id);
    }

    /// Record an answer for the question on screen. Ignored outside the
    /// questions step.
    pub fn select_option(&mut self, option_id: &str) {
        if let Some(question) = self.current_question() {
            self.submit_answer(question.id, option_id);
        }
    }

    /// Advance to the next question; after the last one, compute the result
    /// and move to email capture.
    pub fn next(&mut self) {
        if self.step != QuizStep::Questions {
            return;
        }

        if !self.is_last_question() {
            self.current_index += 1;
            return;
        }

        self.result = Some(build_result(&self.answers));
        self.step = QuizStep::Email;
    }

    /// Go back one question, or to the intro from the first question.
    pub fn back(&mut self) {
        if self.step != QuizStep::Questions {
            return;
        }

        if self.current_index > 0 {
            self.current_index -= 1;
        } else {
            self.step = QuizStep::Intro;
        }
    }

    /// Validate the email form and assemble the lead record.
    ///
    /// Only accepted on the email step, after the last question. On success
    /// the session moves to the results step and the returned record is what
    /// the caller forwards to its email integration.
    pub fn submit_contact(
        &mut self,
        first_name: &str,
        email: &str,
        language: Language,
        completed_at: DateTime<Utc>,
    ) -> Result<&QuizUserData, Vec<CaptureError>> {
        if self.step != QuizStep::Email {
            return Err(vec![CaptureError::QuizIncomplete]);
        }
        let contact = validate_contact(first_name, email)?;

        let result = self
            .result
            .clone()
            .unwrap_or_else(|| build_result(&self.answers));

        info!(
            "Quiz completed: {} recommended ({} answers, {})",
            result.primary_recommendation.package_id,
            self.answers.len(),
            language
        );

        let data = QuizUserData {
            email: contact.email,
            first_name: contact.first_name,
            answers: self.answers.clone(),
            result: result.clone(),
            completed_at,
            language,
        };

        self.result = Some(result);
        self.step = QuizStep::Results;
        Ok(&*self.user_data.insert(data))
    }

    /// Discard everything and return to the intro.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
