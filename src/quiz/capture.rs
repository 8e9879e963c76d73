//! Lead-capture form validation.
//!
//! Each error knows the translation key of the message the form shows, so
//! the UI resolves it in whatever language the visitor is using.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("first name is required")]
    FirstNameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("email address is not valid")]
    EmailInvalid,

    #[error("newsletter email address is not valid")]
    NewsletterEmailInvalid,

    #[error("contact details submitted before the questions were finished")]
    QuizIncomplete,
}

impl CaptureError {
    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            CaptureError::FirstNameRequired => "quiz.email.validation.firstNameRequired",
            CaptureError::EmailRequired => "quiz.email.validation.emailRequired",
            CaptureError::EmailInvalid => "quiz.email.validation.emailInvalid",
            CaptureError::NewsletterEmailInvalid => "newsletter.invalidEmail",
            CaptureError::QuizIncomplete => "quiz.email.validation.quizIncomplete",
        }
    }
}

/// Trimmed, validated contact details from the quiz email step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub email: String,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate the quiz email-capture form.
///
/// Both fields are checked; every failure is returned so the form can mark
/// all offending fields at once.
pub fn validate_contact(first_name: &str, email: &str) -> Result<Contact, Vec<CaptureError>> {
    let first_name = first_name.trim();
    let email = email.trim();
    let mut errors = Vec::new();

    if first_name.is_empty() {
        errors.push(CaptureError::FirstNameRequired);
    }

    if email.is_empty() {
        errors.push(CaptureError::EmailRequired);
    } else if !email_regex().is_match(email) {
        errors.push(CaptureError::EmailInvalid);
    }

    if errors.is_empty() {
        Ok(Contact {
            first_name: first_name.to_string(),
            email: email.to_string(),
        })
    } else {
        Err(errors)
    }
}

/// The newsletter form's looser check: non-empty and contains `@`.
pub fn validate_newsletter_email(email: &str) -> Result<String, CaptureError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CaptureError::NewsletterEmailInvalid);
    }
    Ok(email.to_string())
}
