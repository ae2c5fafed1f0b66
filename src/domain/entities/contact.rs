use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::THANK_YOU_MESSAGE;

/// Inbound contact-form payload. Fields are optional so that missing
/// fields surface as per-field validation errors rather than a
/// deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(required(message = "This field is required."), custom(function = validate_name))]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = validate_email))]
    pub email: Option<String>,

    #[validate(required(message = "This field is required."), length(min = 1, message = "This field may not be blank."))]
    pub subject: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = validate_message))]
    pub message: Option<String>,
}

impl ContactForm {
    /// Normalizes a validated form for persistence: name/message trimmed,
    /// email lowercased. Must only be called after `validate()` passed.
    pub fn into_new_submission(self, ip_address: Option<String>) -> NewContactSubmission {
        NewContactSubmission {
            name: self.name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_lowercase(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default().trim().to_string(),
            ip_address,
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(field_error("Name must be at least 2 characters long."));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !email.contains('@') {
        return Err(field_error("Please enter a valid email address."));
    }
    Ok(())
}

fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().chars().count() < 10 {
        return Err(field_error("Message must be at least 10 characters long."));
    }
    Ok(())
}

fn field_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("invalid");
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Normalized submission ready for a single insert, client IP included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub ip_address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionRef {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ContactSubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: SubmissionRef,
}

impl ContactSubmitResponse {
    pub fn created(submission: &ContactSubmission) -> Self {
        ContactSubmitResponse {
            success: true,
            message: THANK_YOU_MESSAGE.to_string(),
            data: SubmissionRef { id: submission.id.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
        }
    }

    fn violated_fields(form: &ContactForm) -> Vec<String> {
        let errors = form.validate().expect_err("expected validation failure");
        match AppError::from(errors) {
            AppError::ValidationError(map) => map.into_keys().collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_form_passes() {
        let form = form("Jane Doe", "jane@example.com", "Hello", "This is a long enough message.");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let form = form("J", "jane@example.com", "Hello", "This is a long enough message.");
        assert_eq!(violated_fields(&form), vec!["name"]);
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_name_length() {
        let form = form("  J  ", "jane@example.com", "Hello", "This is a long enough message.");
        assert_eq!(violated_fields(&form), vec!["name"]);
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let form = form("Jane", "jane.example.com", "Hello", "This is a long enough message.");
        assert_eq!(violated_fields(&form), vec!["email"]);
    }

    #[test]
    fn short_message_is_rejected() {
        let form = form("Jane", "jane@example.com", "Hello", "Too short");
        assert_eq!(violated_fields(&form), vec!["message"]);
    }

    #[test]
    fn blank_subject_is_rejected() {
        let form = form("Jane", "jane@example.com", "", "This is a long enough message.");
        assert_eq!(violated_fields(&form), vec!["subject"]);
    }

    #[test]
    fn missing_fields_reported_per_field() {
        let form = ContactForm {
            name: None,
            email: Some("jane@example.com".into()),
            subject: None,
            message: Some("This is a long enough message.".into()),
        };
        let mut fields = violated_fields(&form);
        fields.sort();
        assert_eq!(fields, vec!["name", "subject"]);
    }

    #[test]
    fn multiple_violations_name_every_field() {
        let form = form("J", "not-an-email", "Hi", "short");
        let mut fields = violated_fields(&form);
        fields.sort();
        assert_eq!(fields, vec!["email", "message", "name"]);
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        let form = form("  Jane Doe  ", "  Jane@Example.COM ", "Hello", "  This is a long enough message.  ");
        let submission = form.into_new_submission(Some("1.2.3.4".into()));
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "This is a long enough message.");
        assert_eq!(submission.ip_address.as_deref(), Some("1.2.3.4"));
    }
}
