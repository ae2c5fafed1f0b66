pub mod smtp;

use async_trait::async_trait;
use derive_more::Display;

use crate::entities::contact::ContactSubmission;

#[derive(Debug, Display)]
pub enum MailError {
    #[display("Invalid mail address: {_0}")]
    Address(String),

    #[display("Failed to build message: {_0}")]
    Message(String),

    #[display("SMTP transport error: {_0}")]
    Transport(String),
}

/// Outbound mail transport. `send` raises on delivery failure; callers
/// decide whether that failure propagates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), MailError>;
}

/// A rendered notification: subject plus plain-text and HTML bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl Notification {
    /// Renders the new-submission notification. Message newlines are kept
    /// verbatim in the text body and become `<br>` in the HTML body.
    pub fn for_submission(submission: &ContactSubmission) -> Self {
        let subject = format!("Portfolio Contact: {}", submission.subject);

        let html_body = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>From:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <div style=\"background: #f5f5f5; padding: 15px; border-radius: 5px;\">{}</div>\n\
             <p><small>Sent at: {}</small></p>",
            submission.name,
            submission.email,
            submission.subject,
            submission.message.replace('\n', "<br>"),
            submission.created_at,
        );

        let text_body = format!(
            "New Contact Form Submission\n\n\
             From: {}\n\
             Email: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n\n\
             Sent at: {}",
            submission.name,
            submission.email,
            submission.subject,
            submission.message,
            submission.created_at,
        );

        Notification { subject, text_body, html_body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: 42,
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Project inquiry".into(),
            message: "First line\nSecond line".into(),
            created_at: Utc::now(),
            is_read: false,
            ip_address: Some("1.2.3.4".into()),
        }
    }

    #[test]
    fn subject_is_derived_from_submission_subject() {
        let notification = Notification::for_submission(&submission());
        assert_eq!(notification.subject, "Portfolio Contact: Project inquiry");
    }

    #[test]
    fn html_body_converts_newlines() {
        let notification = Notification::for_submission(&submission());
        assert!(notification.html_body.contains("First line<br>Second line"));
        assert!(notification.html_body.contains("jane@example.com"));
    }

    #[test]
    fn text_body_keeps_newlines_verbatim() {
        let notification = Notification::for_submission(&submission());
        assert!(notification.text_body.contains("First line\nSecond line"));
        assert!(notification.text_body.contains("Jane Doe"));
    }
}
