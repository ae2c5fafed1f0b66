use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::settings::AppConfig;

use super::{MailError, Mailer, Notification};

/// SMTP-backed mail transport. Sender and recipient list are fixed at
/// construction from the application config.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl SmtpMailer {
    pub fn new(config: &AppConfig) -> Result<Self, MailError> {
        // STARTTLS submission, matching the default port 587.
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = parse_mailbox(&config.default_from_email)?;
        let recipients = config
            .recipients()
            .iter()
            .map(|addr| parse_mailbox(addr))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SmtpMailer {
            transport: builder.build(),
            from,
            recipients,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|_| MailError::Address(address.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, notification: &Notification) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(notification.subject.clone());

        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                notification.text_body.clone(),
                notification.html_body.clone(),
            ))
            .map_err(|e| MailError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "Portfolio API Test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/portfolio_test".into(),
            cors_allowed_origins: vec!["*".into()],
            media_url: "/media/".into(),
            smtp_host: "localhost".into(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            default_from_email: "portfolio@example.com".into(),
            contact_recipients: vec!["admin@example.com".into()],
        }
    }

    #[tokio::test]
    async fn builds_on_the_default_submission_port() {
        assert!(SmtpMailer::new(&config()).is_ok());
    }

    #[tokio::test]
    async fn builds_with_credentials() {
        let mut config = config();
        config.smtp_username = Some("mailer".into());
        config.smtp_password = Some("secret".into());
        assert!(SmtpMailer::new(&config).is_ok());
    }

    #[test]
    fn invalid_sender_address_is_rejected() {
        let mut config = config();
        config.default_from_email = "not-an-address".into();
        let err = SmtpMailer::new(&config).unwrap_err();
        assert!(matches!(err, MailError::Address(_)));
    }
}
