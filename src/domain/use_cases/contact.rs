use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactSubmitResponse},
    errors::AppError,
    infrastructure::email::{Mailer, Notification},
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R, M>
where
    R: ContactRepository,
    M: Mailer,
{
    pub contact_repo: R,
    pub mailer: M,
}

impl<R, M> ContactHandler<R, M>
where
    R: ContactRepository,
    M: Mailer,
{
    pub fn new(contact_repo: R, mailer: M) -> Self {
        ContactHandler { contact_repo, mailer }
    }

    /// Two-phase contract: the insert must succeed or the whole operation
    /// fails; the notification is best-effort and never affects the result.
    pub async fn submit(
        &self,
        form: ContactForm,
        client_ip: Option<String>,
    ) -> Result<ContactSubmitResponse, AppError> {
        form.validate()?;

        let new_submission = form.into_new_submission(client_ip);
        let submission = self.contact_repo.create_submission(&new_submission).await?;

        let notification = Notification::for_submission(&submission);
        if let Err(e) = self.mailer.send(&notification).await {
            tracing::error!("Failed to send contact notification email: {}", e);
        }

        Ok(ContactSubmitResponse::created(&submission))
    }
}
