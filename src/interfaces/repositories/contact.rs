use async_trait::async_trait;

use crate::{
    entities::contact::{ContactSubmission, NewContactSubmission},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persists a submission in a single insert; the client IP is already
    /// resolved so no follow-up write is needed.
    async fn create_submission(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_submission(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, AppError> {
        let created = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message, ip_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, subject, message, created_at, is_read, ip_address
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(submission.ip_address.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
