mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, email, utils};

use email::{smtp::SmtpMailer, MailError};
use repositories::sqlx_repo::{SqlxContactRepo, SqlxPortfolioRepo};
use use_cases::{contact::ContactHandler, portfolio::PortfolioHandler};

pub type AppPortfolioHandler = PortfolioHandler<SqlxPortfolioRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo, SmtpMailer>;

pub struct AppState {
    pub portfolio_handler: AppPortfolioHandler,
    pub contact_handler: AppContactHandler,
    pub media_url: String,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Result<Self, MailError> {
        let mailer = SmtpMailer::new(config)?;

        let portfolio_handler = PortfolioHandler::new(SqlxPortfolioRepo::new(pool.clone()));
        let contact_handler = ContactHandler::new(SqlxContactRepo::new(pool), mailer);

        Ok(AppState {
            portfolio_handler,
            contact_handler,
            media_url: config.media_url.clone(),
        })
    }
}
