use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_experience(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let today = Utc::now().date_naive();

    let experience = state.portfolio_handler.list_experience(today).await?;

    Ok(HttpResponse::Ok().json(experience))
}
