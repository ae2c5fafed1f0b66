use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;

use crate::AppState;

/// Grouped technologies, wrapped in the success envelope. A store failure
/// is logged server-side and reported with a generic message.
#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    match state.portfolio_handler.list_skills().await {
        Ok(groups) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": groups
        })),
        Err(err) => {
            tracing::error!("Error fetching skills: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch skills data"
            }))
        }
    }
}
