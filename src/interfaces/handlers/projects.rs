use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{entities::project::ProjectFilter, errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
}

impl ProjectListQuery {
    fn into_filter(self) -> ProjectFilter {
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));
        let featured_only = self
            .featured
            .map(|f| f.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        ProjectFilter { category, featured_only }
    }
}

/// Absolute prefix under which project images are served, derived from the
/// current request's scheme and host.
pub fn media_base(req: &HttpRequest, media_url: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), media_url)
}

#[instrument(skip(state, query, req))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let filter = query.into_inner().into_filter();
    let media_base = media_base(&req, &state.media_url);

    let projects = state
        .portfolio_handler
        .list_projects(filter, &media_base)
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, req))]
pub async fn get_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let media_base = media_base(&req, &state.media_url);

    let project = state
        .portfolio_handler
        .get_project(&project_id, &media_base)
        .await?;

    Ok(HttpResponse::Ok().json(project))
}
