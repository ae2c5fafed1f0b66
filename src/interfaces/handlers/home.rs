use actix_web::{get, HttpRequest, HttpResponse, Responder};
use serde_json::json;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to my Portfolio Web API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "documentation": "/api"
    }))
}

/// Endpoint directory with absolute URLs built from the current request.
pub async fn api_overview(req: HttpRequest) -> impl Responder {
    let info = req.connection_info();
    let base_url = format!("{}://{}/api", info.scheme(), info.host());

    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "status": format!("{base_url}/status"),
            "projects": format!("{base_url}/projects"),
            "skills": format!("{base_url}/skills"),
            "experience": format!("{base_url}/experience"),
            "contact": format!("{base_url}/contact"),
        }
    }))
}

pub async fn api_status() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Portfolio API is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
