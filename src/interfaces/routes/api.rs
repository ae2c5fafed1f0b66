use actix_web::web;

use crate::handlers::{
    contact::submit_contact,
    experience::list_experience,
    home::{api_overview, api_status},
    projects::{get_project, list_projects},
    skills::list_skills,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(api_overview));
    cfg.route("/status", web::get().to(api_status));
    cfg.route("/projects", web::get().to(list_projects));
    cfg.route("/projects/{id}", web::get().to(get_project));
    cfg.route("/skills", web::get().to(list_skills));
    cfg.route("/experience", web::get().to(list_experience));
    cfg.route("/contact", web::post().to(submit_contact));
}
