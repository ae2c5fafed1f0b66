use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::technology::TechnologyBrief;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub long_description: String,
    /// Relative media path, e.g. "projects/shop.png".
    pub image: Option<String>,
    pub github_url: String,
    pub demo_url: String,
    pub category: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive exact match on the project category.
    pub category: Option<String>,
    pub featured_only: bool,
}

/// Public shape for the project listing and detail endpoints.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub image_url: Option<String>,
    pub github_url: String,
    pub demo_url: String,
    pub category: String,
    pub is_featured: bool,
    pub technologies: Vec<TechnologyBrief>,
    pub created_at: DateTime<Utc>,
}

impl ProjectView {
    /// `media_base` is an absolute prefix such as "http://host/media",
    /// derived from the current request.
    pub fn from_project(
        project: Project,
        technologies: Vec<TechnologyBrief>,
        media_base: &str,
    ) -> Self {
        let image_url = project.image.as_ref().map(|image| {
            format!(
                "{}/{}",
                media_base.trim_end_matches('/'),
                image.trim_start_matches('/')
            )
        });

        ProjectView {
            id: project.id,
            name: project.name,
            description: project.description,
            long_description: project.long_description,
            image_url,
            github_url: project.github_url,
            demo_url: project.demo_url,
            category: project.category,
            is_featured: project.is_featured,
            technologies,
            created_at: project.created_at,
        }
    }
}
