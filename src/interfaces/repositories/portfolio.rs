use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        experience::Experience,
        project::{Project, ProjectFilter},
        technology::{Technology, TechnologyBrief},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxPortfolioRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    /// Resolves the {name, icon, color} projection for every given project
    /// in one query, keyed by project id.
    async fn technologies_for_projects(
        &self,
        project_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<TechnologyBrief>>, AppError>;
    async fn list_technologies(&self) -> Result<Vec<Technology>, AppError>;
    async fn list_experience(&self) -> Result<Vec<Experience>, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxPortfolioRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxPortfolioRepo { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectTechRow {
    project_id: Uuid,
    name: String,
    icon: String,
    color: String,
}

#[async_trait]
impl PortfolioRepository for SqlxPortfolioRepo {
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, long_description, image, github_url, demo_url,
                   category, is_featured, display_order, created_at, updated_at
            FROM projects
            WHERE ($1::text IS NULL OR lower(category) = lower($1))
              AND (NOT $2 OR is_featured)
            ORDER BY display_order ASC, created_at DESC
            "#,
        )
        .bind(filter.category.as_deref())
        .bind(filter.featured_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, long_description, image, github_url, demo_url,
                   category, is_featured, display_order, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(project)
    }

    async fn technologies_for_projects(
        &self,
        project_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<TechnologyBrief>>, AppError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // The unique (project_id, technology_id) constraint keeps each
        // technology from appearing twice per project.
        let rows = sqlx::query_as::<_, ProjectTechRow>(
            r#"
            SELECT pt.project_id, t.name, t.icon_class AS icon, t.color
            FROM project_technologies pt
            JOIN technologies t ON t.id = pt.technology_id
            WHERE pt.project_id = ANY($1)
            ORDER BY t.display_order ASC, t.name ASC
            "#,
        )
        .bind(project_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_project: HashMap<Uuid, Vec<TechnologyBrief>> = HashMap::new();
        for row in rows {
            by_project.entry(row.project_id).or_default().push(TechnologyBrief {
                name: row.name,
                icon: row.icon,
                color: row.color,
            });
        }

        Ok(by_project)
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>, AppError> {
        let technologies = sqlx::query_as::<_, Technology>(
            r#"
            SELECT id, name, icon_class, color, category, proficiency, display_order
            FROM technologies
            ORDER BY display_order ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(technologies)
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, AppError> {
        let experience = sqlx::query_as::<_, Experience>(
            r#"
            SELECT id, company, position, description, start_date, end_date,
                   location, company_url, is_current, display_order
            FROM experience
            ORDER BY start_date DESC, display_order ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(experience)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
