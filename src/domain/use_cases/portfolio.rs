use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    entities::{
        experience::ExperienceView,
        project::{ProjectFilter, ProjectView},
        technology::{SkillGroup, TechCategory, TechnologyView},
    },
    errors::AppError,
    repositories::portfolio::PortfolioRepository,
};

pub struct PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub portfolio_repo: R,
}

impl<R> PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repo: R) -> Self {
        PortfolioHandler { portfolio_repo }
    }

    /// Lists projects with their technology projections. `media_base` is the
    /// absolute prefix used to resolve image URLs for this request.
    pub async fn list_projects(
        &self,
        filter: ProjectFilter,
        media_base: &str,
    ) -> Result<Vec<ProjectView>, AppError> {
        let projects = self.portfolio_repo.list_projects(&filter).await?;

        let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
        let mut technologies = self.portfolio_repo.technologies_for_projects(&ids).await?;

        Ok(projects
            .into_iter()
            .map(|project| {
                let techs = technologies.remove(&project.id).unwrap_or_default();
                ProjectView::from_project(project, techs, media_base)
            })
            .collect())
    }

    /// Fetches a single project. A malformed id is indistinguishable from an
    /// unknown one to the client: both yield not-found.
    pub async fn get_project(&self, id: &str, media_base: &str) -> Result<ProjectView, AppError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::NotFound("Project not found".into()))?;

        let project = self.portfolio_repo.get_project_by_id(&id).await?;
        let mut technologies = self.portfolio_repo.technologies_for_projects(&[id]).await?;
        let techs = technologies.remove(&id).unwrap_or_default();

        Ok(ProjectView::from_project(project, techs, media_base))
    }

    /// Groups all technologies by category. Group order is the fixed enum
    /// order; within a group, database retrieval order is preserved.
    pub async fn list_skills(&self) -> Result<Vec<SkillGroup>, AppError> {
        let technologies = self.portfolio_repo.list_technologies().await?;

        let mut groups: BTreeMap<TechCategory, Vec<TechnologyView>> = BTreeMap::new();
        for tech in technologies {
            groups.entry(tech.category).or_default().push(tech.into());
        }

        Ok(groups
            .into_iter()
            .map(|(category, technologies)| SkillGroup { category, technologies })
            .collect())
    }

    pub async fn list_experience(&self, today: NaiveDate) -> Result<Vec<ExperienceView>, AppError> {
        let rows = self.portfolio_repo.list_experience().await?;

        Ok(rows
            .into_iter()
            .map(|experience| ExperienceView::from_experience(experience, today))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chrono::Utc;

    use crate::entities::experience::Experience;
    use crate::entities::project::Project;
    use crate::entities::technology::{Technology, TechnologyBrief};
    use crate::repositories::portfolio::MockPortfolioRepository;

    fn project(name: &str) -> Project {
        Project {
            id: Uuid::new_v4(),
            name: name.into(),
            description: "desc".into(),
            long_description: "long desc".into(),
            image: None,
            github_url: "https://github.com/example/p".into(),
            demo_url: "https://demo.example.com".into(),
            category: "Full-Stack".into(),
            is_featured: true,
            display_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn technology(id: i64, name: &str, category: TechCategory) -> Technology {
        Technology {
            id,
            name: name.into(),
            icon_class: format!("Fa{name}"),
            color: "text-blue-500".into(),
            category,
            proficiency: 80,
            display_order: 0,
        }
    }

    fn brief(name: &str) -> TechnologyBrief {
        TechnologyBrief {
            name: name.into(),
            icon: format!("Fa{name}"),
            color: "text-blue-500".into(),
        }
    }

    #[tokio::test]
    async fn list_projects_attaches_technology_projections() {
        let first = project("First");
        let first_id = first.id;
        let second = project("Second");

        let mut repo = MockPortfolioRepository::new();
        let projects = vec![first, second];
        repo.expect_list_projects()
            .returning(move |_| Ok(projects.clone()));
        repo.expect_technologies_for_projects()
            .returning(move |_| {
                let mut map = HashMap::new();
                map.insert(first_id, vec![brief("React"), brief("Postgres")]);
                Ok(map)
            });

        let handler = PortfolioHandler::new(repo);
        let views = handler
            .list_projects(ProjectFilter::default(), "http://localhost/media")
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].technologies, vec![brief("React"), brief("Postgres")]);
        assert!(views[1].technologies.is_empty());
    }

    #[tokio::test]
    async fn list_projects_forwards_the_filter() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_list_projects()
            .withf(|filter| filter.category.as_deref() == Some("Frontend") && filter.featured_only)
            .returning(|_| Ok(vec![]));
        repo.expect_technologies_for_projects()
            .returning(|_| Ok(HashMap::new()));

        let handler = PortfolioHandler::new(repo);
        let filter = ProjectFilter {
            category: Some("Frontend".into()),
            featured_only: true,
        };
        let views = handler.list_projects(filter, "http://localhost/media").await.unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn get_project_round_trips_linked_technologies() {
        let stored = project("Detailed");
        let id = stored.id;

        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_project_by_id()
            .withf(move |requested| *requested == id)
            .returning(move |_| Ok(stored.clone()));
        repo.expect_technologies_for_projects()
            .returning(move |_| {
                let mut map = HashMap::new();
                map.insert(id, vec![brief("React"), brief("Node.js")]);
                Ok(map)
            });

        let handler = PortfolioHandler::new(repo);
        let view = handler
            .get_project(&id.to_string(), "http://localhost/media")
            .await
            .unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.technologies, vec![brief("React"), brief("Node.js")]);
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_without_touching_the_store() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_project_by_id().times(0);
        repo.expect_technologies_for_projects().times(0);

        let handler = PortfolioHandler::new(repo);
        let err = handler
            .get_project("not-a-uuid", "http://localhost/media")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn skills_group_in_fixed_category_order() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_list_technologies().returning(|| {
            Ok(vec![
                technology(1, "Python", TechCategory::Language),
                technology(2, "React", TechCategory::Frontend),
                technology(3, "PostgreSQL", TechCategory::Database),
                technology(4, "Tailwind", TechCategory::Frontend),
            ])
        });

        let handler = PortfolioHandler::new(repo);
        let groups = handler.list_skills().await.unwrap();

        let categories: Vec<TechCategory> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![TechCategory::Frontend, TechCategory::Database, TechCategory::Language]
        );

        // Retrieval order preserved inside the group.
        let frontend: Vec<&str> = groups[0].technologies.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(frontend, vec!["React", "Tailwind"]);
    }

    #[tokio::test]
    async fn experience_views_carry_computed_duration() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_list_experience().returning(|| {
            Ok(vec![Experience {
                id: 1,
                company: "Tech Innovations Inc.".into(),
                position: "Senior Full-Stack Developer".into(),
                description: "Led development".into(),
                start_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
                end_date: None,
                location: "Remote".into(),
                company_url: "https://example.com".into(),
                is_current: true,
                display_order: 1,
            }])
        });

        let handler = PortfolioHandler::new(repo);
        let today = NaiveDate::from_ymd_opt(2023, 3, 20).unwrap();
        let views = handler.list_experience(today).await.unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].duration, "1y 2m");
        assert_eq!(views[0].end_date, None);
    }
}
