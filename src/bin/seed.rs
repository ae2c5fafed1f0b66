//! Idempotent sample-data seeding. Technologies upsert by name, projects by
//! name, experience by (company, position); existing rows are reported and
//! left untouched.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;
use url::Url;
use uuid::Uuid;

use portfolio_api::{
    db::postgres::create_pool,
    entities::technology::{valid_proficiency, TechCategory},
    settings::AppConfig,
};

struct TechSeed {
    name: &'static str,
    icon_class: &'static str,
    color: &'static str,
    category: TechCategory,
    proficiency: i16,
    display_order: i32,
}

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    long_description: &'static str,
    category: &'static str,
    is_featured: bool,
    github_url: &'static str,
    demo_url: &'static str,
    technologies: &'static [&'static str],
    display_order: i32,
}

struct ExperienceSeed {
    company: &'static str,
    position: &'static str,
    description: &'static str,
    start_date: (i32, u32, u32),
    end_date: Option<(i32, u32, u32)>,
    is_current: bool,
    location: &'static str,
    company_url: &'static str,
    display_order: i32,
}

fn technologies() -> Vec<TechSeed> {
    vec![
        TechSeed { name: "React", icon_class: "FaReact", color: "text-blue-500", category: TechCategory::Frontend, proficiency: 90, display_order: 1 },
        TechSeed { name: "Node.js", icon_class: "FaNodeJs", color: "text-green-500", category: TechCategory::Backend, proficiency: 85, display_order: 2 },
        TechSeed { name: "Python", icon_class: "FaPython", color: "text-blue-400", category: TechCategory::Language, proficiency: 88, display_order: 3 },
        TechSeed { name: "MongoDB", icon_class: "SiMongodb", color: "text-green-600", category: TechCategory::Database, proficiency: 82, display_order: 4 },
        TechSeed { name: "Express", icon_class: "SiExpress", color: "text-gray-400", category: TechCategory::Backend, proficiency: 85, display_order: 5 },
        TechSeed { name: "Next.js", icon_class: "SiNextdotjs", color: "text-white", category: TechCategory::Frontend, proficiency: 87, display_order: 6 },
        TechSeed { name: "TypeScript", icon_class: "SiTypescript", color: "text-blue-600", category: TechCategory::Language, proficiency: 84, display_order: 7 },
        TechSeed { name: "Tailwind CSS", icon_class: "SiTailwindcss", color: "text-cyan-500", category: TechCategory::Frontend, proficiency: 92, display_order: 8 },
        TechSeed { name: "Firebase", icon_class: "SiFirebase", color: "text-orange-500", category: TechCategory::Backend, proficiency: 78, display_order: 9 },
        TechSeed { name: "PostgreSQL", icon_class: "SiPostgresql", color: "text-blue-700", category: TechCategory::Database, proficiency: 80, display_order: 10 },
    ]
}

fn projects() -> Vec<ProjectSeed> {
    vec![
        ProjectSeed {
            name: "E-Commerce Platform",
            description: "A full-stack e-commerce solution with user authentication, payment processing, and admin dashboard. Features include shopping cart, order tracking, and inventory management.",
            long_description: "Built with the MERN stack, this e-commerce platform includes advanced features like real-time inventory updates, secure payment processing with Stripe, user reviews, and a comprehensive admin panel for managing products and orders.",
            category: "Full-Stack",
            is_featured: true,
            github_url: "https://github.com/example/ecommerce-platform",
            demo_url: "https://ecommerce-demo.example.dev",
            technologies: &["React", "Node.js", "MongoDB", "Express"],
            display_order: 1,
        },
        ProjectSeed {
            name: "Task Management App",
            description: "A collaborative task management application with real-time updates, team collaboration features, and progress tracking.",
            long_description: "This project management tool allows teams to create, assign, and track tasks in real-time. Features include drag-and-drop kanban boards, time tracking, file uploads, and team chat functionality.",
            category: "Frontend",
            is_featured: true,
            github_url: "https://github.com/example/task-manager",
            demo_url: "https://taskmanager.example.dev",
            technologies: &["Next.js", "TypeScript", "Firebase", "Tailwind CSS"],
            display_order: 2,
        },
        ProjectSeed {
            name: "AI Data Analytics Dashboard",
            description: "An intelligent dashboard for data visualization and analytics with machine learning insights and predictive modeling.",
            long_description: "A comprehensive analytics platform that processes large datasets and provides actionable insights through interactive charts, machine learning predictions, and automated reporting features.",
            category: "Full-Stack",
            is_featured: true,
            github_url: "https://github.com/example/ai-analytics",
            demo_url: "https://analytics.example.dev",
            technologies: &["Python", "React", "PostgreSQL"],
            display_order: 3,
        },
    ]
}

fn experiences() -> Vec<ExperienceSeed> {
    vec![
        ExperienceSeed {
            company: "Tech Innovations Inc.",
            position: "Senior Full-Stack Developer",
            description: "Led development of enterprise web applications. Collaborated with cross-functional teams to deliver high-quality software solutions.",
            start_date: (2022, 1, 15),
            end_date: None,
            is_current: true,
            location: "Remote",
            company_url: "https://example.com",
            display_order: 1,
        },
        ExperienceSeed {
            company: "Digital Solutions Ltd.",
            position: "Full-Stack Developer",
            description: "Developed and maintained multiple client projects. Implemented RESTful APIs and modern frontend interfaces.",
            start_date: (2020, 6, 1),
            end_date: Some((2021, 12, 31)),
            is_current: false,
            location: "New York, NY",
            company_url: "https://example.com",
            display_order: 2,
        },
    ]
}

async fn upsert_technology(pool: &PgPool, seed: &TechSeed) -> Result<i64> {
    if !valid_proficiency(seed.proficiency) {
        bail!("proficiency for {} must be within 0-100", seed.name);
    }

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM technologies WHERE name = $1")
        .bind(seed.name)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        println!("→ Technology already exists: {}", seed.name);
        return Ok(id);
    }

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO technologies (name, icon_class, color, category, proficiency, display_order)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(seed.name)
    .bind(seed.icon_class)
    .bind(seed.color)
    .bind(seed.category)
    .bind(seed.proficiency)
    .bind(seed.display_order)
    .fetch_one(pool)
    .await?;

    println!("✓ Created technology: {}", seed.name);
    Ok(id)
}

async fn upsert_project(pool: &PgPool, seed: &ProjectSeed) -> Result<Option<Uuid>> {
    Url::parse(seed.github_url).with_context(|| format!("invalid github_url for {}", seed.name))?;
    Url::parse(seed.demo_url).with_context(|| format!("invalid demo_url for {}", seed.name))?;

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM projects WHERE name = $1")
        .bind(seed.name)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        println!("→ Project already exists: {}", seed.name);
        return Ok(None);
    }

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO projects (name, description, long_description, github_url, demo_url,
                              category, is_featured, display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(seed.name)
    .bind(seed.description)
    .bind(seed.long_description)
    .bind(seed.github_url)
    .bind(seed.demo_url)
    .bind(seed.category)
    .bind(seed.is_featured)
    .bind(seed.display_order)
    .fetch_one(pool)
    .await?;

    println!("✓ Created project: {}", seed.name);
    Ok(Some(id))
}

async fn link_technology(pool: &PgPool, project_id: Uuid, technology_id: i64) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO project_technologies (project_id, technology_id)
        VALUES ($1, $2)
        ON CONFLICT (project_id, technology_id) DO NOTHING
        "#,
    )
    .bind(project_id)
    .bind(technology_id)
    .execute(pool)
    .await?;

    Ok(())
}

async fn upsert_experience(pool: &PgPool, seed: &ExperienceSeed) -> Result<()> {
    Url::parse(seed.company_url)
        .with_context(|| format!("invalid company_url for {}", seed.company))?;

    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM experience WHERE company = $1 AND position = $2",
    )
    .bind(seed.company)
    .bind(seed.position)
    .fetch_optional(pool)
    .await?;

    if existing.is_some() {
        println!("→ Experience already exists: {} at {}", seed.position, seed.company);
        return Ok(());
    }

    let (y, m, d) = seed.start_date;
    let start_date = NaiveDate::from_ymd_opt(y, m, d).context("invalid start_date")?;
    let end_date = seed
        .end_date
        .map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).context("invalid end_date"))
        .transpose()?;

    sqlx::query(
        r#"
        INSERT INTO experience (company, position, description, start_date, end_date,
                                location, company_url, is_current, display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(seed.company)
    .bind(seed.position)
    .bind(seed.description)
    .bind(start_date)
    .bind(end_date)
    .bind(seed.location)
    .bind(seed.company_url)
    .bind(seed.is_current)
    .bind(seed.display_order)
    .execute(pool)
    .await?;

    println!("✓ Created experience: {} at {}", seed.position, seed.company);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::new().context("failed to load configuration")?;
    let pool = create_pool(&config.database_url)
        .await
        .context("failed to create database connection pool")?;

    println!("Populating database with sample data...");

    let mut tech_ids = std::collections::HashMap::new();
    for seed in technologies() {
        let id = upsert_technology(&pool, &seed).await?;
        tech_ids.insert(seed.name, id);
    }

    for seed in projects() {
        if let Some(project_id) = upsert_project(&pool, &seed).await? {
            for tech_name in seed.technologies {
                if let Some(&technology_id) = tech_ids.get(tech_name) {
                    link_technology(&pool, project_id, technology_id).await?;
                }
            }
        }
    }

    for seed in experiences() {
        upsert_experience(&pool, &seed).await?;
    }

    println!("\n✨ Successfully populated database with sample data!");
    Ok(())
}
