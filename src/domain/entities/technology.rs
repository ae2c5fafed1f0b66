use serde::{Deserialize, Serialize};

/// Fixed set of skill categories. The variant order doubles as the
/// deterministic group order for the skills listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "technology_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Tool,
    Framework,
    Language,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Technology {
    pub id: i64,
    pub name: String,
    pub icon_class: String,
    pub color: String,
    pub category: TechCategory,
    pub proficiency: i16,
    pub display_order: i32,
}

/// Public shape for the skills listing; hides display_order.
#[derive(Debug, Serialize)]
pub struct TechnologyView {
    pub id: i64,
    pub name: String,
    pub icon_class: String,
    pub color: String,
    pub category: TechCategory,
    pub proficiency: i16,
}

impl From<Technology> for TechnologyView {
    fn from(tech: Technology) -> Self {
        TechnologyView {
            id: tech.id,
            name: tech.name,
            icon_class: tech.icon_class,
            color: tech.color,
            category: tech.category,
            proficiency: tech.proficiency,
        }
    }
}

/// Minimal projection used inside project views. Deliberately omits
/// proficiency and category, which are skills-listing concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyBrief {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct SkillGroup {
    pub category: TechCategory,
    pub technologies: Vec<TechnologyView>,
}

pub fn valid_proficiency(proficiency: i16) -> bool {
    (0..=100).contains(&proficiency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_follows_declaration() {
        let mut categories = vec![
            TechCategory::Language,
            TechCategory::Database,
            TechCategory::Frontend,
            TechCategory::Tool,
        ];
        categories.sort();
        assert_eq!(
            categories,
            vec![
                TechCategory::Frontend,
                TechCategory::Database,
                TechCategory::Tool,
                TechCategory::Language,
            ]
        );
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TechCategory::Frontend).unwrap(), "\"frontend\"");
        assert_eq!(serde_json::to_string(&TechCategory::Language).unwrap(), "\"language\"");
    }

    #[test]
    fn proficiency_bounds() {
        assert!(valid_proficiency(0));
        assert!(valid_proficiency(100));
        assert!(!valid_proficiency(-1));
        assert!(!valid_proficiency(101));
    }
}
