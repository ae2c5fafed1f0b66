use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// None means the position is ongoing.
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub company_url: String,
    pub is_current: bool,
    pub display_order: i32,
}

impl Experience {
    /// Human-readable duration, recomputed on every read.
    pub fn duration(&self, today: NaiveDate) -> String {
        duration_label(self.start_date, self.end_date.unwrap_or(today))
    }
}

/// Whole years/months between two dates, day-of-month ignored.
pub fn duration_label(start: NaiveDate, end: NaiveDate) -> String {
    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;

    if months < 0 {
        years -= 1;
        months += 12;
    }

    match (years > 0, months > 0) {
        (true, true) => format!("{}y {}m", years, months),
        (true, false) => format!("{}y", years),
        (false, true) => format!("{}m", months),
        (false, false) => "< 1m".to_string(),
    }
}

/// Public shape for the experience listing; hides display_order and
/// carries the derived duration.
#[derive(Debug, Serialize)]
pub struct ExperienceView {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub company_url: String,
    pub is_current: bool,
    pub duration: String,
}

impl ExperienceView {
    pub fn from_experience(experience: Experience, today: NaiveDate) -> Self {
        let duration = experience.duration(today);
        ExperienceView {
            id: experience.id,
            company: experience.company,
            position: experience.position,
            description: experience.description,
            start_date: experience.start_date,
            end_date: experience.end_date,
            location: experience.location,
            company_url: experience.company_url,
            is_current: experience.is_current,
            duration,
        }
    }
}
