use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::event::Event;

/// Category metadata attached to a task in API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.as_str().to_string(),
            icon: category.icon.clone(),
            color: category.color_hex.as_str().to_string(),
        }
    }
}

/// Task as rendered in calendar cells and day listings.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: Option<String>,
    pub is_completed: bool,
    pub category: Option<CategorySummary>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TaskSummary {
    /// Shape an event for output, given its normalized start instant and the
    /// already-resolved category summary.
    pub fn from_event(
        event: &Event,
        instant: NaiveDateTime,
        category: Option<CategorySummary>,
    ) -> Self {
        let time = event
            .time
            .clone()
            .or_else(|| Some(crate::domain::instant::format_time_of_day(instant)));
        Self {
            id: event.id.to_string(),
            title: event.title.as_str().to_string(),
            description: event.description.clone(),
            time,
            is_completed: event.is_completed,
            category,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
