use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::entry::DayEntry as DomainDayEntry;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `day_entries` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::day_entries)]
pub struct DayEntry {
    pub id: i32,
    pub user_id: i32,
    pub date: String,
    pub description: String,
    pub mood_rating: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<DayEntry> for DomainDayEntry {
    type Error = TypeConstraintError;

    fn try_from(entry: DayEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id.try_into()?,
            user_id: entry.user_id.try_into()?,
            date: entry.date,
            description: entry.description,
            mood_rating: entry.mood_rating.try_into()?,
            created_at: entry.created_at,
        })
    }
}
