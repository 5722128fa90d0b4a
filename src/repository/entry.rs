use diesel::prelude::*;

use crate::domain::entry::DayEntry;
use crate::domain::types::UserId;
use crate::models::entry::DayEntry as DbDayEntry;
use crate::repository::{DieselRepository, EntryReader, RepositoryResult};

impl EntryReader for DieselRepository {
    fn list_recent_entries(&self, user_id: UserId, limit: i64) -> RepositoryResult<Vec<DayEntry>> {
        use crate::schema::day_entries;

        let mut conn = self.conn()?;

        let rows = day_entries::table
            .filter(day_entries::user_id.eq(user_id.get()))
            .order(day_entries::date.desc())
            .limit(limit)
            .load::<DbDayEntry>(&mut conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match DayEntry::try_from(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("skipping journal entry failing domain validation: {e}");
                    None
                }
            })
            .collect())
    }

    fn count_entries(&self, user_id: UserId) -> RepositoryResult<i64> {
        use crate::schema::day_entries;

        let mut conn = self.conn()?;

        Ok(day_entries::table
            .filter(day_entries::user_id.eq(user_id.get()))
            .count()
            .get_result::<i64>(&mut conn)?)
    }

    fn average_mood(&self, user_id: UserId) -> RepositoryResult<Option<f64>> {
        use crate::schema::day_entries;

        let mut conn = self.conn()?;

        let ratings: Vec<i32> = day_entries::table
            .filter(day_entries::user_id.eq(user_id.get()))
            .select(day_entries::mood_rating)
            .load(&mut conn)?;

        if ratings.is_empty() {
            return Ok(None);
        }
        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        Ok(Some(sum as f64 / ratings.len() as f64))
    }
}
