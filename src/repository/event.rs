use chrono::Utc;
use diesel::prelude::*;

use crate::domain::event::{Event, EventPatch, InstantRange, NewEvent};
use crate::domain::instant;
use crate::domain::types::{EventId, UserId};
use crate::models::event::{
    Event as DbEvent, EventChangeset, NewEvent as DbNewEvent,
};
use crate::repository::errors::RepositoryError;
use crate::repository::{DieselRepository, EventReader, EventWriter, RepositoryResult};

impl EventReader for DieselRepository {
    fn list_events_in_range(
        &self,
        user_id: UserId,
        range: InstantRange,
    ) -> RepositoryResult<Vec<Event>> {
        use crate::schema::events;

        let mut conn = self.conn()?;

        // start_time is TEXT; canonical rows sort lexicographically, so the
        // half-open bounds are compared in their canonical rendering.
        let rows = events::table
            .filter(events::user_id.eq(user_id.get()))
            .filter(events::start_time.ge(instant::format_stored_instant(range.start)))
            .filter(events::start_time.lt(instant::format_stored_instant(range.end)))
            .order(events::start_time.asc())
            .load::<DbEvent>(&mut conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match Event::try_from(row) {
                Ok(event) => Some(event),
                Err(e) => {
                    log::warn!("skipping event row failing domain validation: {e}");
                    None
                }
            })
            .collect())
    }

    fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>> {
        use crate::schema::events;

        let mut conn = self.conn()?;

        let event = events::table
            .find(id.get())
            .first::<DbEvent>(&mut conn)
            .optional()?;

        event
            .map(Event::try_from)
            .transpose()
            .map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn count_completed_events(&self, user_id: UserId) -> RepositoryResult<i64> {
        use crate::schema::events;

        let mut conn = self.conn()?;

        Ok(events::table
            .filter(events::user_id.eq(user_id.get()))
            .filter(events::is_completed.eq(true))
            .count()
            .get_result::<i64>(&mut conn)?)
    }
}

impl EventWriter for DieselRepository {
    fn create_event(&self, event: &NewEvent) -> RepositoryResult<Event> {
        use crate::schema::events;

        let mut conn = self.conn()?;
        let db_event: DbNewEvent = event.clone().into();

        let inserted = diesel::insert_into(events::table)
            .values(db_event)
            .get_result::<DbEvent>(&mut conn)?;

        Event::try_from(inserted).map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn update_event(&self, id: EventId, patch: &EventPatch) -> RepositoryResult<usize> {
        use crate::schema::events;

        if patch.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let changeset = EventChangeset::from_patch(patch.clone(), Utc::now().naive_utc());

        let affected = diesel::update(events::table.find(id.get()))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_event(&self, id: EventId) -> RepositoryResult<usize> {
        use crate::schema::events;

        let mut conn = self.conn()?;

        let affected = diesel::delete(events::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
