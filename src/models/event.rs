use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::event::{
    Event as DomainEvent, EventPatch as DomainEventPatch, NewEvent as DomainNewEvent,
};
use crate::domain::instant;
use crate::domain::types::{CategoryId, EventTitle, TypeConstraintError};

/// Diesel model representing the `events` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::events)]
pub struct Event {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub time: Option<String>,
    pub start_time: String,
    pub is_completed: bool,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Event`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::events)]
pub struct NewEvent {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub time: Option<String>,
    pub start_time: String,
    pub is_completed: bool,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset form of [`Event`] used for partial updates.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::events)]
pub struct EventChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<Option<String>>,
    pub start_time: Option<String>,
    pub is_completed: Option<bool>,
    pub category_id: Option<Option<i32>>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Event> for DomainEvent {
    type Error = TypeConstraintError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        Ok(Self {
            id: event.id.try_into()?,
            user_id: event.user_id.try_into()?,
            title: EventTitle::new(event.title)?,
            description: event.description,
            time: event.time,
            start_time: event.start_time,
            is_completed: event.is_completed,
            // Dangling or corrupt category references degrade to "no
            // category" instead of poisoning the row.
            category_id: event.category_id.and_then(|id| CategoryId::new(id).ok()),
            created_at: event.created_at,
            updated_at: event.updated_at,
        })
    }
}

impl From<DomainNewEvent> for NewEvent {
    fn from(event: DomainNewEvent) -> Self {
        Self {
            user_id: event.user_id.get(),
            title: event.title.into_inner(),
            description: event.description,
            time: event.time,
            start_time: instant::format_stored_instant(event.start_time),
            is_completed: false,
            category_id: event.category_id.map(CategoryId::get),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl EventChangeset {
    /// Build a changeset from a domain patch, stamping `updated_at`.
    pub fn from_patch(patch: DomainEventPatch, updated_at: NaiveDateTime) -> Self {
        Self {
            title: patch.title.map(EventTitle::into_inner),
            description: patch.description,
            time: patch.time,
            start_time: patch.start_time.map(instant::format_stored_instant),
            is_completed: patch.is_completed,
            category_id: patch
                .category_id
                .map(|id| id.map(CategoryId::get)),
            updated_at,
        }
    }
}
