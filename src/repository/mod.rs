use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::entry::DayEntry;
use crate::domain::event::{Event, EventPatch, InstantRange, NewEvent};
use crate::domain::types::{CategoryId, EventId, UserId};
use crate::domain::user::{NewUser, ProfilePatch, ProfileStats, User};

pub mod category;
pub mod entry;
pub mod errors;
pub mod event;
pub mod sticker;
#[cfg(test)]
pub mod test;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Verify the store is reachable; used by the health endpoint.
    pub fn ping(&self) -> RepositoryResult<()> {
        self.conn().map(|_| ())
    }
}

/// Read-only operations for calendar events.
pub trait EventReader {
    /// List a user's events whose stored start instant falls in the half-open
    /// `range`, ordered ascending by start instant.
    fn list_events_in_range(
        &self,
        user_id: UserId,
        range: InstantRange,
    ) -> RepositoryResult<Vec<Event>>;
    /// Retrieve an event by its identifier.
    fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>>;
    /// Count a user's completed events.
    fn count_completed_events(&self, user_id: UserId) -> RepositoryResult<i64>;
}

/// Write operations for calendar events.
pub trait EventWriter {
    /// Persist a new event and return the stored row.
    fn create_event(&self, event: &NewEvent) -> RepositoryResult<Event>;
    /// Apply a partial update to an event.
    fn update_event(&self, id: EventId, patch: &EventPatch) -> RepositoryResult<usize>;
    /// Delete an event, returning the number of rows removed.
    fn delete_event(&self, id: EventId) -> RepositoryResult<usize>;
}

/// Read-only operations for event categories.
pub trait CategoryReader {
    /// List all categories owned by `user_id`, ordered by creation.
    fn list_categories(&self, user_id: UserId) -> RepositoryResult<Vec<Category>>;
    /// Whether the user owns any category at all.
    fn has_categories(&self, user_id: UserId) -> RepositoryResult<bool>;
    /// Retrieve a category by its identifier and owner.
    fn get_category_by_id(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Category>>;
}

/// Write operations for event categories.
pub trait CategoryWriter {
    /// Persist a new category and return the stored row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Persist a batch of categories in one statement (default seeding).
    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<usize>;
}

/// Read-only operations for journal entries.
pub trait EntryReader {
    /// The user's most recent entries, ordered descending by date.
    fn list_recent_entries(&self, user_id: UserId, limit: i64) -> RepositoryResult<Vec<DayEntry>>;
    /// Total number of journaled days.
    fn count_entries(&self, user_id: UserId) -> RepositoryResult<i64>;
    /// Mean mood rating across all entries, `None` when there are none.
    fn average_mood(&self, user_id: UserId) -> RepositoryResult<Option<f64>>;
}

/// Read-only operations for day stickers.
pub trait StickerReader {
    /// Sticker glyphs attached to `(user_id, date)`.
    fn list_stickers(&self, user_id: UserId, date: &str) -> RepositoryResult<Vec<String>>;
}

/// Write operations for day stickers.
pub trait StickerWriter {
    /// Add a glyph to the `(user_id, date)` set. Adding an existing glyph is
    /// a no-op; returns the number of rows actually inserted.
    fn add_sticker(&self, user_id: UserId, date: &str, sticker: &str) -> RepositoryResult<usize>;
}

/// Read-only operations for user accounts.
pub trait UserReader {
    /// Retrieve a user by identifier.
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Retrieve a user by email.
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations for user accounts.
pub trait UserWriter {
    /// Persist a new user and return the stored row.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
    /// Apply a partial update to profile fields.
    fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepositoryResult<usize>;
    /// Relatively adjust the task counters in a single statement. The store's
    /// per-row atomicity is the only coordination between concurrent writers.
    fn adjust_task_counters(
        &self,
        id: UserId,
        total_delta: i32,
        completed_delta: i32,
    ) -> RepositoryResult<usize>;
    /// Overwrite the denormalized profile statistics.
    fn store_profile_stats(&self, id: UserId, stats: &ProfileStats) -> RepositoryResult<usize>;
}
