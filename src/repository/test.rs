use std::sync::Mutex;

use chrono::Utc;

use crate::domain::category::{Category, NewCategory};
use crate::domain::entry::DayEntry;
use crate::domain::event::{Event, EventPatch, InstantRange, NewEvent};
use crate::domain::instant;
use crate::domain::types::{CategoryId, EntryId, EventId, EventTitle, UserId};
use crate::domain::user::{NewUser, ProfilePatch, ProfileStats, User};
use crate::repository::{
    CategoryReader, CategoryWriter, EntryReader, EventReader, EventWriter, RepositoryError,
    RepositoryResult, StickerReader, StickerWriter, UserReader, UserWriter,
};

#[derive(Default)]
struct State {
    events: Vec<Event>,
    categories: Vec<Category>,
    entries: Vec<DayEntry>,
    stickers: Vec<(UserId, String, String)>,
    users: Vec<User>,
    next_id: i32,
}

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
    failing: bool,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails like an unreachable store.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_events(self, events: Vec<Event>) -> Self {
        self.state.lock().expect("test state poisoned").events = events;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.state.lock().expect("test state poisoned").categories = categories;
        self
    }

    pub fn with_entries(self, entries: Vec<DayEntry>) -> Self {
        self.state.lock().expect("test state poisoned").entries = entries;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state.lock().expect("test state poisoned").users = users;
        self
    }

    pub fn with_stickers(self, stickers: Vec<(UserId, String, String)>) -> Self {
        self.state.lock().expect("test state poisoned").stickers = stickers;
        self
    }

    fn guard(&self) -> RepositoryResult<std::sync::MutexGuard<'_, State>> {
        if self.failing {
            return Err(RepositoryError::Database(
                diesel::result::Error::BrokenTransactionManager,
            ));
        }
        Ok(self.state.lock().expect("test state poisoned"))
    }

    fn next_id(state: &mut State) -> i32 {
        state.next_id += 1;
        state.next_id + 1000
    }
}

impl EventReader for TestRepository {
    fn list_events_in_range(
        &self,
        user_id: UserId,
        range: InstantRange,
    ) -> RepositoryResult<Vec<Event>> {
        let state = self.guard()?;
        // Mimics the lexicographic TEXT comparison the SQLite query performs.
        let start = instant::format_stored_instant(range.start);
        let end = instant::format_stored_instant(range.end);

        let mut events: Vec<Event> = state
            .events
            .iter()
            .filter(|e| {
                e.user_id == user_id
                    && e.start_time.as_str() >= start.as_str()
                    && e.start_time.as_str() < end.as_str()
            })
            .cloned()
            .collect();
        events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(events)
    }

    fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>> {
        let state = self.guard()?;
        Ok(state.events.iter().find(|e| e.id == id).cloned())
    }

    fn count_completed_events(&self, user_id: UserId) -> RepositoryResult<i64> {
        let state = self.guard()?;
        Ok(state
            .events
            .iter()
            .filter(|e| e.user_id == user_id && e.is_completed)
            .count() as i64)
    }
}

impl EventWriter for TestRepository {
    fn create_event(&self, event: &NewEvent) -> RepositoryResult<Event> {
        let mut state = self.guard()?;
        let id = Self::next_id(&mut state);
        let stored = Event {
            id: EventId::new(id).map_err(|e| RepositoryError::Validation(e.to_string()))?,
            user_id: event.user_id,
            title: event.title.clone(),
            description: event.description.clone(),
            time: event.time.clone(),
            start_time: instant::format_stored_instant(event.start_time),
            is_completed: false,
            category_id: event.category_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        };
        state.events.push(stored.clone());
        Ok(stored)
    }

    fn update_event(&self, id: EventId, patch: &EventPatch) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let Some(event) = state.events.iter_mut().find(|e| e.id == id) else {
            return Ok(0);
        };
        if let Some(title) = &patch.title {
            event.title = title.clone();
        }
        if let Some(description) = &patch.description {
            event.description = description.clone();
        }
        if let Some(time) = &patch.time {
            event.time = time.clone();
        }
        if let Some(start_time) = patch.start_time {
            event.start_time = instant::format_stored_instant(start_time);
        }
        if let Some(category_id) = patch.category_id {
            event.category_id = category_id;
        }
        if let Some(is_completed) = patch.is_completed {
            event.is_completed = is_completed;
        }
        event.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    fn delete_event(&self, id: EventId) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let before = state.events.len();
        state.events.retain(|e| e.id != id);
        Ok(before - state.events.len())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self, user_id: UserId) -> RepositoryResult<Vec<Category>> {
        let state = self.guard()?;
        Ok(state
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    fn has_categories(&self, user_id: UserId) -> RepositoryResult<bool> {
        let state = self.guard()?;
        Ok(state.categories.iter().any(|c| c.user_id == user_id))
    }

    fn get_category_by_id(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Category>> {
        let state = self.guard()?;
        Ok(state
            .categories
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let mut state = self.guard()?;
        let id = Self::next_id(&mut state);
        let stored = Category {
            id: CategoryId::new(id).map_err(|e| RepositoryError::Validation(e.to_string()))?,
            user_id: category.user_id,
            name: category.name.clone(),
            icon: category.icon.clone(),
            color_hex: category.color_hex.clone(),
            created_at: category.created_at,
        };
        state.categories.push(stored.clone());
        Ok(stored)
    }

    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<usize> {
        for category in categories {
            self.create_category(category)?;
        }
        Ok(categories.len())
    }
}

impl EntryReader for TestRepository {
    fn list_recent_entries(&self, user_id: UserId, limit: i64) -> RepositoryResult<Vec<DayEntry>> {
        let state = self.guard()?;
        let mut entries: Vec<DayEntry> = state
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(limit as usize);
        Ok(entries)
    }

    fn count_entries(&self, user_id: UserId) -> RepositoryResult<i64> {
        let state = self.guard()?;
        Ok(state.entries.iter().filter(|e| e.user_id == user_id).count() as i64)
    }

    fn average_mood(&self, user_id: UserId) -> RepositoryResult<Option<f64>> {
        let state = self.guard()?;
        let ratings: Vec<i64> = state
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| i64::from(e.mood_rating.get()))
            .collect();
        if ratings.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            ratings.iter().sum::<i64>() as f64 / ratings.len() as f64,
        ))
    }
}

impl StickerReader for TestRepository {
    fn list_stickers(&self, user_id: UserId, date: &str) -> RepositoryResult<Vec<String>> {
        let state = self.guard()?;
        Ok(state
            .stickers
            .iter()
            .filter(|(owner, day, _)| *owner == user_id && day == date)
            .map(|(_, _, glyph)| glyph.clone())
            .collect())
    }
}

impl StickerWriter for TestRepository {
    fn add_sticker(&self, user_id: UserId, date: &str, sticker: &str) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let exists = state
            .stickers
            .iter()
            .any(|(owner, day, glyph)| *owner == user_id && day == date && glyph == sticker);
        if exists {
            return Ok(0);
        }
        state
            .stickers
            .push((user_id, date.to_string(), sticker.to_string()));
        Ok(1)
    }
}

impl UserReader for TestRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let state = self.guard()?;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let state = self.guard()?;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }
}

impl UserWriter for TestRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        let mut state = self.guard()?;
        let id = Self::next_id(&mut state);
        let stored = User {
            id: UserId::new(id).map_err(|e| RepositoryError::Validation(e.to_string()))?,
            email: user.email.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            theme: user.theme.clone(),
            completed_tasks: 0,
            total_tasks: 0,
            total_days: 0,
            streak_days: 0,
            avg_mood: 0.0,
            created_at: user.created_at,
        };
        state.users.push(stored.clone());
        Ok(stored)
    }

    fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(0);
        };
        if let Some(username) = &patch.username {
            user.username = username.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(theme) = &patch.theme {
            user.theme = theme.clone();
        }
        if let Some(password_hash) = &patch.password_hash {
            user.password_hash = password_hash.clone();
        }
        Ok(1)
    }

    fn adjust_task_counters(
        &self,
        id: UserId,
        total_delta: i32,
        completed_delta: i32,
    ) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(0);
        };
        user.total_tasks += total_delta;
        user.completed_tasks += completed_delta;
        Ok(1)
    }

    fn store_profile_stats(&self, id: UserId, stats: &ProfileStats) -> RepositoryResult<usize> {
        let mut state = self.guard()?;
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(0);
        };
        user.completed_tasks = stats.completed_tasks;
        user.total_days = stats.total_days;
        user.streak_days = stats.streak_days;
        user.avg_mood = stats.avg_mood;
        Ok(1)
    }
}

/// Convenience constructors shared by service unit tests.
impl TestRepository {
    pub fn sample_event(id: i32, user_id: i32, start_time: &str) -> Event {
        let now = chrono::DateTime::from_timestamp(0, 0)
            .expect("valid timestamp")
            .naive_utc();
        Event {
            id: EventId::new(id).expect("valid event id"),
            user_id: UserId::new(user_id).expect("valid user id"),
            title: EventTitle::new("sample task").expect("valid title"),
            description: String::new(),
            time: None,
            start_time: start_time.to_string(),
            is_completed: false,
            category_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn sample_entry(id: i32, user_id: i32, date: &str) -> DayEntry {
        let now = chrono::DateTime::from_timestamp(0, 0)
            .expect("valid timestamp")
            .naive_utc();
        DayEntry {
            id: EntryId::new(id).expect("valid entry id"),
            user_id: UserId::new(user_id).expect("valid user id"),
            date: date.to_string(),
            description: String::new(),
            mood_rating: crate::domain::types::MoodRating::new(5).expect("valid mood"),
            created_at: now,
        }
    }
}
