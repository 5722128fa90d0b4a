use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};

use crate::auth::AuthenticatedUser;
use crate::domain::category::Category;
use crate::domain::event::{Event, EventPatch, InstantRange, NewEvent};
use crate::domain::instant;
use crate::domain::types::{CategoryId, EventId};
use crate::dto::tasks::TaskSummary;
use crate::forms::tasks::{AddTaskPayload, UpdateTaskPayload};
use crate::repository::{CategoryReader, EventReader, EventWriter, UserWriter};

use super::{ServiceError, ServiceResult};

/// Shape one event for output: attach the cached category summary and prefer
/// the cached `HH:MM` string over the instant-derived one.
pub(crate) fn summarize_event(
    event: &Event,
    instant: NaiveDateTime,
    cache: &HashMap<CategoryId, Category>,
) -> TaskSummary {
    let category = super::categories::resolve_summary(event.category_id, cache);
    TaskSummary::from_event(event, instant, category)
}

/// Tasks for one calendar day, ordered by start instant.
///
/// Tasks whose stored start value cannot be normalized are dropped from the
/// result, mirroring the calendar's silent-exclusion policy.
pub fn list_tasks_for_day<R>(
    user: &AuthenticatedUser,
    date: &str,
    repo: &R,
) -> ServiceResult<Vec<TaskSummary>>
where
    R: EventReader + CategoryReader,
{
    let date = instant::parse_date(date)?;
    let range = InstantRange::whole_day(date);

    let events = repo.list_events_in_range(user.user_id, range).map_err(|e| {
        log::error!("Failed to list tasks for {date}: {e}");
        ServiceError::from(e)
    })?;
    let cache = super::categories::category_cache(repo.list_categories(user.user_id).map_err(
        |e| {
            log::error!("Failed to load categories: {e}");
            ServiceError::from(e)
        },
    )?);

    Ok(events
        .iter()
        .filter_map(|event| match instant::parse_stored_instant(&event.start_time) {
            Some(instant) => Some(summarize_event(event, instant, &cache)),
            None => {
                log::warn!("task {} has an unparseable start instant, dropped", event.id);
                None
            }
        })
        .collect())
}

/// Create a task and bump the owner's total-task counter.
///
/// Returns the new task's identifier token.
pub fn add_task<R>(
    payload: AddTaskPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<String>
where
    R: EventWriter + UserWriter,
{
    let start_time = instant::build_start_instant(&payload.date, payload.time.as_deref())?;
    // Only a well-formed HH:MM string is worth caching; a malformed one
    // already degraded the start instant to midnight.
    let time = payload
        .time
        .filter(|t| instant::is_valid_time_of_day(t))
        .map(|t| t.trim().to_string());

    let now = Utc::now().naive_utc();
    let event = NewEvent {
        user_id: user.user_id,
        title: payload.title,
        description: payload.description,
        time,
        start_time,
        category_id: payload.category_id,
        created_at: now,
        updated_at: now,
    };

    let stored = repo.create_event(&event).map_err(|e| {
        log::error!("Failed to create task: {e}");
        ServiceError::from(e)
    })?;

    // Counter maintenance is best-effort; the task itself is already stored.
    if let Err(e) = repo.adjust_task_counters(user.user_id, 1, 0) {
        log::error!("Failed to bump total task counter: {e}");
    }

    Ok(stored.id.to_string())
}

fn owned_task<R>(task_id: EventId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<Event>
where
    R: EventReader,
{
    let task = repo.get_event_by_id(task_id).map_err(|e| {
        log::error!("Failed to get task {task_id}: {e}");
        ServiceError::from(e)
    })?;
    match task {
        Some(task) if task.user_id == user.user_id => Ok(task),
        _ => Err(ServiceError::NotFound),
    }
}

/// Apply a partial edit to a task.
///
/// A date change rebuilds the start instant from the new date plus the new or
/// previously cached time; editing only the time updates the cached display
/// string without moving the instant.
pub fn update_task<R>(
    task_id: EventId,
    payload: UpdateTaskPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: EventReader + EventWriter,
{
    let task = owned_task(task_id, user, repo)?;

    let mut patch = EventPatch {
        title: payload.title,
        description: payload.description,
        category_id: payload.category_id,
        ..EventPatch::default()
    };
    if let Some(time) = payload.time.clone() {
        patch.time = Some(time.filter(|t| instant::is_valid_time_of_day(t)));
    }
    if let Some(date) = &payload.date {
        let new_time = payload.time.flatten().or_else(|| task.time.clone());
        patch.start_time = Some(instant::build_start_instant(date, new_time.as_deref())?);
        if let Some(t) = new_time.filter(|t| instant::is_valid_time_of_day(t)) {
            patch.time = Some(Some(t));
        }
    }

    if patch.is_empty() {
        return Ok(());
    }

    repo.update_event(task_id, &patch).map_err(|e| {
        log::error!("Failed to update task {task_id}: {e}");
        ServiceError::from(e)
    })?;

    Ok(())
}

/// Flip a task's completion flag, adjusting the owner's completed counter by
/// ±1. Returns the new state.
pub fn toggle_task<R>(
    task_id: EventId,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: EventReader + EventWriter + UserWriter,
{
    let task = owned_task(task_id, user, repo)?;
    let new_state = !task.is_completed;

    let patch = EventPatch {
        is_completed: Some(new_state),
        ..EventPatch::default()
    };
    repo.update_event(task_id, &patch).map_err(|e| {
        log::error!("Failed to toggle task {task_id}: {e}");
        ServiceError::from(e)
    })?;

    let delta = if new_state { 1 } else { -1 };
    if let Err(e) = repo.adjust_task_counters(user.user_id, 0, delta) {
        log::error!("Failed to adjust completed task counter: {e}");
    }

    Ok(new_state)
}

/// Delete a task owned by the user.
pub fn delete_task<R>(task_id: EventId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: EventReader + EventWriter,
{
    owned_task(task_id, user, repo)?;

    let affected = repo.delete_event(task_id).map_err(|e| {
        log::error!("Failed to delete task {task_id}: {e}");
        ServiceError::from(e)
    })?;
    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EventTitle, UserId};
    use crate::domain::user::NewUser;
    use crate::repository::test::TestRepository;
    use crate::repository::UserReader;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: UserId::new(1).unwrap(),
        }
    }

    fn payload(title: &str, date: &str, time: Option<&str>) -> AddTaskPayload {
        AddTaskPayload {
            title: EventTitle::new(title).unwrap(),
            description: String::new(),
            date: date.to_string(),
            time: time.map(str::to_string),
            category_id: None,
        }
    }

    fn repo_with_account() -> (TestRepository, AuthenticatedUser) {
        let repo = TestRepository::new();
        let account = repo
            .create_user(&NewUser {
                email: "ola@example.com".to_string(),
                username: "ola".to_string(),
                password_hash: "x".to_string(),
                theme: "pink".to_string(),
                created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            })
            .unwrap();
        let user = AuthenticatedUser {
            user_id: account.id,
        };
        (repo, user)
    }

    #[test]
    fn day_listing_requires_a_well_formed_date() {
        let repo = TestRepository::new();
        let err = list_tasks_for_day(&sample_user(), "someday", &repo).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn day_listing_drops_unparseable_start_instants() {
        let user = sample_user();
        let repo = TestRepository::new().with_events(vec![
            TestRepository::sample_event(1, 1, "2025-11-12 09:30:00"),
            TestRepository::sample_event(2, 1, "2025-11-12 late evening"),
        ]);

        let tasks = list_tasks_for_day(&user, "2025-11-12", &repo).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].time.as_deref(), Some("09:30"));
    }

    #[test]
    fn day_listing_is_scoped_to_the_owner() {
        let user = sample_user();
        let repo = TestRepository::new().with_events(vec![
            TestRepository::sample_event(1, 1, "2025-11-12 09:30:00"),
            TestRepository::sample_event(2, 2, "2025-11-12 10:00:00"),
        ]);

        let tasks = list_tasks_for_day(&user, "2025-11-12", &repo).unwrap();

        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn add_task_does_not_cache_malformed_times() {
        let (repo, user) = repo_with_account();

        let id = add_task(payload("stretch", "2025-11-12", Some("25:99")), &user, &repo).unwrap();

        let event_id = EventId::new(id.parse().unwrap()).unwrap();
        let stored = repo.get_event_by_id(event_id).unwrap().unwrap();
        assert_eq!(stored.time, None);
        assert_eq!(stored.start_time, "2025-11-12 00:00:00");
    }

    #[test]
    fn add_task_rejects_malformed_dates() {
        let (repo, user) = repo_with_account();
        let err = add_task(payload("stretch", "someday", None), &user, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn toggling_twice_restores_state_and_counter() {
        let (repo, user) = repo_with_account();
        let id = add_task(payload("stretch", "2025-11-12", None), &user, &repo).unwrap();
        let event_id = EventId::new(id.parse().unwrap()).unwrap();

        assert!(toggle_task(event_id, &user, &repo).unwrap());
        let mid = repo.get_user_by_id(user.user_id).unwrap().unwrap();
        assert_eq!(mid.completed_tasks, 1);

        assert!(!toggle_task(event_id, &user, &repo).unwrap());
        let after = repo.get_user_by_id(user.user_id).unwrap().unwrap();
        assert_eq!(after.completed_tasks, 0);
        let stored = repo.get_event_by_id(event_id).unwrap().unwrap();
        assert!(!stored.is_completed);
    }

    #[test]
    fn editing_the_date_rebuilds_the_start_instant() {
        let (repo, user) = repo_with_account();
        let id = add_task(payload("stretch", "2025-11-12", Some("09:30")), &user, &repo).unwrap();
        let event_id = EventId::new(id.parse().unwrap()).unwrap();

        let edit = UpdateTaskPayload {
            date: Some("2025-11-20".to_string()),
            ..UpdateTaskPayload::default()
        };
        update_task(event_id, edit, &user, &repo).unwrap();

        let stored = repo.get_event_by_id(event_id).unwrap().unwrap();
        // The cached time survives and travels with the new date.
        assert_eq!(stored.start_time, "2025-11-20 09:30:00");
        assert_eq!(stored.time.as_deref(), Some("09:30"));
    }

    #[test]
    fn mutating_someone_elses_task_is_not_found() {
        let (repo, user) = repo_with_account();
        let id = add_task(payload("stretch", "2025-11-12", None), &user, &repo).unwrap();
        let event_id = EventId::new(id.parse().unwrap()).unwrap();

        let stranger = AuthenticatedUser {
            user_id: UserId::new(999).unwrap(),
        };
        assert_eq!(
            toggle_task(event_id, &stranger, &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(
            delete_task(event_id, &stranger, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn unknown_task_is_not_found() {
        let (repo, user) = repo_with_account();
        let missing = EventId::new(4242).unwrap();
        assert_eq!(
            update_task(missing, UpdateTaskPayload::default(), &user, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
