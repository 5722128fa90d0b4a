use chrono::NaiveDate;

use crate::auth::AuthenticatedUser;
use crate::domain::entry::consecutive_day_streak;
use crate::domain::user::{ProfilePatch, ProfileStats};
use crate::dto::profile::ProfileDto;
use crate::forms::auth::ProfileUpdatePayload;
use crate::repository::{EntryReader, EventReader, UserReader, UserWriter};

use super::{ServiceError, ServiceResult};

/// Streak scanning is bounded to the most recent entries; anything older
/// cannot extend a consecutive run that reaches today anyway.
const STREAK_ENTRY_SCAN_LIMIT: i64 = 100;

/// Recompute the profile aggregates, persist them on the user row and return
/// the refreshed profile.
pub fn show_profile<R>(
    user: &AuthenticatedUser,
    today: NaiveDate,
    repo: &R,
) -> ServiceResult<ProfileDto>
where
    R: UserReader + UserWriter + EventReader + EntryReader,
{
    let account = repo
        .get_user_by_id(user.user_id)
        .map_err(|e| {
            log::error!("Failed to load user {}: {e}", user.user_id);
            ServiceError::from(e)
        })?
        .ok_or(ServiceError::NotFound)?;

    let completed = repo.count_completed_events(user.user_id).map_err(|e| {
        log::error!("Failed to count completed tasks: {e}");
        ServiceError::from(e)
    })?;
    let total_days = repo.count_entries(user.user_id).map_err(|e| {
        log::error!("Failed to count journal entries: {e}");
        ServiceError::from(e)
    })?;
    let avg_mood = repo
        .average_mood(user.user_id)
        .map_err(|e| {
            log::error!("Failed to average mood ratings: {e}");
            ServiceError::from(e)
        })?
        .map(|avg| (avg * 10.0).round() / 10.0)
        .unwrap_or(0.0);
    let entries = repo
        .list_recent_entries(user.user_id, STREAK_ENTRY_SCAN_LIMIT)
        .map_err(|e| {
            log::error!("Failed to list journal entries: {e}");
            ServiceError::from(e)
        })?;
    let streak = consecutive_day_streak(&entries, today);

    let stats = ProfileStats {
        completed_tasks: completed as i32,
        total_days: total_days as i32,
        streak_days: streak as i32,
        avg_mood,
    };
    repo.store_profile_stats(user.user_id, &stats).map_err(|e| {
        log::error!("Failed to store profile stats: {e}");
        ServiceError::from(e)
    })?;

    let mut profile = ProfileDto::from(account);
    profile.completed_tasks = stats.completed_tasks;
    profile.total_days = stats.total_days;
    profile.streak_days = stats.streak_days;
    profile.avg_mood = stats.avg_mood;
    Ok(profile)
}

/// Update profile fields, re-hashing the password when one is supplied.
pub fn update_profile<R>(
    payload: ProfileUpdatePayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: UserReader + UserWriter,
{
    repo.get_user_by_id(user.user_id)
        .map_err(|e| {
            log::error!("Failed to load user {}: {e}", user.user_id);
            ServiceError::from(e)
        })?
        .ok_or(ServiceError::NotFound)?;

    let password_hash = match payload.new_password {
        Some(password) => Some(bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| {
            log::error!("Failed to hash new password: {e}");
            ServiceError::Internal
        })?),
        None => None,
    };

    let patch = ProfilePatch {
        username: payload.username,
        email: payload.email,
        theme: payload.theme,
        password_hash,
    };
    if patch.is_empty() {
        return Ok(());
    }

    repo.update_profile(user.user_id, &patch).map_err(|e| {
        log::error!("Failed to update profile: {e}");
        ServiceError::from(e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserId;
    use crate::domain::user::NewUser;
    use crate::repository::test::TestRepository;
    use crate::repository::{EventWriter, UserReader};

    fn account(repo: &TestRepository) -> AuthenticatedUser {
        let account = repo
            .create_user(&NewUser {
                email: "ola@example.com".to_string(),
                username: "ola".to_string(),
                password_hash: "x".to_string(),
                theme: "pink".to_string(),
                created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            })
            .unwrap();
        AuthenticatedUser {
            user_id: account.id,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 12).unwrap()
    }

    #[test]
    fn profile_aggregates_are_computed_and_persisted() {
        let repo = TestRepository::new();
        let user = account(&repo);
        let uid = user.user_id.get();

        repo.create_event(&crate::domain::event::NewEvent {
            user_id: user.user_id,
            title: crate::domain::types::EventTitle::new("done").unwrap(),
            description: String::new(),
            time: None,
            start_time: crate::domain::instant::build_start_instant("2025-11-10", None).unwrap(),
            category_id: None,
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        })
        .unwrap();

        let mut entries = vec![
            TestRepository::sample_entry(1, uid, "2025-11-12"),
            TestRepository::sample_entry(2, uid, "2025-11-11"),
        ];
        entries[0].mood_rating = crate::domain::types::MoodRating::new(8).unwrap();
        entries[1].mood_rating = crate::domain::types::MoodRating::new(5).unwrap();
        let repo = repo.with_entries(entries);

        let profile = show_profile(&user, today(), &repo).unwrap();

        assert_eq!(profile.completed_tasks, 0);
        assert_eq!(profile.total_days, 2);
        assert_eq!(profile.streak_days, 2);
        assert_eq!(profile.avg_mood, 6.5);

        let stored = repo.get_user_by_id(user.user_id).unwrap().unwrap();
        assert_eq!(stored.total_days, 2);
        assert_eq!(stored.streak_days, 2);
    }

    #[test]
    fn fresh_accounts_report_zeroes() {
        let repo = TestRepository::new();
        let user = account(&repo);

        let profile = show_profile(&user, today(), &repo).unwrap();

        assert_eq!(profile.total_days, 0);
        assert_eq!(profile.streak_days, 0);
        assert_eq!(profile.avg_mood, 0.0);
    }

    #[test]
    fn unknown_user_is_not_found() {
        let repo = TestRepository::new();
        let ghost = AuthenticatedUser {
            user_id: UserId::new(404).unwrap(),
        };
        assert_eq!(
            show_profile(&ghost, today(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn profile_update_changes_theme_without_touching_password() {
        let repo = TestRepository::new();
        let user = account(&repo);

        let payload = ProfileUpdatePayload {
            theme: Some("lavender".to_string()),
            ..ProfileUpdatePayload::default()
        };
        update_profile(payload, &user, &repo).unwrap();

        let stored = repo.get_user_by_id(user.user_id).unwrap().unwrap();
        assert_eq!(stored.theme, "lavender");
        assert_eq!(stored.password_hash, "x");
    }
}
