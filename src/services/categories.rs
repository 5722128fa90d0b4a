use std::collections::HashMap;

use chrono::Utc;

use crate::auth::AuthenticatedUser;
use crate::domain::category::{Category, default_categories};
use crate::domain::types::{CategoryId, UserId};
use crate::dto::categories::CategoryDto;
use crate::dto::tasks::CategorySummary;
use crate::forms::categories::AddCategoryPayload;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Seed the fixed default category set for `user_id` if, and only if, the
/// user owns no category at all. Any pre-existing category (even a single
/// custom one) makes this a no-op, so repeated calls stay idempotent.
pub fn ensure_default_categories<R>(user_id: UserId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let seeded = repo.has_categories(user_id).map_err(|e| {
        log::error!("Failed to check categories for user {user_id}: {e}");
        ServiceError::from(e)
    })?;
    if seeded {
        return Ok(());
    }

    let defaults = default_categories(user_id, Utc::now().naive_utc()).map_err(|e| {
        log::error!("Default category set failed validation: {e}");
        ServiceError::Internal
    })?;
    repo.create_categories(&defaults).map_err(|e| {
        log::error!("Failed to seed default categories for user {user_id}: {e}");
        ServiceError::from(e)
    })?;

    Ok(())
}

/// List a user's categories, seeding the defaults on first access so the
/// result is never empty for a fresh account.
pub fn show_categories<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader + CategoryWriter,
{
    ensure_default_categories(user.user_id, repo)?;

    match repo.list_categories(user.user_id) {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::from(e))
        }
    }
}

/// Persist a custom category for the user.
pub fn add_category<R>(
    payload: AddCategoryPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category(user.user_id);
    match repo.create_category(&category) {
        Ok(stored) => Ok(CategoryDto::from(stored)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::from(e))
        }
    }
}

/// Index a category list by id for per-task lookups. Built once per
/// calendar/day request so attaching categories never costs extra queries.
pub fn category_cache(categories: Vec<Category>) -> HashMap<CategoryId, Category> {
    categories.into_iter().map(|c| (c.id, c)).collect()
}

/// Resolve a task's category reference against the pre-loaded cache.
/// Absent ids and dangling references both resolve to `None`.
pub fn resolve_summary(
    category_id: Option<CategoryId>,
    cache: &HashMap<CategoryId, Category>,
) -> Option<CategorySummary> {
    category_id
        .and_then(|id| cache.get(&id))
        .map(CategorySummary::from)
}
