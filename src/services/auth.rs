use chrono::Utc;

use crate::domain::user::{NewUser, User};
use crate::dto::profile::ProfileDto;
use crate::forms::auth::{LoginPayload, RegisterPayload};
use crate::repository::{UserReader, UserWriter};

use super::{ServiceError, ServiceResult};

/// Theme assigned to new accounts.
const DEFAULT_THEME: &str = "pink";

/// Register a new account. Emails are unique; the password is stored only as
/// a bcrypt hash.
pub fn register_user<R>(payload: RegisterPayload, repo: &R) -> ServiceResult<ProfileDto>
where
    R: UserReader + UserWriter,
{
    let existing = repo.get_user_by_email(&payload.email).map_err(|e| {
        log::error!("Failed to look up email: {e}");
        ServiceError::from(e)
    })?;
    if existing.is_some() {
        return Err(ServiceError::InvalidInput(
            "a user with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST).map_err(|e| {
        log::error!("Failed to hash password: {e}");
        ServiceError::Internal
    })?;

    let user = NewUser {
        email: payload.email,
        username: payload.username,
        password_hash,
        theme: DEFAULT_THEME.to_string(),
        created_at: Utc::now().naive_utc(),
    };
    let stored = repo.create_user(&user).map_err(|e| {
        log::error!("Failed to create user: {e}");
        ServiceError::from(e)
    })?;

    Ok(ProfileDto::from(stored))
}

/// Verify credentials and return the account for session establishment.
pub fn login_user<R>(payload: LoginPayload, repo: &R) -> ServiceResult<User>
where
    R: UserReader,
{
    let Some(user) = repo.get_user_by_email(&payload.email).map_err(|e| {
        log::error!("Failed to look up email: {e}");
        ServiceError::from(e)
    })?
    else {
        return Err(ServiceError::Unauthorized);
    };

    let verified = bcrypt::verify(&payload.password, &user.password_hash).map_err(|e| {
        log::error!("Failed to verify password: {e}");
        ServiceError::Internal
    })?;
    if !verified {
        return Err(ServiceError::Unauthorized);
    }

    Ok(user)
}
