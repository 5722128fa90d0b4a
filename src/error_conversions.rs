//! Error conversion glue between the layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! cross-layer `From` impls live here in one place.

use crate::domain::types::TypeConstraintError;
use crate::forms::auth::AuthFormError;
use crate::forms::categories::CategoryFormError;
use crate::forms::stickers::StickerFormError;
use crate::forms::tasks::TaskFormError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            // Failures to obtain the query result itself abort the request.
            RepositoryError::Pool(_) | RepositoryError::Database(_) => ServiceError::Unavailable,
            RepositoryError::Validation(_) => ServiceError::Internal,
        }
    }
}

impl From<TaskFormError> for ServiceError {
    fn from(val: TaskFormError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}

impl From<StickerFormError> for ServiceError {
    fn from(val: StickerFormError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}

impl From<AuthFormError> for ServiceError {
    fn from(val: AuthFormError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}
