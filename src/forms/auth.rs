use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("Auth form validation failed: {0}")]
    Validation(String),
    #[error("Auth form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AuthFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AuthFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterPayload {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl TryFrom<RegisterForm> for RegisterPayload {
    type Error = AuthFormError;

    fn try_from(value: RegisterForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            email: value.email.trim().to_string(),
            username: value
                .username
                .map(|u| u.trim().to_string())
                .unwrap_or_default(),
            password: value.password,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginForm> for LoginPayload {
    type Error = AuthFormError;

    fn try_from(value: LoginForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            email: value.email.trim().to_string(),
            password: value.password,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdateForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 8))]
    pub new_password: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdatePayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub new_password: Option<String>,
    pub theme: Option<String>,
}

impl TryFrom<ProfileUpdateForm> for ProfileUpdatePayload {
    type Error = AuthFormError;

    fn try_from(value: ProfileUpdateForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            username: value.username.map(|u| u.trim().to_string()),
            email: value.email.map(|e| e.trim().to_string()),
            new_password: value.new_password,
            theme: value.theme.map(|t| t.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_requires_well_formed_email() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            username: None,
            password: "hunter2hunter2".to_string(),
        };
        let payload: Result<RegisterPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn register_defaults_username_to_empty() {
        let form = RegisterForm {
            email: "ola@example.com".to_string(),
            username: None,
            password: "hunter2hunter2".to_string(),
        };
        let payload: RegisterPayload = form.try_into().unwrap();
        assert_eq!(payload.username, "");
    }
}
