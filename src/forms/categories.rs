use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{FALLBACK_COLOR, FALLBACK_ICON, NewCategory};
use crate::domain::types::{CategoryName, HexColor, TypeConstraintError, UserId};

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryPayload {
    pub name: CategoryName,
    pub icon: String,
    pub color_hex: HexColor,
}

impl AddCategoryPayload {
    pub fn into_new_category(self, user_id: UserId) -> NewCategory {
        NewCategory {
            user_id,
            name: self.name,
            icon: self.icon,
            color_hex: self.color_hex,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryPayload {
    type Error = CategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let icon = value
            .icon
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| FALLBACK_ICON.to_string());
        let color_hex = match value.color_hex {
            Some(color) => HexColor::new(color)?,
            None => HexColor::new(FALLBACK_COLOR)?,
        };
        Ok(Self {
            name: CategoryName::new(value.name)?,
            icon,
            color_hex,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_and_color_fall_back_to_defaults() {
        let form = AddCategoryForm {
            name: "Подорожі".to_string(),
            icon: None,
            color_hex: None,
        };

        let payload: AddCategoryPayload = form.try_into().unwrap();
        assert_eq!(payload.icon, FALLBACK_ICON);
        assert_eq!(payload.color_hex.as_str(), FALLBACK_COLOR);
    }

    #[test]
    fn malformed_color_is_rejected() {
        let form = AddCategoryForm {
            name: "Подорожі".to_string(),
            icon: None,
            color_hex: Some("bright red".to_string()),
        };

        let payload: Result<AddCategoryPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
