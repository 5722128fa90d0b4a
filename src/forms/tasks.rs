use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, EventTitle, TypeConstraintError};
use crate::forms::double_option;

/// Category tokens arrive as opaque strings; anything that does not resolve
/// to a positive integer id degrades to "no category" rather than rejecting
/// the whole request.
fn parse_category_token(token: &str) -> Option<CategoryId> {
    token
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(|raw| CategoryId::new(raw).ok())
}

#[derive(Debug, Error)]
pub enum TaskFormError {
    #[error("Task form validation failed: {0}")]
    Validation(String),
    #[error("Task form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for TaskFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for TaskFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddTaskPayload {
    pub title: EventTitle,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl TryFrom<AddTaskForm> for AddTaskPayload {
    type Error = TaskFormError;

    fn try_from(value: AddTaskForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: EventTitle::new(value.title)?,
            description: value.description.unwrap_or_default().trim().to_string(),
            date: value.date,
            time: value.time,
            category_id: value.category_id.as_deref().and_then(parse_category_token),
        })
    }
}

/// Partial task edit. Absent fields stay untouched; explicit `null` on
/// `time`/`category_id` clears the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTaskPayload {
    pub title: Option<EventTitle>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<Option<String>>,
    pub category_id: Option<Option<CategoryId>>,
}

impl TryFrom<UpdateTaskForm> for UpdateTaskPayload {
    type Error = TaskFormError;

    fn try_from(value: UpdateTaskForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: value.title.map(EventTitle::new).transpose()?,
            description: value.description.map(|d| d.trim().to_string()),
            date: value.date,
            time: value.time,
            category_id: value
                .category_id
                .map(|id| id.as_deref().and_then(parse_category_token)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_task_trims_description_and_title() {
        let form = AddTaskForm {
            title: " water the plants ".to_string(),
            description: Some("  balcony only  ".to_string()),
            date: "2025-11-12".to_string(),
            time: None,
            category_id: None,
        };

        let payload: AddTaskPayload = form.try_into().unwrap();
        assert_eq!(payload.title.as_str(), "water the plants");
        assert_eq!(payload.description, "balcony only");
    }

    #[test]
    fn add_task_rejects_blank_title() {
        let form = AddTaskForm {
            title: "".to_string(),
            description: None,
            date: "2025-11-12".to_string(),
            time: None,
            category_id: None,
        };

        let payload: Result<AddTaskPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn invalid_category_token_degrades_to_none() {
        let form = AddTaskForm {
            title: "call mom".to_string(),
            description: None,
            date: "2025-11-12".to_string(),
            time: Some("18:00".to_string()),
            category_id: Some("definitely-not-an-id".to_string()),
        };

        let payload: AddTaskPayload = form.try_into().unwrap();
        assert_eq!(payload.category_id, None);
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let absent: UpdateTaskForm = serde_json::from_str(r#"{"title":"new"}"#).unwrap();
        let payload: UpdateTaskPayload = absent.try_into().unwrap();
        assert_eq!(payload.category_id, None);

        let cleared: UpdateTaskForm =
            serde_json::from_str(r#"{"category_id":null,"time":null}"#).unwrap();
        let payload: UpdateTaskPayload = cleared.try_into().unwrap();
        assert_eq!(payload.category_id, Some(None));
        assert_eq!(payload.time, Some(None));
    }
}
