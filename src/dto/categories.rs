use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;

/// Category as listed on the calendar page and in the categories endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color_hex: String,
    pub created_at: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.into_inner(),
            icon: category.icon,
            color_hex: category.color_hex.into_inner(),
            created_at: category.created_at,
        }
    }
}
