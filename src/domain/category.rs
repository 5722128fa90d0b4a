use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, HexColor, TypeConstraintError, UserId};

/// Canonical event category scoped to its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub user_id: UserId,
    pub name: CategoryName,
    pub icon: String,
    pub color_hex: HexColor,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub user_id: UserId,
    pub name: CategoryName,
    pub icon: String,
    pub color_hex: HexColor,
    pub created_at: NaiveDateTime,
}

/// Fixed category set seeded for every user on first calendar access.
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 6] = [
    ("Робота", "💼", "#FF5733"),
    ("Особисте", "🏠", "#33C3FF"),
    ("Спорт", "💪", "#4CAF50"),
    ("Навчання", "📚", "#9C27B0"),
    ("Здоров'я", "🏥", "#FF9800"),
    ("Розваги", "🎮", "#E91E63"),
];

/// Icon used when a custom category is created without one.
pub const FALLBACK_ICON: &str = "📌";

/// Color used when a custom category is created without one.
pub const FALLBACK_COLOR: &str = "#666666";

/// Build the default category batch for `user_id`, timestamped `now`.
pub fn default_categories(
    user_id: UserId,
    now: NaiveDateTime,
) -> Result<Vec<NewCategory>, TypeConstraintError> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, icon, color)| {
            Ok(NewCategory {
                user_id,
                name: CategoryName::new(*name)?,
                icon: (*icon).to_string(),
                color_hex: HexColor::new(*color)?,
                created_at: now,
            })
        })
        .collect()
}
