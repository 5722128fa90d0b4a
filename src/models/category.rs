use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryName, HexColor, TypeConstraintError};

/// Diesel model representing the `event_categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::event_categories)]
pub struct Category {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub icon: String,
    pub color_hex: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::event_categories)]
pub struct NewCategory {
    pub user_id: i32,
    pub name: String,
    pub icon: String,
    pub color_hex: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            user_id: category.user_id.try_into()?,
            name: CategoryName::new(category.name)?,
            icon: category.icon,
            color_hex: HexColor::new(category.color_hex)?,
            created_at: category.created_at,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            user_id: category.user_id.get(),
            name: category.name.into_inner(),
            icon: category.icon,
            color_hex: category.color_hex.into_inner(),
            created_at: category.created_at,
        }
    }
}
