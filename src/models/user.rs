use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::TypeConstraintError;
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

/// Diesel model representing the `users` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub theme: String,
    pub completed_tasks: i32,
    pub total_tasks: i32,
    pub total_days: i32,
    pub streak_days: i32,
    pub avg_mood: f64,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`User`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub theme: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id.try_into()?,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            theme: user.theme,
            completed_tasks: user.completed_tasks,
            total_tasks: user.total_tasks,
            total_days: user.total_days,
            streak_days: user.streak_days,
            avg_mood: user.avg_mood,
            created_at: user.created_at,
        })
    }
}

impl From<DomainNewUser> for NewUser {
    fn from(user: DomainNewUser) -> Self {
        Self {
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            theme: user.theme,
            created_at: user.created_at,
        }
    }
}
