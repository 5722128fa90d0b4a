use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::user::User;

/// Public view of a user account; the password hash never leaves the domain.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub email: String,
    pub username: String,
    pub theme: String,
    pub completed_tasks: i32,
    pub total_tasks: i32,
    pub total_days: i32,
    pub streak_days: i32,
    pub avg_mood: f64,
    pub created_at: NaiveDateTime,
}

impl From<User> for ProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            theme: user.theme,
            completed_tasks: user.completed_tasks,
            total_tasks: user.total_tasks,
            total_days: user.total_days,
            streak_days: user.streak_days,
            avg_mood: user.avg_mood,
            created_at: user.created_at,
        }
    }
}
