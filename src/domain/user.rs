use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Registered user together with the denormalized profile statistics that the
/// profile page recomputes on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
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

/// Data required to insert a new [`User`]. Counters start at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub theme: String,
    pub created_at: NaiveDateTime,
}

/// Aggregates recomputed from events and journal entries on profile reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileStats {
    pub completed_tasks: i32,
    pub total_days: i32,
    pub streak_days: i32,
    pub avg_mood: f64,
}

/// Partial update applied to a user's profile fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub theme: Option<String>,
    pub password_hash: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
