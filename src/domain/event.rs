use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, EventId, EventTitle, UserId};

/// Canonical calendar event (task) scoped to its owner.
///
/// `start_time` is kept in its stored text form; readers normalize it through
/// [`crate::domain::instant::parse_stored_instant`] because legacy rows may
/// hold any of several historical formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub user_id: UserId,
    pub title: EventTitle,
    pub description: String,
    /// Cached `HH:MM` display time, when one was supplied at creation.
    pub time: Option<String>,
    pub start_time: String,
    pub is_completed: bool,
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEvent {
    pub user_id: UserId,
    pub title: EventTitle,
    pub description: String,
    pub time: Option<String>,
    pub start_time: NaiveDateTime,
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update applied to an existing [`Event`].
///
/// Outer `None` means "leave unchanged"; `Some(None)` on the nullable fields
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<EventTitle>,
    pub description: Option<String>,
    pub time: Option<Option<String>>,
    pub start_time: Option<NaiveDateTime>,
    pub category_id: Option<Option<CategoryId>>,
    pub is_completed: Option<bool>,
}

impl EventPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Half-open `[start, end)` instant range used for calendar queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl InstantRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The whole calendar day holding `date`, i.e. `[date 00:00, date+1 00:00)`.
    pub fn whole_day(date: chrono::NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: date.succ_opt().unwrap_or(date).and_time(NaiveTime::MIN),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instant::build_start_instant;

    #[test]
    fn whole_day_range_is_half_open() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
        let range = InstantRange::whole_day(date);

        assert!(range.contains(build_start_instant("2025-11-12", None).unwrap()));
        assert!(range.contains(build_start_instant("2025-11-12", Some("23:59")).unwrap()));
        assert!(!range.contains(build_start_instant("2025-11-13", None).unwrap()));
        assert!(!range.contains(build_start_instant("2025-11-11", Some("23:59")).unwrap()));
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(EventPatch::default().is_empty());
        let patch = EventPatch {
            is_completed: Some(true),
            ..EventPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
