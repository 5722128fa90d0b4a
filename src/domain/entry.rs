use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::instant;
use crate::domain::types::{EntryId, MoodRating, UserId};

/// Daily journal entry, the input to mood statistics and streak counting.
///
/// The date is kept in its stored `YYYY-MM-DD` text form; rows with
/// unparseable dates are skipped by the streak scan rather than failing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub date: String,
    pub description: String,
    pub mood_rating: MoodRating,
    pub created_at: NaiveDateTime,
}

impl DayEntry {
    /// The entry's calendar date, when the stored text parses.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        instant::parse_date(&self.date).ok()
    }
}

/// Count consecutive journaled days ending at `today` (or yesterday).
///
/// `entries` must be sorted descending by date. The scan walks once: an entry
/// matching the expected day extends the streak; an entry exactly one day
/// earlier also extends it (the expected day simply had no entry yet); the
/// first larger gap ends the streak. Entries whose dates do not parse are
/// skipped without ending the scan.
pub fn consecutive_day_streak<'a, I>(entries: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a DayEntry>,
{
    let mut streak = 0;
    let mut expected = today;

    for entry in entries {
        let Some(entry_date) = entry.calendar_date() else {
            continue;
        };
        let day_before = expected.checked_sub_days(Days::new(1));

        if entry_date == expected {
            streak += 1;
            expected = match day_before {
                Some(previous) => previous,
                None => break,
            };
        } else if day_before == Some(entry_date) {
            streak += 1;
            expected = match entry_date.checked_sub_days(Days::new(1)) {
                Some(previous) => previous,
                None => break,
            };
        } else {
            break;
        }
    }

    streak
}
