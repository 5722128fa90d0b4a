use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::AVAILABLE_STICKERS;
use crate::auth::AuthenticatedUser;
use crate::domain::event::InstantRange;
use crate::domain::instant;
use crate::dto::calendar::{CalendarMonthView, DayCell};
use crate::dto::categories::CategoryDto;
use crate::dto::tasks::TaskSummary;
use crate::repository::{CategoryReader, CategoryWriter, EventReader, StickerReader};

use super::{ServiceError, ServiceResult};

const MONTH_NAMES: [&str; 12] = [
    "Січень",
    "Лютий",
    "Березень",
    "Квітень",
    "Травень",
    "Червень",
    "Липень",
    "Серпень",
    "Вересень",
    "Жовтень",
    "Листопад",
    "Грудень",
];

/// Build the month grid for `(year, month)`.
///
/// The operation is atomic from the caller's perspective: any store failure
/// aborts the whole build, while individual events with unparseable start
/// instants or dangling category references degrade silently.
pub fn build_month<R>(
    user: &AuthenticatedUser,
    year: i32,
    month: u32,
    today: NaiveDate,
    repo: &R,
) -> ServiceResult<CalendarMonthView>
where
    R: CategoryReader + CategoryWriter + EventReader + StickerReader,
{
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ServiceError::InvalidInput(format!("{year}-{month} is not a valid month")))?;
    let next_first = first_of_next_month(first)?;

    super::categories::ensure_default_categories(user.user_id, repo)?;

    let range = InstantRange::new(
        first.and_time(NaiveTime::MIN),
        next_first.and_time(NaiveTime::MIN),
    );
    let events = repo.list_events_in_range(user.user_id, range).map_err(|e| {
        log::error!("Failed to list events for {year}-{month:02}: {e}");
        ServiceError::from(e)
    })?;
    let categories = repo.list_categories(user.user_id).map_err(|e| {
        log::error!("Failed to load categories: {e}");
        ServiceError::from(e)
    })?;
    let cache = super::categories::category_cache(categories.clone());

    // Bucket normalized events by calendar date. Rows whose stored start
    // value does not normalize are excluded from every bucket.
    let mut buckets: HashMap<NaiveDate, Vec<TaskSummary>> = HashMap::new();
    for event in &events {
        let Some(start) = instant::parse_stored_instant(&event.start_time) else {
            log::warn!(
                "event {} has an unparseable start instant, excluded from the calendar",
                event.id
            );
            continue;
        };
        buckets
            .entry(start.date())
            .or_default()
            .push(super::tasks::summarize_event(event, start, &cache));
    }

    let day_count = next_first.signed_duration_since(first).num_days() as usize;
    let mut cells = Vec::with_capacity(day_count);
    for (offset, date) in first.iter_days().take(day_count).enumerate() {
        let date_key = date.format("%Y-%m-%d").to_string();
        let stickers = repo.list_stickers(user.user_id, &date_key).map_err(|e| {
            log::error!("Failed to load stickers for {date_key}: {e}");
            ServiceError::from(e)
        })?;
        let tasks = buckets.remove(&date).unwrap_or_default();
        cells.push(DayCell {
            date: date_key,
            day_number: offset as u32 + 1,
            is_today: date == today,
            stickers,
            tasks_count: tasks.len(),
            tasks,
        });
    }

    let leading = first.weekday().num_days_from_monday() as usize;
    Ok(CalendarMonthView {
        year,
        month,
        month_name: MONTH_NAMES[(month - 1) as usize].to_string(),
        weeks: layout_weeks(leading, cells),
        categories: categories.into_iter().map(CategoryDto::from).collect(),
        available_stickers: AVAILABLE_STICKERS.iter().map(ToString::to_string).collect(),
    })
}

fn first_of_next_month(first: NaiveDate) -> ServiceResult<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ServiceError::Internal)
}

/// Lay day cells into week rows of exactly seven, padding with `None` before
/// day 1 (to align its weekday column, Monday first) and after the last day.
fn layout_weeks(leading: usize, cells: Vec<DayCell>) -> Vec<Vec<Option<DayCell>>> {
    let mut weeks = Vec::new();
    let mut week: Vec<Option<DayCell>> = Vec::with_capacity(7);
    for _ in 0..leading {
        week.push(None);
    }
    for cell in cells {
        week.push(Some(cell));
        if week.len() == 7 {
            weeks.push(week);
            week = Vec::with_capacity(7);
        }
    }
    if !week.is_empty() {
        while week.len() < 7 {
            week.push(None);
        }
        weeks.push(week);
    }
    weeks
}
