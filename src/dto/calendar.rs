use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::tasks::TaskSummary;

/// One month of the planner grid, shaped for the calendar page.
#[derive(Debug, Serialize)]
pub struct CalendarMonthView {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Week rows of exactly seven cells; `None` cells pad days outside the
    /// month so day 1 lands under its weekday column (Monday first).
    pub weeks: Vec<Vec<Option<DayCell>>>,
    pub categories: Vec<CategoryDto>,
    pub available_stickers: Vec<String>,
}

/// A single real day in the month grid.
#[derive(Debug, Serialize)]
pub struct DayCell {
    /// ISO `YYYY-MM-DD` date.
    pub date: String,
    pub day_number: u32,
    pub is_today: bool,
    pub stickers: Vec<String>,
    pub tasks_count: usize,
    pub tasks: Vec<TaskSummary>,
}
