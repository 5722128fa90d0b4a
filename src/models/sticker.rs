use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Diesel model representing one sticker glyph attached to an (owner, date)
/// pair. Membership-set semantics come from the unique index on
/// `(user_id, date, sticker)` plus insert-or-ignore writes.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::day_stickers)]
pub struct DaySticker {
    pub id: i32,
    pub user_id: i32,
    pub date: String,
    pub sticker: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`DaySticker`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::day_stickers)]
pub struct NewDaySticker {
    pub user_id: i32,
    pub date: String,
    pub sticker: String,
    pub created_at: NaiveDateTime,
}
