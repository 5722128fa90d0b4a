use chrono::Utc;
use diesel::prelude::*;

use crate::domain::types::UserId;
use crate::models::sticker::NewDaySticker;
use crate::repository::{DieselRepository, RepositoryResult, StickerReader, StickerWriter};

impl StickerReader for DieselRepository {
    fn list_stickers(&self, user_id: UserId, date: &str) -> RepositoryResult<Vec<String>> {
        use crate::schema::day_stickers;

        let mut conn = self.conn()?;

        Ok(day_stickers::table
            .filter(day_stickers::user_id.eq(user_id.get()))
            .filter(day_stickers::date.eq(date))
            .order(day_stickers::id.asc())
            .select(day_stickers::sticker)
            .load::<String>(&mut conn)?)
    }
}

impl StickerWriter for DieselRepository {
    fn add_sticker(&self, user_id: UserId, date: &str, sticker: &str) -> RepositoryResult<usize> {
        use crate::schema::day_stickers;

        let mut conn = self.conn()?;

        // The unique index on (user_id, date, sticker) provides the
        // membership-set semantics; re-adding an existing glyph inserts
        // nothing and reports zero affected rows.
        let affected = diesel::insert_or_ignore_into(day_stickers::table)
            .values(NewDaySticker {
                user_id: user_id.get(),
                date: date.to_string(),
                sticker: sticker.to_string(),
                created_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)?;

        Ok(affected)
    }
}
