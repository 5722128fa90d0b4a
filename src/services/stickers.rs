use crate::MAX_STICKERS_PER_DAY;
use crate::auth::AuthenticatedUser;
use crate::domain::instant;
use crate::forms::stickers::AddStickerPayload;
use crate::repository::{StickerReader, StickerWriter};

use super::{ServiceError, ServiceResult};

/// Sticker glyphs for one day.
pub fn show_stickers<R>(
    user: &AuthenticatedUser,
    date: &str,
    repo: &R,
) -> ServiceResult<Vec<String>>
where
    R: StickerReader,
{
    let date = instant::parse_date(date)?.to_string();
    repo.list_stickers(user.user_id, &date).map_err(|e| {
        log::error!("Failed to list stickers for {date}: {e}");
        ServiceError::from(e)
    })
}

/// Add a glyph to the day's sticker set.
///
/// Membership semantics: re-adding a glyph already on the day succeeds as a
/// no-op even at the cap; an eleventh distinct glyph is rejected.
pub fn add_sticker<R>(
    payload: AddStickerPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: StickerReader + StickerWriter,
{
    let current = repo.list_stickers(user.user_id, &payload.date).map_err(|e| {
        log::error!("Failed to list stickers for {}: {e}", payload.date);
        ServiceError::from(e)
    })?;

    if current.iter().any(|glyph| glyph == payload.sticker.as_str()) {
        return Ok(());
    }
    if current.len() >= MAX_STICKERS_PER_DAY {
        return Err(ServiceError::InvalidInput(
            "Maximum stickers reached".to_string(),
        ));
    }

    repo.add_sticker(user.user_id, &payload.date, payload.sticker.as_str())
        .map_err(|e| {
            log::error!("Failed to add sticker for {}: {e}", payload.date);
            ServiceError::from(e)
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{StickerGlyph, UserId};
    use crate::repository::test::TestRepository;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: UserId::new(1).unwrap(),
        }
    }

    fn payload(glyph: &str) -> AddStickerPayload {
        AddStickerPayload {
            date: "2025-11-12".to_string(),
            sticker: StickerGlyph::new(glyph).unwrap(),
        }
    }

    #[test]
    fn eleventh_distinct_glyph_is_rejected() {
        let repo = TestRepository::new();
        let user = sample_user();

        for glyph in ["🎉", "⭐", "❤️", "🔥", "💪", "🎯", "✨", "🌟", "💖", "🎈"] {
            add_sticker(payload(glyph), &user, &repo).unwrap();
        }

        let err = add_sticker(payload("🏆"), &user, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidInput("Maximum stickers reached".to_string())
        );
    }

    #[test]
    fn readding_an_existing_glyph_at_the_cap_is_a_noop() {
        let repo = TestRepository::new();
        let user = sample_user();

        for glyph in ["🎉", "⭐", "❤️", "🔥", "💪", "🎯", "✨", "🌟", "💖", "🎈"] {
            add_sticker(payload(glyph), &user, &repo).unwrap();
        }

        add_sticker(payload("🎉"), &user, &repo).unwrap();
        assert_eq!(
            show_stickers(&user, "2025-11-12", &repo).unwrap().len(),
            10
        );
    }

    #[test]
    fn sticker_sets_are_scoped_per_day() {
        let repo = TestRepository::new();
        let user = sample_user();

        add_sticker(payload("🎉"), &user, &repo).unwrap();

        assert_eq!(show_stickers(&user, "2025-11-12", &repo).unwrap().len(), 1);
        assert!(show_stickers(&user, "2025-11-13", &repo).unwrap().is_empty());
    }
}
