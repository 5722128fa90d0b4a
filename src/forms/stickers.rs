use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::instant;
use crate::domain::types::{StickerGlyph, TypeConstraintError};

#[derive(Debug, Error)]
pub enum StickerFormError {
    #[error("Sticker form validation failed: {0}")]
    Validation(String),
    #[error("Sticker form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for StickerFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for StickerFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddStickerForm {
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub sticker: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddStickerPayload {
    pub date: String,
    pub sticker: StickerGlyph,
}

impl TryFrom<AddStickerForm> for AddStickerPayload {
    type Error = StickerFormError;

    fn try_from(value: AddStickerForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let date = instant::parse_date(&value.date)?.to_string();
        Ok(Self {
            date,
            sticker: StickerGlyph::new(value.sticker)?,
        })
    }
}
