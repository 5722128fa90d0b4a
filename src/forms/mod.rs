use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod categories;
pub mod stickers;
pub mod tasks;

/// Deserialize helper distinguishing an absent JSON field (outer `None`) from
/// an explicit `null` (`Some(None)`), for partial-update forms.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
