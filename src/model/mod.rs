//! Records exchanged with the career center API.
//!
//! Every DTO tolerates missing optional fields and ignores fields it does not know, as
//! the API passes database rows through with little shaping.

pub mod analytics;
pub mod api;
pub mod appointment;
pub mod candidate;
pub mod chat;
pub mod id;
pub mod profile;
pub mod resume;
pub mod touch;
pub mod user;
pub mod vacancy;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
