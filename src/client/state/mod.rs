//! View state and workflows.
//!
//! Everything a screen does besides drawing itself lives here: fetch-on-mount loads,
//! filters, form validation, and submit sequences. Views own an instance of this state
//! per mount; nothing is shared or cached between screens.

pub mod analytics;
pub mod assistant;
pub mod auth;
pub mod chat;
pub mod company;
pub mod forms;
pub mod moderator;
pub mod student;
pub mod university;
pub mod vacancies;

use dioxus_logger::tracing;

use crate::client::error::ApiError;

/// Keeps a successful load, logging a failed one so the view can fall back to an
/// empty state.
pub(crate) fn loaded<T>(result: Result<T, ApiError>, what: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(ApiError::Status { status: 404, .. }) => {
            tracing::debug!(resource = what, "Nothing found");
            None
        }
        Err(e) if e.is_unauthorized() => {
            tracing::warn!(resource = what, error = %e, "API rejected the session token");
            None
        }
        Err(e) => {
            tracing::warn!(resource = what, error = %e, "Failed to load");
            None
        }
    }
}

/// Case-insensitive substring match, an empty needle matching everything
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
