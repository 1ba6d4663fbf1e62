use thiserror::Error;

use crate::client::error::{ApiError, FormError, StorageError};

/// Failure of a user action that validates a form, calls the API, and may persist
/// the result.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ActionError {
    /// Text to show the user: form problems and server messages verbatim, otherwise
    /// the given fallback.
    pub fn message(&self, fallback: &str) -> String {
        match self {
            Self::Form(e) => e.to_string(),
            Self::Api(e) => e.detail().unwrap_or(fallback).to_string(),
            Self::Storage(_) => fallback.to_string(),
        }
    }
}
