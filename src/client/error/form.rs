use thiserror::Error;

/// A form rejected before any request was sent
#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("Message is empty")]
    EmptyMessage,
    #[error("There are no responses to analyse")]
    NoResponses,
}
