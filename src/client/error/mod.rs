//! Error types for the career center client.
//!
//! Each concern gets its own `thiserror` enum: remote API calls, client-side form
//! validation, persistent session storage, and start-up configuration. Views handle
//! these locally by logging them and showing an alert or an empty state.

pub mod action;
pub mod api;
pub mod config;
pub mod form;
pub mod storage;

pub use action::ActionError;
pub use api::ApiError;
pub use config::ConfigError;
pub use form::FormError;
pub use storage::StorageError;
