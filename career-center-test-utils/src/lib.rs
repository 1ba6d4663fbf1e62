//! Shared test utilities for the career center client.
//!
//! Provides JSON fixtures shaped like the career center API's responses and the
//! [`TestError`] type test functions return.

pub mod error;
pub mod fixtures;

pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestError};
}
