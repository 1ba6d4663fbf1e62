//! JSON fixtures mirroring the API's response bodies.
//!
//! - `user` - accounts and login/registration responses
//! - `vacancy` - vacancies and the responses submitted to them
//! - `resume` - student resumes
//! - `chat` - group chat messages

pub mod chat;
pub mod resume;
pub mod user;
pub mod vacancy;

/// Flat re-export of every fixture builder, e.g. `factory::user("7", "student")`
pub mod factory {
    pub use super::{
        chat::chat_message,
        resume::resume,
        user::{auth_response, user},
        vacancy::{touch, vacancy, vacancy_with_responses},
    };
}
