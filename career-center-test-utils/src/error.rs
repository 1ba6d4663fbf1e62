use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("API call failed: {0}")]
    Api(String),
    #[error("Session storage failed: {0}")]
    Storage(String),
    #[error("Form rejected: {0}")]
    Form(String),
}
