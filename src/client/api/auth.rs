use crate::{
    client::{api::ApiClient, error::ApiError},
    model::user::{AuthResponseDto, LoginDto, RegisterDto},
};

impl ApiClient {
    pub async fn login(&self, credentials: &LoginDto) -> Result<AuthResponseDto, ApiError> {
        self.post("/api/auth/login", credentials).await
    }

    pub async fn register(&self, account: &RegisterDto) -> Result<AuthResponseDto, ApiError> {
        self.post("/api/auth/register", account).await
    }
}
