use async_trait::async_trait;
use reqwasm::http::Request;

use crate::client::{
    api::{ApiRequest, ApiResponse, Method, Transport},
    error::ApiError,
};

/// Browser `fetch` transport
pub struct ReqwasmTransport;

#[async_trait(?Send)]
impl Transport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
