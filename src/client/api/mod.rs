//! Remote API client.
//!
//! [`ApiClient`] builds requests against the career center API, attaches the bearer
//! token when the session holds one, and decodes JSON responses. It performs no retry,
//! backoff, or caching; every call hands its outcome straight back to the view that
//! made it. The HTTP layer is the [`Transport`] trait so the browser transport can be
//! swapped for an in-memory one in tests.

pub mod analytics;
pub mod appointment;
pub mod auth;
pub mod candidate;
pub mod chat;
pub mod moderator;
pub mod profile;
pub mod reqwasm;
pub mod resume;
pub mod vacancy;

use std::{fmt, rc::Rc};

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::error::ApiError, model::api::ErrorDto};

pub use self::reqwasm::ReqwasmTransport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A fully built request handed to the transport
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed request
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and yields the raw response.
///
/// Only failures to complete the exchange are errors here; non-success statuses are
/// returned as responses and classified by [`ApiClient`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Client for the career center API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, base_url: &str, token: Option<String>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let encoded: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> ApiRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        ApiRequest {
            method,
            url: self.url(path, query),
            headers,
            body,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if response.is_success() {
            return Ok(response.body);
        }

        let detail = match serde_json::from_str::<ErrorDto>(&response.body) {
            Ok(error_dto) => error_dto.detail,
            Err(_) => response.body,
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = response.status,
            "API request rejected"
        );

        Err(ApiError::Status {
            status: response.status,
            detail,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let body = self.execute(self.request(method, path, query, body)).await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.fetch(Method::Get, path, query, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        self.fetch(Method::Post, path, &[], Some(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        self.fetch(Method::Put, path, &[], Some(body)).await
    }

    /// Sends a request whose response body is not needed
    pub(crate) async fn send_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(), ApiError> {
        self.execute(self.request(method, path, &[], body))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use crate::client::{
        api::Method,
        error::ApiError,
        util::test::{MockTransport, TEST_API_URL},
    };

    #[tokio::test]
    /// Tests a request sent by a signed-in client.
    ///
    /// Verifies the session token is attached as a bearer authorization header.
    ///
    /// Expected: `Authorization: Bearer t1` on the request
    async fn attaches_bearer_token() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(Method::Get, "/api/analytics/overview", 200, json!({}));

        transport.client(Some("t1")).overview().await?;

        let request = transport.last_request();
        assert_eq!(request.header("authorization"), Some("Bearer t1"));

        Ok(())
    }

    #[tokio::test]
    /// Tests a request sent by a signed-out client.
    ///
    /// Verifies no authorization header is attached without a token.
    ///
    /// Expected: no `Authorization` header
    async fn omits_header_without_token() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(Method::Get, "/api/analytics/overview", 200, json!({}));

        transport.client(None).overview().await?;

        assert_eq!(transport.last_request().header("Authorization"), None);

        Ok(())
    }

    #[tokio::test]
    /// Tests a request the server rejects with a JSON error body.
    ///
    /// Verifies the `detail` field is kept as the error message.
    ///
    /// Expected: Err(ApiError::Status) carrying the server's detail
    async fn surfaces_server_detail() {
        let transport = MockTransport::new();
        transport.mock(
            Method::Post,
            "/api/auth/register",
            400,
            json!({ "detail": "Account already exists" }),
        );

        let result = transport
            .client(None)
            .register(&register_dto_fixture())
            .await;

        match result {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Account already exists");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    /// Tests a rejected request whose error body is not JSON.
    ///
    /// Verifies the raw body is kept as the detail.
    ///
    /// Expected: Err(ApiError::Status) carrying the raw body
    async fn falls_back_to_raw_error_body() {
        let transport = MockTransport::new();
        transport.mock_raw(Method::Get, "/api/analytics/overview", 502, "Bad Gateway");

        let result = transport.client(None).overview().await;

        assert!(matches!(
            result,
            Err(ApiError::Status { status: 502, ref detail }) if detail == "Bad Gateway"
        ));
    }

    #[tokio::test]
    /// Tests a successful response whose body is not the expected JSON.
    ///
    /// Verifies the decode failure is reported instead of an empty value.
    ///
    /// Expected: Err(ApiError::Decode)
    async fn decode_failure_is_reported() {
        let transport = MockTransport::new();
        transport.mock_raw(Method::Get, "/api/analytics/overview", 200, "<html>");

        let result = transport.client(None).overview().await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// Tests building a URL with query parameters.
    ///
    /// Verifies values are URL-encoded and the base URL is joined with a single slash.
    ///
    /// Expected: an encoded query string on the trimmed base URL
    async fn encodes_query_values() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(Method::Get, "/api/candidates/search", 200, json!([]));

        let search = crate::model::candidate::CandidateSearchDto {
            skills: "C++, Rust".to_string(),
            ..Default::default()
        };
        transport.client(Some("t1")).search_candidates(&search).await?;

        assert_eq!(
            transport.last_request().url,
            format!("{}/api/candidates/search?skills=C%2B%2B%2C%20Rust", TEST_API_URL)
        );

        Ok(())
    }

    fn register_dto_fixture() -> crate::model::user::RegisterDto {
        crate::model::user::RegisterDto {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            full_name: "Ann".to_string(),
            user_type: crate::model::user::UserType::Student,
            company_name: None,
            inn: None,
            company_website: None,
        }
    }
}
