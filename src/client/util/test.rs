use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;
use career_center_test_utils::TestError;
use serde_json::Value;

use crate::client::{
    api::{ApiClient, ApiRequest, ApiResponse, Method, Transport},
    error::{ActionError, ApiError, FormError, StorageError},
};

pub const TEST_API_URL: &str = "http://api.test";

impl From<ApiError> for TestError {
    fn from(error: ApiError) -> Self {
        TestError::Api(error.to_string())
    }
}

impl From<ActionError> for TestError {
    fn from(error: ActionError) -> Self {
        match error {
            ActionError::Form(e) => e.into(),
            ActionError::Api(e) => e.into(),
            ActionError::Storage(e) => e.into(),
        }
    }
}

impl From<StorageError> for TestError {
    fn from(error: StorageError) -> Self {
        TestError::Storage(error.to_string())
    }
}

impl From<FormError> for TestError {
    fn from(error: FormError) -> Self {
        TestError::Form(error.to_string())
    }
}

struct Mock {
    method: Method,
    path: String,
    status: u16,
    body: String,
}

#[derive(Default)]
struct MockState {
    mocks: Vec<Mock>,
    requests: Vec<ApiRequest>,
}

/// In-memory [`Transport`] serving canned responses by method and path.
///
/// Every request is recorded. Requests without a matching mock get a 404
/// `{"detail": "Not Found"}` response. Later mocks for the same route take precedence.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock(&self, method: Method, path: &str, status: u16, body: Value) {
        self.mock_raw(method, path, status, &body.to_string());
    }

    pub fn mock_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.state.borrow_mut().mocks.push(Mock {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }

    /// Client against this transport, authenticated when a token is given
    pub fn client(&self, token: Option<&str>) -> ApiClient {
        ApiClient::new(
            Rc::new(self.clone()),
            TEST_API_URL,
            token.map(str::to_string),
        )
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the mock transport")
    }

    /// Number of requests sent to the given route
    pub fn hits(&self, method: Method, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|request| request.method == method && request_path(&request.url) == path)
            .count()
    }
}

fn request_path(url: &str) -> &str {
    let path = url.strip_prefix(TEST_API_URL).unwrap_or(url);
    path.split('?').next().unwrap_or(path)
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.borrow_mut();

        let response = state
            .mocks
            .iter()
            .rev()
            .find(|mock| mock.method == request.method && mock.path == request_path(&request.url))
            .map(|mock| ApiResponse {
                status: mock.status,
                body: mock.body.clone(),
            })
            .unwrap_or_else(|| ApiResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            });

        state.requests.push(request);

        Ok(response)
    }
}
