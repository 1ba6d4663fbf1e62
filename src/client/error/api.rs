use thiserror::Error;

/// Failure of a call against the remote API.
///
/// Covers the three failure classes a view can see: the request never completed,
/// the server refused it (authorization or validation), or the body could not be read.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or transport failure, the request produced no response.
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The response body was not the expected JSON.
    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True for 401/403 responses, i.e. a missing or expired token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// The server supplied message of a rejected request, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    /// Tests classifying errors as unauthorized.
    ///
    /// Verifies only authentication statuses count, not other rejections or transport failures.
    ///
    /// Expected: true for 401 and false for 400 or a transport error
    fn unauthorized_only_for_auth_statuses() {
        let expired = ApiError::Status {
            status: 401,
            detail: "Token expired".to_string(),
        };
        let duplicate = ApiError::Status {
            status: 400,
            detail: "Account already exists".to_string(),
        };

        assert!(expired.is_unauthorized());
        assert!(!duplicate.is_unauthorized());
        assert!(!ApiError::Transport("offline".to_string()).is_unauthorized());
    }

    #[test]
    /// Tests reading the server detail from an error.
    ///
    /// Verifies an empty detail reads as absent.
    ///
    /// Expected: Some(detail) for a populated body and None for an empty one
    fn detail_only_for_non_empty_status_bodies() {
        let rejected = ApiError::Status {
            status: 400,
            detail: "Account already exists".to_string(),
        };
        let empty = ApiError::Status {
            status: 500,
            detail: String::new(),
        };

        assert_eq!(rejected.detail(), Some("Account already exists"));
        assert_eq!(empty.detail(), None);
    }
}
