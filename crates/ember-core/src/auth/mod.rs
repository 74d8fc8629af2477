//! Authentication collaborator.
//!
//! The sign-in screen only knows the [`AuthClient`] trait. It never inspects
//! an [`AuthError`] beyond "the call failed"; the error text is for logs.

mod http;

pub use http::HttpAuthClient;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Any other collaborator-specific failure.
    #[error("{0}")]
    Other(String),
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait AuthClient: Send + Sync {
    /// Signs in with the given credentials.
    ///
    /// Callers guarantee both arguments are non-empty.
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_includes_status() {
        let err = AuthError::Rejected {
            status: 401,
            message: "bad credentials".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error with status 401: bad credentials"
        );
    }

    #[tokio::test]
    async fn test_mock_client_is_object_safe() {
        let mut mock = MockAuthClient::new();
        mock.expect_login()
            .withf(|email, password| email == "viewer@ember.tv" && password == "hunter2")
            .times(1)
            .returning(|_, _| Err(AuthError::Other("nope".to_string())));

        let client: Box<dyn AuthClient> = Box::new(mock);
        let result = client.login("viewer@ember.tv", "hunter2").await;
        assert!(matches!(result, Err(AuthError::Other(msg)) if msg == "nope"));
    }
}
