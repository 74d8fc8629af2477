use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::{AuthClient, AuthError};
use crate::config::AuthConfig;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// [`AuthClient`] backed by the Ember HTTP API.
///
/// Success is any 2xx answer; the body is ignored (session handling belongs
/// to whoever consumes the sign-in result).
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    login_url: Url,
}

impl HttpAuthClient {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    /// Returns an error if the base URL or login path is not a valid URL.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let login_url = endpoint_url(&config.base_url, &config.login_path)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("ember/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, login_url })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }
}

/// Appends `path` to `base_url`, keeping any path prefix the base already has
/// (`https://gw.example/ember` + `/v1/auth/login` ->
/// `https://gw.example/ember/v1/auth/login`).
fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).with_context(|| format!("Invalid auth base URL '{base_url}'"))?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path.trim_start_matches('/'))
        .with_context(|| format!("Invalid login path '{path}'"))
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        debug!(url = %self.login_url, "Sending sign-in request");

        let response = self
            .http
            .post(self.login_url.clone())
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
