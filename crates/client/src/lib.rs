//! HTTP client for the museum API.
//!
//! Wraps the collection endpoint (`GET /museums`) using [`reqwest`], sending
//! the configured Basic-Auth credentials with every request. No retries, no
//! caching: a non-2xx status is returned to the caller as
//! [`ClientError::HttpStatus`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A museum as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Museum {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
}

/// Errors from the museum API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("HTTP Error: {0}")]
    HttpStatus(u16),
}

/// Authenticated client for one museum API deployment.
pub struct MuseumClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl MuseumClient {
    /// Create a client.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Create a client from environment variables.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `MUSEUM_API_URL`      | `http://localhost:3000` |
    /// | `MUSEUM_API_USERNAME` | empty                   |
    /// | `MUSEUM_API_PASSWORD` | empty                   |
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("MUSEUM_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let username = std::env::var("MUSEUM_API_USERNAME").unwrap_or_default();
        let password = std::env::var("MUSEUM_API_PASSWORD").unwrap_or_default();
        Self::new(base_url, username, password)
    }

    /// Fetch every museum from `GET /museums`.
    pub async fn fetch_museums(&self) -> Result<Vec<Museum>, ClientError> {
        let url = format!("{}/museums", self.base_url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Museum API returned an error status");
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_error_carries_code() {
        let err = ClientError::HttpStatus(401);
        assert_eq!(err.to_string(), "HTTP Error: 401");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = MuseumClient::new("http://localhost:3000/", "u", "p").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
