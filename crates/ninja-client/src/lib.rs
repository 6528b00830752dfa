//! # ninja-client
//!
//! HTTP client for the CMS backend REST API.
//!
//! Every call is a single attempt: no retries and no response caching.
//! Callers decide how to surface failures (see `ninja-actions`).

mod endpoint;
mod error;
mod http;

pub use endpoint::Endpoint;
pub use error::ApiError;

use std::time::Duration;

use ninja_config::ApiConfig;
use reqwest::Method;
use serde_json::Value;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("ninja-cms/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the CMS backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. no TLS backend).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            auth_token: config
                .auth_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
        })
    }

    /// Root of the backend API, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint of one CMS collection, e.g. `contact-info`.
    #[must_use]
    pub fn endpoint(&self, resource: &str) -> Endpoint {
        Endpoint::new(&self.base_url, resource)
    }

    /// `GET` a URL and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status or an
    /// undecodable body.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, url, None).await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_json`].
    pub async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::POST, url, Some(body)).await
    }

    /// `PUT` a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_json`].
    pub async fn put_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, url, Some(body)).await
    }

    /// `DELETE` a URL. Returns `null` for the usual empty `204` reply.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_json`].
    pub async fn delete_json(&self, url: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, url, None).await
    }

    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(%method, url, error = %e, "request failed");
                return Err(ApiError::Network(e));
            }
        };
        tracing::debug!(%method, url, status = resp.status().as_u16(), "request completed");

        let resp = http::check_response(resp).await?;
        http::decode_body(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let config = ApiConfig {
            base_url: " http://localhost:8000/api/v1/ ".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(
            client.endpoint("faqs").collection(),
            "http://localhost:8000/api/v1/cms/faqs/"
        );
    }

    #[test]
    fn blank_token_is_dropped() {
        let config = ApiConfig {
            auth_token: Some(String::new()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(client.auth_token.is_none());
    }
}
