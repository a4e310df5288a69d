//! REST client and configuration

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Result, StoreError};

/// Remote store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Service base URL
    pub base_url: String,
    /// Anonymous API key sent with every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        // Load endpoint and key from env or use local defaults
        let base_url = std::env::var("THREADTALK_STORE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let api_key = std::env::var("THREADTALK_STORE_KEY").unwrap_or_default();

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(10),
        }
    }
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shared HTTP plumbing for the REST store and auth clients.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: StoreConfig,
}

impl RestClient {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .header("apikey", &self.config.api_key)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .header("apikey", &self.config.api_key)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), response).await);
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), response).await);
        }
        Ok(response.json().await?)
    }

    async fn api_error(status: u16, response: reqwest::Response) -> StoreError {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status, %message, "store request failed");
        StoreError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = RestClient::new(StoreConfig::new("http://localhost:8000/", "key")).unwrap();
        assert_eq!(client.url("/posts"), "http://localhost:8000/posts");
    }
}
