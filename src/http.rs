use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "Primewatch/0.1";

/// Transport seam for everything the source fetches.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Perform one GET and return the response body.
    async fn get(&self, url: &str) -> AppResult<String>;
}

/// Production transport backed by reqwest.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGet for HttpClient {
    async fn get(&self, url: &str) -> AppResult<String> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "Upstream returned {} for {}",
                status, url
            )));
        }

        Ok(response.text().await?)
    }
}
