//! Fetch layer for the analysis backend.
//!
//! One POST per search; retry/backoff and caching live behind the backend,
//! not here. The raw JSON body is handed to the normalizer untouched.

use async_trait::async_trait;
use buildintel_core::BuildIntelConfig;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ClientError;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    project_name: &'a str,
}

/// Seam between the CLI and the network, mockable in tests.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Fetch the raw aggregation payload for one project.
    async fn analyze(&self, project_name: &str) -> Result<Value, ClientError>;
}

pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &BuildIntelConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.analyze_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, project_name: &str) -> Result<Value, ClientError> {
        if !self.endpoint.starts_with("http") {
            return Err(ClientError::InvalidEndpoint(self.endpoint.clone()));
        }

        info!(project = project_name, endpoint = %self.endpoint, "requesting analysis");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { project_name })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(project_name.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await?;
        debug!(project = project_name, "received analysis payload");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_endpoint_derived_from_config() {
        env::set_var("BUILDINTEL_API_URL", "http://localhost:8000");
        let config = BuildIntelConfig::default();
        let client = HttpAnalysisClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/analyze");
        env::remove_var("BUILDINTEL_API_URL");
    }

    #[tokio::test]
    #[serial]
    async fn test_unconfigured_endpoint_fails_at_request_time() {
        env::remove_var("BUILDINTEL_API_URL");
        let config = BuildIntelConfig::default();
        // Construction succeeds: a missing base URL degrades, it does not
        // hard-fail.
        let client = HttpAnalysisClient::new(&config).unwrap();

        let err = client.analyze("uniswap").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint(_)));
    }
}
