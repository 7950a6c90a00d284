use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_API_URL: &str = "";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct BuildIntelConfig {
    /// Base URL of the analysis backend. An unset variable degrades to an
    /// empty endpoint; requests against it fail at the HTTP layer instead of
    /// at startup.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for BuildIntelConfig {
    fn default() -> Self {
        let api_base_url = env::var("BUILDINTEL_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| {
                tracing::debug!("BUILDINTEL_API_URL not set, endpoint degrades to empty string");
                DEFAULT_API_URL.to_string()
            });

        let request_timeout_secs = env::var("BUILDINTEL_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let log_level = env::var("BUILDINTEL_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            api_base_url,
            request_timeout_secs,
            log_level,
        }
    }
}

impl BuildIntelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}/analyze", self.api_base_url)
    }
}

impl fmt::Display for BuildIntelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BuildIntel Configuration:")?;
        if self.api_base_url.is_empty() {
            writeln!(f, "  API URL: (not configured)")?;
        } else {
            writeln!(f, "  API URL: {}", self.api_base_url)?;
        }
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
