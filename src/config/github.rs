//! GitHub API configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    /// Personal access token; optional, raises unauthenticated rate limits
    pub token: Option<Secret<String>>,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::invalid_url(
                "github.base_url",
                &self.base_url,
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GitHubConfig {
        GitHubConfig::default()
    }

    #[test]
    fn default_points_at_public_api() {
        let config = base();
        assert_eq!(config.base_url, "https://api.github.com");
        assert!(config.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_non_http_url() {
        let config = GitHubConfig {
            base_url: "ftp://example.com".to_string(),
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let config = GitHubConfig {
            timeout_secs: 0,
            ..base()
        };
        assert!(config.validate().is_err());
    }
}
