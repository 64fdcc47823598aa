//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `HACKMATCH`
//! prefix and nested sections use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use hackmatch::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod agents;
mod ai;
mod error;
mod github;
mod server;

pub use agents::{
    AgentCatalog, AgentDefinition, AgentParameters, DEFAULT_AGENT, DEFAULT_AGENTS_PATH,
};
pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use github::GitHubConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// GitHub API configuration
    #[serde(default)]
    pub github: GitHubConfig,

    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Path to the agent catalog file
    #[serde(default = "default_agents_path")]
    pub agents_path: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `HACKMATCH` prefix:
    ///
    /// - `HACKMATCH__SERVER__PORT=7777` -> `server.port = 7777`
    /// - `HACKMATCH__GITHUB__TOKEN=...` -> `github.token = ...`
    /// - `HACKMATCH__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Every section has usable defaults, so an empty environment
    /// loads successfully.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HACKMATCH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.github.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            github: GitHubConfig::default(),
            ai: AiConfig::default(),
            agents_path: default_agents_path(),
        }
    }
}

fn default_agents_path() -> String {
    DEFAULT_AGENTS_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HACKMATCH__SERVER__PORT");
        env::remove_var("HACKMATCH__SERVER__ENVIRONMENT");
        env::remove_var("HACKMATCH__GITHUB__TOKEN");
        env::remove_var("HACKMATCH__AI__GEMINI_API_KEY");
        env::remove_var("HACKMATCH__AGENTS_PATH");
    }

    #[test]
    fn loads_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 7777);
        assert_eq!(config.github.base_url, "https://api.github.com");
        assert_eq!(config.ai.model, "gemini-1.5-flash");
        assert_eq!(config.agents_path, "agents.yaml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HACKMATCH__SERVER__PORT", "3000");
        env::set_var("HACKMATCH__SERVER__ENVIRONMENT", "production");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }

    #[test]
    fn reads_agents_path_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HACKMATCH__AGENTS_PATH", "/etc/hackmatch/agents.yaml");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.agents_path, "/etc/hackmatch/agents.yaml");
    }

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}
