//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PATHWISE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use pathwise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod engine;
mod error;
mod telemetry;

pub use engine::{EngineConfig, MAX_HISTORY_RECORDS};
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Logging (filter directive, output format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Engine behaviour (startup checks, analytics limits)
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PATHWISE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PATHWISE__ENVIRONMENT=production` -> `environment = production`
    /// - `PATHWISE__ENGINE__MAX_HISTORY_RECORDS=500` -> `engine.max_history_records = 500`
    /// - `PATHWISE__TELEMETRY__JSON=true` -> `telemetry.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATHWISE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        self.engine.validate()?;
        if self.is_production() && !self.engine.verify_registry_on_startup {
            return Err(ValidationError::RegistryCheckRequired);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PATHWISE__ENVIRONMENT");
        env::remove_var("PATHWISE__ENGINE__MAX_HISTORY_RECORDS");
        env::remove_var("PATHWISE__ENGINE__VERIFY_REGISTRY_ON_STARTUP");
        env::remove_var("PATHWISE__TELEMETRY__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.engine.max_history_records, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PATHWISE__ENGINE__MAX_HISTORY_RECORDS", "500");
        env::set_var("PATHWISE__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.max_history_records, 500);
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PATHWISE__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_production_requires_registry_check() {
        let config = AppConfig {
            environment: Environment::Production,
            engine: EngineConfig {
                verify_registry_on_startup: false,
                ..EngineConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::RegistryCheckRequired));
    }
}
