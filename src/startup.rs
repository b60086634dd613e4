//! Process startup for hosts embedding the engine.

use thiserror::Error;

use crate::config::{AppConfig, ValidationError};
use crate::domain::membership::{PlanRegistry, PlanRegistryError};
use crate::telemetry;

/// Reasons the engine refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Plan registry check failed: {0}")]
    Registry(#[from] PlanRegistryError),
}

/// Validates configuration, installs tracing and checks the plan registry.
///
/// Call once before serving requests. The registry is forced here so the
/// first request does not pay for building it.
pub fn bootstrap(config: &AppConfig) -> Result<&'static PlanRegistry, StartupError> {
    config.validate()?;
    telemetry::init_tracing(&config.telemetry);

    let registry = PlanRegistry::global();
    if config.engine.verify_registry_on_startup {
        registry.verify()?;
        tracing::info!(plans = registry.plans().len(), "plan registry verified");
    } else {
        tracing::warn!("plan registry verification skipped");
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn bootstrap_verifies_shipped_registry() {
        let registry = bootstrap(&AppConfig::default()).unwrap();
        assert_eq!(registry.plans().len(), 3);
    }

    #[test]
    fn bootstrap_rejects_invalid_config() {
        let config = AppConfig {
            engine: EngineConfig {
                max_history_records: 0,
                ..EngineConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(bootstrap(&config), Err(StartupError::Config(_))));
    }
}
