//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for historical records aggregated into one decision graph.
pub const MAX_HISTORY_RECORDS: usize = 50_000;

/// Settings for the segmentation and entitlement engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Check plan registry monotonicity during bootstrap
    #[serde(default = "default_verify_registry")]
    pub verify_registry_on_startup: bool,

    /// Submissions loaded when the decision graph is built with history
    #[serde(default = "default_max_history_records")]
    pub max_history_records: usize,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_history_records == 0 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        if self.max_history_records > MAX_HISTORY_RECORDS {
            return Err(ValidationError::HistoryLimitTooLarge {
                max: MAX_HISTORY_RECORDS,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verify_registry_on_startup: default_verify_registry(),
            max_history_records: default_max_history_records(),
        }
    }
}

fn default_verify_registry() -> bool {
    true
}

fn default_max_history_records() -> usize {
    5_000
}
