//! Application state for the training duration API.

use std::sync::Arc;

use crate::calculation::DurationCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded rule set and a calculator built from it. Both are
/// read-only, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calculator: Arc<DurationCalculator>,
}

impl AppState {
    /// Creates a new application state from a loaded rule set.
    pub fn new(config: ConfigLoader) -> Self {
        let calculator = DurationCalculator::new(config.rules().clone());
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &DurationCalculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calculator_uses_loaded_rules() {
        let state = AppState::new(ConfigLoader::statutory());
        assert_eq!(state.calculator().rules(), state.config().rules());
    }
}
