//! Rule-set loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a legal rule
//! set from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{LegalRules, RuleSetMetadata};

/// Loads and provides access to a legal rule set.
///
/// # Directory Structure
///
/// ```text
/// config/bbig/
/// ├── metadata.yaml   # Rule set code, name, version, source
/// └── rules.yaml      # Credits, cap, part-time bounds, input bounds
/// ```
///
/// # Example
///
/// ```no_run
/// use training_duration_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bbig")?;
/// println!("Loaded rule set: {}", loader.metadata().name);
/// # Ok::<(), training_duration_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    metadata: RuleSetMetadata,
    rules: LegalRules,
}

impl ConfigLoader {
    /// Loads a rule set from the specified directory.
    ///
    /// Fails if either file is missing, is not valid YAML, or describes
    /// rules the calculator cannot work with.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleSetMetadata>(&path.join("metadata.yaml"))?;
        let rules = Self::load_yaml::<LegalRules>(&path.join("rules.yaml"))?;
        rules.validate()?;

        info!(
            code = %metadata.code,
            version = %metadata.version,
            path = %path.display(),
            "Loaded rule set"
        );

        Ok(Self { metadata, rules })
    }

    /// Returns the built-in statutory rule set.
    pub fn statutory() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.metadata
    }

    /// Returns the legal rules.
    pub fn rules(&self) -> &LegalRules {
        &self.rules
    }
}
