//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;
pub use validation::validate_package;

use crate::error::Result;
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// The result is not validated: command-line overrides are usually
    /// applied first, then [`Config::validate`] is called.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}
