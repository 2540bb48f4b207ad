pub mod defaults;
pub mod match_config;

pub use match_config::MatchConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ColloquyResult;

/// Top-level configuration for the colloquy system.
///
/// Every section and field has a default, so an empty document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColloquyConfig {
    pub matching: MatchConfig,
}

impl ColloquyConfig {
    /// Parse a configuration from a TOML document, filling in defaults for
    /// anything left unspecified.
    pub fn from_toml(input: &str) -> ColloquyResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
