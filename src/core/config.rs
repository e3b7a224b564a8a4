//! Optimizer configuration
//!
//! Tunables for a run live here. The game constants that define outfit
//! arithmetic (masterwork bonus, tier step, artifice bonus) are fixed and
//! live in `outfit::constants` instead.

use crate::core::error::{OptimizerError, Result};
use crate::core::types::Archetype;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for an optimization run
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Process archetypes and generator passes on the rayon pool
    ///
    /// Results are merged in a fixed order, so output is identical
    /// with or without it.
    pub parallel: bool,

    /// Archetypes to optimize, in report order
    pub archetypes: Vec<Archetype>,

    /// Run the eclipsed-armor scan alongside outfit generation
    pub eclipsed_analysis: bool,

    /// JSON list of pieces to leave out of every analysis
    pub ignore_list: Option<PathBuf>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            archetypes: Archetype::ALL.to_vec(),
            eclipsed_analysis: true,
            ignore_list: None,
        }
    }
}

impl OptimizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential single-archetype config, handy for tests
    pub fn single(archetype: Archetype) -> Self {
        Self {
            parallel: false,
            archetypes: vec![archetype],
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: OptimizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.archetypes.is_empty() {
            return Err(OptimizerError::InvalidConfig(
                "at least one archetype is required".into(),
            ));
        }

        for (i, archetype) in self.archetypes.iter().enumerate() {
            if self.archetypes[..i].contains(archetype) {
                return Err(OptimizerError::InvalidConfig(format!(
                    "archetype {} listed more than once",
                    archetype
                )));
            }
        }

        Ok(())
    }
}
