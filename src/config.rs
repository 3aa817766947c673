//! YAML alias book support for aliasmatch.
//!
//! An alias book lists the entities a caller screens records against, each
//! with its approved name variants. It is loaded once at startup and turned
//! into prepared [`AliasMatcher`]s by [`crate::Screener`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # aliasmatch alias book
//! version: "1.0"
//! name: "vendor screening"
//!
//! matcher:
//!   strict: false
//!
//! entities:
//!   - name: "FIG"
//!     aliases:
//!       - "FIG WorldWide LLC"
//!       - "FIG F LLC"
//!   - name: "Al"
//!     aliases: ["Al LLC"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use canonical::to_name;
use matcher::AliasMatcher;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when loading an alias book
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level alias book
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AliasBookConfig {
    /// Configuration format version
    pub version: String,

    /// Optional book name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Matching behaviour
    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    /// Entities to screen against, in report order
    #[serde(default)]
    pub entities: Vec<EntityAliases>,
}

impl AliasBookConfig {
    /// Load a YAML alias book from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a YAML alias book from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: AliasBookConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        let mut seen = HashSet::new();
        for entity in &self.entities {
            entity.validate()?;
            if !seen.insert(entity.name.as_str()) {
                return Err(ConfigLoadError::Validation(format!(
                    "duplicate entity name: {}",
                    entity.name
                )));
            }
        }

        Ok(())
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&EntityAliases> {
        self.entities.iter().find(|entity| entity.name == name)
    }
}

impl Default for AliasBookConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatcherYamlConfig::default(),
            entities: Vec::new(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherYamlConfig {
    /// Report malformed records as errors instead of "no match".
    #[serde(default)]
    pub strict: bool,
}

/// One entity and its approved name variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityAliases {
    pub name: String,
    pub aliases: Vec<String>,
}

impl EntityAliases {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.name.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "entity name must not be empty".to_string(),
            ));
        }
        if self.aliases.is_empty() {
            return Err(ConfigLoadError::Validation(format!(
                "entity {} must list at least one alias",
                self.name
            )));
        }
        // Still usable for exact matches, so only flag them.
        for alias in &self.aliases {
            if let Err(err) = to_name(alias) {
                warn!(entity = %self.name, alias = %alias, error = %err, "alias_unsupported_shape");
            }
        }
        Ok(())
    }

    /// Prepares this entity's aliases for repeated matching.
    pub fn matcher(&self) -> AliasMatcher {
        AliasMatcher::new(self.aliases.iter().cloned())
    }
}
