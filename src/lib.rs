//! Umbrella crate for aliasmatch.
//!
//! This crate stitches the name canonicalizer and the alias matcher together
//! and adds what a screening service needs around them: a YAML alias book and
//! multi-entity screening over it.

pub mod config;

pub use canonical::{Name, NameError, reverse_first_middle, to_name, token_count, tokenize};
pub use config::{AliasBookConfig, ConfigLoadError, EntityAliases, MatcherYamlConfig};
pub use matcher::{
    AliasMatcher, MatchError, MatchRule, PartitionedAliases, match_rule, matches, partition,
    try_match,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// One entity that accepted a screened record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityMatch {
    /// Entity name as written in the alias book.
    pub entity: String,
    /// Rule that accepted the record.
    pub rule: MatchRule,
}

/// Screens records against every entity of an alias book.
///
/// Each entity's aliases are partitioned once when the screener is built.
#[derive(Debug, Clone)]
pub struct Screener {
    entities: Vec<(String, AliasMatcher)>,
    strict: bool,
}

impl Screener {
    pub fn from_config(config: &AliasBookConfig) -> Self {
        let entities = config
            .entities
            .iter()
            .map(|entity| (entity.name.clone(), entity.matcher()))
            .collect();
        Self {
            entities,
            strict: config.matcher.strict,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns every entity whose aliases match `record`, in alias book order.
    ///
    /// In strict mode a record that is not 2 or 3 tokens long is an error;
    /// otherwise it simply matches nothing.
    pub fn screen(&self, record: &str) -> Result<Vec<EntityMatch>, MatchError> {
        let span = info_span!("aliasmatch.screen", record = %record);
        let _guard = span.enter();

        if self.strict {
            to_name(record)?;
        }

        let hits: Vec<EntityMatch> = self
            .entities
            .iter()
            .filter_map(|(entity, matcher)| {
                matcher.match_rule(record).map(|rule| EntityMatch {
                    entity: entity.clone(),
                    rule,
                })
            })
            .collect();

        debug!(hits = hits.len(), "screen_complete");
        Ok(hits)
    }
}

/// One-shot screening of `record` against `config`.
pub fn screen(config: &AliasBookConfig, record: &str) -> Result<Vec<EntityMatch>, MatchError> {
    Screener::from_config(config).screen(record)
}
