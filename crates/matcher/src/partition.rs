//! Call-scoped views over an alias set.
//!
//! The rules in [`crate::rules`] each look at the aliases through a different
//! lens: two-token aliases for the missing-middle-on-alias rule, the middle
//! tokens of longer aliases for middle-initial equivalence, and full triples
//! for the missing-middle-on-record rule. [`partition`] computes all three in
//! one pass.

use canonical::{to_name, tokenize, Name};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Projections of an alias set used by the matching rules.
///
/// Only membership matters; order follows the alias set but nothing relies
/// on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionedAliases {
    /// `(first, last)` of every alias with exactly two tokens.
    pub two_token: Vec<(String, String)>,
    /// Token at index 1 of every alias with three or more tokens.
    pub three_token_middles: Vec<String>,
    /// Every alias that splits into a [`Name`]. Aliases with an unsupported
    /// token count are left out.
    pub names: Vec<Name>,
}

/// Partitions `aliases` into the views the rules consume.
pub fn partition<S: AsRef<str>>(aliases: &[S]) -> PartitionedAliases {
    let mut parts = PartitionedAliases::default();

    for alias in aliases {
        let alias = alias.as_ref();
        let tokens = tokenize(alias);
        match tokens.len() {
            2 => parts
                .two_token
                .push((tokens[0].to_string(), tokens[1].to_string())),
            n if n >= 3 => parts.three_token_middles.push(tokens[1].to_string()),
            _ => {}
        }

        match to_name(alias) {
            Ok(name) => parts.names.push(name),
            Err(err) => trace!(alias, error = %err, "alias_skipped"),
        }
    }

    parts
}
