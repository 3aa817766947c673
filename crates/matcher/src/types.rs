use std::fmt;

use canonical::NameError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The equivalence rule that accepted a record.
///
/// Rules are tried in declaration order; the first one that succeeds is
/// reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// The record is byte-for-byte one of the aliases.
    Exact,
    /// The record with first and middle swapped is one of the aliases.
    ExactTransposed,
    /// A single-character middle token stands for a full middle token.
    MiddleInitial,
    /// The alias has no middle token; the record's first or middle lines up
    /// with the alias first.
    MiddleOmittedOnAlias,
    /// The record has no middle token; its first lines up with an alias
    /// first or middle.
    MiddleOmittedOnRecord,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::ExactTransposed => "exact_transposed",
            MatchRule::MiddleInitial => "middle_initial",
            MatchRule::MiddleOmittedOnAlias => "middle_omitted_on_alias",
            MatchRule::MiddleOmittedOnRecord => "middle_omitted_on_record",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the strict matching entry point.
///
/// The lenient entry points never return these; they report `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The record does not have 2 or 3 tokens.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] NameError),
    /// There is nothing to match against.
    #[error("alias set is empty")]
    EmptyAliasSet,
}
