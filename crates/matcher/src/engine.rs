use canonical::{to_name, token_count, Name};
use tracing::debug;

use crate::partition::{partition, PartitionedAliases};
use crate::rules::{
    exact_match, matching_middle_initial, middle_missing_on_alias, middle_missing_on_record,
};
use crate::types::{MatchError, MatchRule};


/// Returns `true` if `record` names the same entity as any of `aliases`.
///
/// Malformed records (fewer than 2 or more than 3 tokens) never match.
pub fn matches<S: AsRef<str>>(aliases: &[S], record: &str) -> bool {
    match_rule(aliases, record).is_some()
}

/// Like [`matches`], but reports which rule accepted the record.
pub fn match_rule<S: AsRef<str>>(aliases: &[S], record: &str) -> Option<MatchRule> {
    let (record_name, record_tokens) = gate(record)?;

    if let Some(rule) = exact_rules(aliases, record, &record_name) {
        return log_hit(record, rule);
    }

    let parts = partition(aliases);
    let rule = equivalence_rules(&parts, &record_name, record_tokens)?;
    log_hit(record, rule)
}

/// Strict variant of [`match_rule`].
///
/// Malformed records and empty alias sets are reported as errors instead of
/// being folded into "no match".
pub fn try_match<S: AsRef<str>>(
    aliases: &[S],
    record: &str,
) -> Result<Option<MatchRule>, MatchError> {
    if aliases.is_empty() {
        return Err(MatchError::EmptyAliasSet);
    }
    to_name(record)?;
    Ok(match_rule(aliases, record))
}

/// An alias set prepared once and matched against many records.
///
/// Produces exactly the same decisions as [`match_rule`] over the same
/// aliases; the partitioning is simply not repeated per record.
#[derive(Debug, Clone)]
pub struct AliasMatcher {
    aliases: Vec<String>,
    parts: PartitionedAliases,
}

impl AliasMatcher {
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        let parts = partition(aliases.as_slice());
        Self { aliases, parts }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn partitions(&self) -> &PartitionedAliases {
        &self.parts
    }

    pub fn matches(&self, record: &str) -> bool {
        self.match_rule(record).is_some()
    }

    pub fn match_rule(&self, record: &str) -> Option<MatchRule> {
        let (record_name, record_tokens) = gate(record)?;
        let rule = exact_rules(&self.aliases, record, &record_name)
            .or_else(|| equivalence_rules(&self.parts, &record_name, record_tokens))?;
        log_hit(record, rule)
    }
}

/// Only 2- and 3-token records are considered.
fn gate(record: &str) -> Option<(Name, usize)> {
    match to_name(record) {
        Ok(name) => Some((name, token_count(record))),
        Err(err) => {
            debug!(record, error = %err, "record_rejected");
            None
        }
    }
}

fn exact_rules<S: AsRef<str>>(
    aliases: &[S],
    record: &str,
    record_name: &Name,
) -> Option<MatchRule> {
    if exact_match(aliases, record.trim()) {
        return Some(MatchRule::Exact);
    }
    if exact_match(aliases, &record_name.transposed().to_string()) {
        return Some(MatchRule::ExactTransposed);
    }
    None
}

fn equivalence_rules(
    parts: &PartitionedAliases,
    record: &Name,
    record_tokens: usize,
) -> Option<MatchRule> {
    if matching_middle_initial(parts, record, record_tokens) {
        return Some(MatchRule::MiddleInitial);
    }

    let transposed = record.transposed();
    if middle_missing_on_alias(parts, record) || middle_missing_on_alias(parts, &transposed) {
        return Some(MatchRule::MiddleOmittedOnAlias);
    }
    if middle_missing_on_record(parts, record) || middle_missing_on_record(parts, &transposed) {
        return Some(MatchRule::MiddleOmittedOnRecord);
    }

    None
}

fn log_hit(record: &str, rule: MatchRule) -> Option<MatchRule> {
    debug!(record, rule = %rule, "record_matched");
    Some(rule)
}
