//! Equivalence rules.
//!
//! Each rule is a pure predicate over the record and a view of the aliases.
//! The engine decides ordering and short-circuiting; rules only answer
//! "does this one apply".

use canonical::Name;

use crate::partition::PartitionedAliases;

/// Byte-exact membership of `candidate` in `aliases`.
pub fn exact_match<S: AsRef<str>>(aliases: &[S], candidate: &str) -> bool {
    aliases.iter().any(|alias| alias.as_ref() == candidate)
}

/// Middle-initial equivalence.
///
/// `record_tokens` is the token count of the record as gated by the engine.
/// The rule never applies to two-token records, and it is skipped when the
/// number of three-or-more-token aliases equals `record_tokens`.
pub fn matching_middle_initial(
    parts: &PartitionedAliases,
    record: &Name,
    record_tokens: usize,
) -> bool {
    if record_tokens == 2 {
        return false;
    }
    // Preserved as observed: skip when these two counts coincide.
    if parts.three_token_middles.len() == record_tokens {
        return false;
    }

    let record_middle = record.middle.as_str();
    parts.three_token_middles.iter().any(|alias_middle| {
        is_initial_of(record_middle, alias_middle) || is_initial_of(alias_middle, record_middle)
    })
}

/// The alias drops the middle token that the record carries.
pub fn middle_missing_on_alias(parts: &PartitionedAliases, record: &Name) -> bool {
    if !record.has_middle() || parts.two_token.is_empty() {
        return false;
    }

    parts.two_token.iter().any(|(alias_first, alias_last)| {
        *alias_last == record.last
            && (*alias_first == record.first || *alias_first == record.middle)
    })
}

/// The record drops the middle token that an alias carries.
pub fn middle_missing_on_record(parts: &PartitionedAliases, record: &Name) -> bool {
    if record.has_middle() {
        return false;
    }

    parts.names.iter().any(|alias| {
        alias.last == record.last && (record.first == alias.first || record.first == alias.middle)
    })
}

/// `initial` is a single character equal to the first character of `full`.
fn is_initial_of(initial: &str, full: &str) -> bool {
    let mut chars = initial.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => full.chars().next() == Some(c),
        _ => false,
    }
}
