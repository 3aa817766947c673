//! # aliasmatch Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides whether a free-text company name (the *record*) is the
//! same legal entity as any of a known set of approved name variants (the
//! *aliases*). It sits on top of [`canonical`], which splits names into
//! `(first, middle, last)` triples.
//!
//! The decision is a strict boolean. Tolerated variation:
//! - missing middle token on either side (`"FIG LLC"` vs `"FIG WorldWide LLC"`)
//! - middle initial vs full middle (`"FIG W LLC"` vs `"FIG WorldWide LLC"`)
//! - first/middle transposition (`"Risk FIG LLC"` vs `"FIG Risk LLC"`)
//!
//! The last token (entity suffix) must always match exactly and in place.
//!
//! ## Rule order
//!
//! 1. Records with fewer than 2 or more than 3 tokens are rejected.
//! 2. [`MatchRule::Exact`], then [`MatchRule::ExactTransposed`].
//! 3. [`MatchRule::MiddleInitial`].
//! 4. [`MatchRule::MiddleOmittedOnAlias`], record as given and transposed.
//! 5. [`MatchRule::MiddleOmittedOnRecord`], record as given and transposed.
//!
//! The first rule that succeeds wins.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{match_rule, matches, AliasMatcher, MatchRule};
//!
//! let aliases = ["FIG WorldWide LLC", "FIG F LLC"];
//! assert!(matches(&aliases, "FIG W LLC"));
//! assert!(!matches(&aliases, "FIG E LLC"));
//! assert_eq!(match_rule(&aliases, "FIG LLC"), Some(MatchRule::MiddleOmittedOnRecord));
//!
//! // Prepare once, match many.
//! let prepared = AliasMatcher::new(aliases);
//! assert!(prepared.matches("FIG Finance LLC"));
//! ```
//!
//! ## Errors
//!
//! [`matches`] and [`match_rule`] never fail; malformed input is simply "no
//! match". Callers that need to tell the two apart use [`try_match`].
//!
//! ## Observability
//!
//! Decisions are reported through `tracing` at `debug` level
//! (`record_matched`, `record_rejected`); skipped aliases at `trace`.

pub mod engine;
pub mod partition;
pub mod rules;
pub mod types;

pub use crate::engine::{match_rule, matches, try_match, AliasMatcher};
pub use crate::partition::{partition, PartitionedAliases};
pub use crate::types::{MatchError, MatchRule};
