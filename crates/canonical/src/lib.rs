//! aliasmatch canonical name layer.
//!
//! This crate turns raw company names into the `(first, middle, last)`
//! triples the matcher compares. It is deliberately literal.
//!
//! ## What we do
//!
//! - Trim leading/trailing whitespace
//! - Split on single ASCII spaces (no collapsing of repeated separators)
//! - Map 2-token names to `(first, "", last)` and 3-token names to
//!   `(first, middle, last)`
//! - Swap first and middle tokens for transposition checks
//!
//! ## What we don't do
//!
//! No case folding, no Unicode normalization, no punctuation stripping. Two
//! names are equal only if their bytes are equal.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same input, same output.

mod error;
mod name;
mod token;

pub use crate::error::NameError;
pub use crate::name::{reverse_first_middle, to_name, Name};
pub use crate::token::{token_count, tokenize, TOKEN_SEPARATOR};
