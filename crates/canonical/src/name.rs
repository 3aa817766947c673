//! First/middle/last decomposition of company names.
//!
//! A [`Name`] is the triple every matching rule works on. Two-token names
//! ("FIG LLC") carry an empty middle; three-token names ("FIG WorldWide LLC")
//! fill all three slots. Any other shape is rejected with
//! [`NameError::UnsupportedTokenCount`].
//!
//! # Examples
//!
//! ```rust
//! use canonical::{reverse_first_middle, to_name};
//!
//! let name = to_name("FIG Risk LLC").unwrap();
//! assert_eq!(name.first, "FIG");
//! assert_eq!(name.middle, "Risk");
//! assert_eq!(name.last, "LLC");
//!
//! assert_eq!(reverse_first_middle("FIG Risk LLC").unwrap(), "Risk FIG LLC");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;
use crate::token::tokenize;

/// A company name split into first, middle and last tokens.
///
/// `middle` is empty exactly when the source had two tokens. `last` is the
/// entity-suffix token ("LLC", "Inc") and is always compared positionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Name {
    pub first: String,
    #[serde(default)]
    pub middle: String,
    pub last: String,
}

impl Name {
    /// Builds a name from its parts.
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    pub fn has_middle(&self) -> bool {
        !self.middle.is_empty()
    }

    /// Swaps the first and middle tokens, keeping `last` in place.
    ///
    /// A name without a middle re-renders as `"first last"` after the swap,
    /// so it is returned unchanged.
    pub fn transposed(&self) -> Self {
        if !self.has_middle() {
            return self.clone();
        }
        Self {
            first: self.middle.clone(),
            middle: self.first.clone(),
            last: self.last.clone(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for part in [&self.first, &self.middle, &self.last] {
            if part.is_empty() {
                continue;
            }
            write!(f, "{sep}{part}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// Splits `input` into a [`Name`].
///
/// The input is trimmed and split on single spaces. Exactly two or three
/// tokens are accepted.
pub fn to_name(input: &str) -> Result<Name, NameError> {
    match tokenize(input).as_slice() {
        [first, last] => Ok(Name::new(*first, "", *last)),
        [first, middle, last] => Ok(Name::new(*first, *middle, *last)),
        tokens => Err(NameError::UnsupportedTokenCount {
            count: tokens.len(),
        }),
    }
}

/// Renders `input` with its first and middle tokens swapped.
///
/// `"FIG Risk LLC"` becomes `"Risk FIG LLC"`. A two-token input has no middle
/// to swap with and comes back as its trimmed self.
pub fn reverse_first_middle(input: &str) -> Result<String, NameError> {
    Ok(to_name(input)?.transposed().to_string())
}
