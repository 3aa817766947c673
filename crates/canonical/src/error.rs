use thiserror::Error;

/// Errors that can occur while splitting a name into a triple.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name must have 2 or 3 space-separated tokens, found {count}")]
    UnsupportedTokenCount { count: usize },
}
