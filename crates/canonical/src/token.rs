/// Token separator. Only a single ASCII space delimits tokens; tabs and runs
/// of spaces are not collapsed.
pub const TOKEN_SEPARATOR: char = ' ';

/// Splits a raw name into its tokens.
///
/// Leading and trailing whitespace is trimmed first, then the remainder is
/// split on single ASCII spaces. Input that is empty after trimming yields no
/// tokens. Two adjacent spaces produce an empty token between them, so
/// `"FIG  LLC"` has three tokens.
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(tokenize("  FIG WorldWide LLC "), vec!["FIG", "WorldWide", "LLC"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(TOKEN_SEPARATOR).collect()
}

/// Number of tokens [`tokenize`] would produce, without allocating.
pub fn token_count(input: &str) -> usize {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(TOKEN_SEPARATOR).count()
    }
}
