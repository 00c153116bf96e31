//! Token normalization
//!
//! Vocabulary entries and player input pass through the same normalization
//! rules so lookups can never disagree on case or stray whitespace.
//! Vocabulary tokens may carry an underscore-joined tag (part of speech or
//! word sense, e.g. `bank_NOUN`); the part before the first underscore is
//! the bare surface word shown to players.

/// Normalize a raw word: trim surrounding whitespace and lowercase.
///
/// Applied to every external input and to every vocabulary token at load
/// time, in both the guess and target paths.
///
/// # Examples
/// ```
/// use semantix::core::normalize;
///
/// assert_eq!(normalize("  Chien "), "chien");
/// assert_eq!(normalize("BANK_NOUN"), "bank_noun");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Strip a tag suffix from a token, returning the bare surface word.
///
/// Everything from the first underscore onward is dropped. Untagged tokens
/// are returned unchanged.
///
/// # Examples
/// ```
/// use semantix::core::strip_tag;
///
/// assert_eq!(strip_tag("bank_noun"), "bank");
/// assert_eq!(strip_tag("chat"), "chat");
/// assert_eq!(strip_tag("a_b_c"), "a");
/// ```
#[inline]
#[must_use]
pub fn strip_tag(token: &str) -> &str {
    token.split('_').next().unwrap_or(token)
}

/// Check whether a token carries a tag suffix.
#[inline]
#[must_use]
pub fn is_tagged(token: &str) -> bool {
    token.contains('_')
}
