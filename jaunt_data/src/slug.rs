//! Canonical identifier ("slug") derivation and validation.
//!
//! Every piece of content in the catalog is keyed by a slug: lowercase
//! alphanumeric segments joined by single hyphens, with no leading or
//! trailing hyphen and no empty segment. [`derive`] mints a slug from a
//! free-form title; [`is_valid`] checks whether a string already conforms.
//! Anything arriving from outside the process (URLs, user edits) must pass
//! [`is_valid`] before being used as a lookup key.

/// Derive a canonical slug from an arbitrary title.
///
/// Lowercases the input, folds runs of whitespace and underscores into a
/// single hyphen, drops every other character that is not an ASCII letter
/// or digit, and trims stray hyphens from the ends. Total over all inputs:
/// an empty or all-punctuation title yields an empty string, which callers
/// must treat as "no usable identifier" (see [`is_valid`]).
///
/// Idempotent: deriving from an already-derived slug returns it unchanged.
pub fn derive(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else if ch == '-' || ch == '_' || ch.is_whitespace() {
            // Separators fold into one hyphen; leading/trailing runs vanish.
            pending_dash = true;
        }
        // Any other character (punctuation, symbols, non-ASCII letters
        // after lowercasing) is deleted without acting as a separator.
    }
    slug
}

/// Return `true` when `candidate` already matches the canonical format.
///
/// Pure predicate, no normalization: lowercase ASCII alphanumeric segments
/// joined by single hyphens. Rejects the empty string, uppercase letters,
/// underscores, doubled hyphens, and hyphens at either end.
pub fn is_valid(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.starts_with('-')
        && !candidate.ends_with('-')
        && !candidate.contains("--")
        && candidate
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
