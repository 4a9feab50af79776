//! The claim string grammar, compiled once and shared by
//! [`crate::claim`] and [`crate::query`].
//!
//! A resource path built from a single character class
//! (`[A-Za-z0-9_.-]*[A-Za-z0-9_-]`) would — taken literally — also accept a
//! path with an empty segment (`a..b`). Resource segments must be
//! non-empty identifier tokens, so the patterns below are anchored
//! per-segment instead; this accepts exactly the valid strings and rejects
//! the ones with empty segments.

use once_cell::sync::Lazy;
use regex::Regex;

/// `verb:*` — a global claim.
pub static GLOBAL_CLAIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_-]+):\*$").unwrap());

/// `verb:resource[.*]` — a scoped claim, with the trailing `.*` optional
/// sugar. Group 1 is the verb, group 2 the resource body, group 3 (if
/// present) the trailing `.*`.
pub static SCOPED_CLAIM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+):([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)(\.\*)?$").unwrap()
});

/// A bare resource path (no verb prefix), with the trailing `.*` optional,
/// as accepted on the right-hand side of a query hash.
pub static RESOURCE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)(\.\*)?$").unwrap()
});

/// Splits a validated resource body on `.`. Callers must have already
/// matched the body against [`SCOPED_CLAIM`] or [`RESOURCE_PATH`].
pub fn split_resource(resource: &str) -> Vec<String> {
    resource.split('.').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_matches_verb_star() {
        let caps = GLOBAL_CLAIM.captures("read:*").unwrap();
        assert_eq!(&caps[1], "read");
    }

    #[test]
    fn global_rejects_empty_segments_and_non_trailing_wildcard() {
        assert!(!GLOBAL_CLAIM.is_match("read:a.*.b"));
        assert!(!GLOBAL_CLAIM.is_match(":*"));
    }

    #[test]
    fn scoped_rejects_double_dot() {
        assert!(!SCOPED_CLAIM.is_match("read:a..b"));
    }

    #[test]
    fn scoped_accepts_trailing_wildcard() {
        let caps = SCOPED_CLAIM.captures("read:a.b.*").unwrap();
        assert_eq!(&caps[1], "read");
        assert_eq!(&caps[2], "a.b");
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some(".*"));
    }
}
