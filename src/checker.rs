//! `Checker` — the string-level shortcut API: the same
//! relations as [`crate::claim::Claim`]/[`crate::claim_set::ClaimSet`],
//! but operating directly on raw claim strings, splitting uniformly on
//! both `.` and `:` (the verb is treated as just another path segment).
//!
//! This exists for callers that hold raw strings and cannot afford
//! `Claim` parsing. Its semantics agree with `Claim`/`ClaimSet` on
//! well-formed input; its broader "ancestor" test (verb as a plain
//! segment) diverges from `Claim`'s on pathological input where a verb
//! collides with a resource segment. Kept as its own, deliberately
//! simpler, string-splitting implementation rather than reimplemented
//! atop `Claim`.

use std::collections::BTreeSet;

/// Whether `sub_claims` found an enumerable set, or the sentinel meaning
/// "every key under the namespace is reachable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubClaims {
    All,
    Some(Vec<String>),
}

pub struct Checker;

impl Checker {
    fn tokens(s: &str) -> Vec<&str> {
        s.split(['.', ':']).collect()
    }

    /// Joins tokens back with `:` after the first (the verb) and `.`
    /// between the rest, the inverse of [`Checker::tokens`].
    fn join(tokens: &[&str]) -> String {
        match tokens.split_first() {
            None => String::new(),
            Some((first, rest)) => {
                if rest.is_empty() {
                    first.to_string()
                } else {
                    format!("{first}:{}", rest.join("."))
                }
            }
        }
    }

    /// `query_claims(query, claims)`: true iff some claim rule is an
    /// ancestor (prefix by segment) of the query; a rule ending in `*`
    /// matches any descendant.
    pub fn query_claims(query: &str, claims: &[String]) -> bool {
        let query_tokens = Self::tokens(query);
        claims.iter().any(|claim| {
            let mut rule_tokens = Self::tokens(claim);
            if rule_tokens.last() == Some(&"*") {
                rule_tokens.pop();
            }
            rule_tokens.len() <= query_tokens.len() && rule_tokens[..] == query_tokens[..rule_tokens.len()]
        })
    }

    /// `exact_or_ancestor?(query, claims)`: true iff the exact query, or
    /// any of its segment-prefixes, appears in `claims` — either
    /// literally or suffixed `:*`/`.*`.
    pub fn exact_or_ancestor(query: &str, claims: &[String]) -> bool {
        let claim_set: BTreeSet<&str> = claims.iter().map(String::as_str).collect();
        let tokens = Self::tokens(query);

        for k in (1..=tokens.len()).rev() {
            let prefix = Self::join(&tokens[..k]);
            if claim_set.contains(prefix.as_str()) {
                return true;
            }
            let wildcard = if k == 1 {
                format!("{prefix}:*")
            } else {
                format!("{prefix}.*")
            };
            if claim_set.contains(wildcard.as_str()) {
                return true;
            }
        }
        false
    }

    /// `sub_claims(query, claims)`: the sentinel [`SubClaims::All`] if
    /// `exact_or_ancestor?` holds; otherwise every claim whose string has
    /// `query + "."` or `query + ":"` as a literal prefix.
    pub fn sub_claims(query: &str, claims: &[String]) -> SubClaims {
        if Self::exact_or_ancestor(query, claims) {
            return SubClaims::All;
        }

        let dot_prefix = format!("{query}.");
        let colon_prefix = format!("{query}:");
        let matches: Vec<String> = claims
            .iter()
            .filter(|c| c.starts_with(&dot_prefix) || c.starts_with(&colon_prefix))
            .cloned()
            .collect();
        SubClaims::Some(matches)
    }

    /// `sub_claims_direct_children(query, claims, only_direct)`: the
    /// sorted, unique first segments of `sub_claims` after stripping the
    /// `query + <sep>` prefix. With `only_direct: true`, a sub-claim is
    /// retained only if its remainder is a single segment, optionally
    /// followed by `.*`.
    ///
    /// If `sub_claims` returns the `All` sentinel there is nothing to
    /// enumerate — the accessible key space is unbounded — so this
    /// returns an empty list.
    pub fn sub_claims_direct_children(
        query: &str,
        claims: &[String],
        only_direct: bool,
    ) -> Vec<String> {
        let matches = match Self::sub_claims(query, claims) {
            SubClaims::All => return Vec::new(),
            SubClaims::Some(matches) => matches,
        };

        let dot_prefix = format!("{query}.");
        let colon_prefix = format!("{query}:");

        let mut children: BTreeSet<String> = BTreeSet::new();
        for claim in &matches {
            let remainder = claim
                .strip_prefix(&dot_prefix)
                .or_else(|| claim.strip_prefix(&colon_prefix))
                .expect("sub_claims only returns claims with one of the two prefixes");

            if only_direct && !is_single_segment(remainder) {
                continue;
            }

            if let Some(first) = remainder.split(['.', ':']).next() {
                children.insert(first.to_string());
            }
        }
        children.into_iter().collect()
    }
}

/// A single segment, optionally suffixed `.*` — no further `.`/`:`.
fn is_single_segment(remainder: &str) -> bool {
    let body = remainder.strip_suffix(".*").unwrap_or(remainder);
    !body.is_empty() && !body.contains(['.', ':'])
}
