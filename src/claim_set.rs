//! `ClaimSet` — an ordered, deduplicated aggregate of [`Claim`]s.

use std::collections::BTreeSet;

use crate::claim::Claim;
use crate::error::Result;
use crate::query::Query;

/// An ordered set of [`Claim`]s, sorted by `clean_string` ascending and
/// deduplicated by claim equality. Construction is the only place parsing
/// can fail (or be skipped, in non-strict mode); every query is a pure
/// fold across members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    /// Builds a `ClaimSet` from an iterator of already-constructed claims.
    pub fn for_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let mut set = ClaimSet {
            claims: claims.into_iter().collect(),
        };
        set.normalise();
        set
    }

    /// Builds a `ClaimSet` from claim strings. With `strict` (the
    /// default, see [`ClaimSet::for_strings_strict`]), the first
    /// `InvalidClaim` aborts construction; otherwise invalid strings are
    /// skipped (and logged at `trace`).
    pub fn for_strings<I, S>(strings: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut claims = Vec::new();
        for s in strings {
            match Claim::parse(s.as_ref()) {
                Ok(claim) => claims.push(claim),
                Err(err) if strict => return Err(err),
                Err(_) => {
                    log::trace!("skipping invalid claim string: {}", s.as_ref());
                }
            }
        }
        Ok(Self::for_claims(claims))
    }

    /// `ClaimSet.for(strings)` with the default `strict: true`.
    pub fn for_strings_strict<I, S>(strings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::for_strings(strings, true)
    }

    fn normalise(&mut self) {
        let deduped: BTreeSet<Claim> = self.claims.drain(..).collect();
        self.claims = deduped.into_iter().collect();
    }

    /// The sole mutating operation: inserts a claim,
    /// re-sorting and deduplicating. Callers sharing a `ClaimSet` across
    /// threads must not call this without external synchronisation, or
    /// should rebuild via [`ClaimSet::for_claims`] instead.
    pub fn add(&mut self, claim: Claim) {
        self.claims.push(claim);
        self.normalise();
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// `query?(Q)`.
    pub fn query(&self, query: &Query) -> bool {
        self.claims.iter().any(|c| c.query(query))
    }

    /// `query_claim?(C')`: true iff some member of this set
    /// matches `C'`'s own `(verb, resource)` treated as a query.
    pub fn query_claim(&self, claim: &Claim) -> bool {
        let query = Query {
            verb: claim.verb().to_string(),
            resource: claim.resource_parts().map(|parts| parts.to_vec()),
        };
        self.query(&query)
    }

    /// `exact?(Q)`.
    pub fn exact(&self, query: &Query) -> bool {
        self.claims.iter().any(|c| c.exact(query))
    }

    /// `direct_children(Q)`: sorted, deduplicated.
    pub fn direct_children(&self, query: &Query) -> Vec<String> {
        let mut children: BTreeSet<String> = BTreeSet::new();
        for claim in &self.claims {
            if let Some(child) = claim.direct_child(query) {
                children.insert(child);
            }
        }
        children.into_iter().collect()
    }

    /// `direct_descendants(Q)`: sorted, deduplicated.
    pub fn direct_descendants(&self, query: &Query) -> Vec<String> {
        let mut descendants: BTreeSet<String> = BTreeSet::new();
        for claim in &self.claims {
            if let Some(descendant) = claim.direct_descendant(query) {
                descendants.insert(descendant);
            }
        }
        descendants.into_iter().collect()
    }

    /// Returns a new `ClaimSet` containing only claims matching `pred`.
    pub fn select(&self, pred: impl Fn(&Claim) -> bool) -> Self {
        ClaimSet::for_claims(self.claims.iter().filter(|c| pred(c)).cloned())
    }

    /// Returns a new `ClaimSet` containing only claims not matching `pred`.
    pub fn reject(&self, pred: impl Fn(&Claim) -> bool) -> Self {
        self.select(|c| !pred(c))
    }

    pub fn as_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.claims.iter().map(Claim::as_json).collect())
    }

    pub fn to_json(&self) -> String {
        self.as_json().to_string()
    }
}

impl FromIterator<Claim> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        ClaimSet::for_claims(iter)
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}
