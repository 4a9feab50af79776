//! `Claim` — a single, immutable, normalised grant.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grammar::{split_resource, GLOBAL_CLAIM, SCOPED_CLAIM};
use crate::query::Query;

/// The resource half of a claim: either absent (a global claim) or a
/// non-empty dotted path, cached pre-split (`resource_parts`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClaimResource {
    Global,
    Scoped(Vec<String>),
}

impl ClaimResource {
    fn body(&self) -> Option<String> {
        match self {
            ClaimResource::Global => None,
            ClaimResource::Scoped(parts) => Some(parts.join(".")),
        }
    }
}

/// An immutable, normalised `verb:resource[.path]` grant.
///
/// Two claims are equal iff their `(verb, resource)` pair is equal —
/// `read:a.b` and `read:a.b.*` parse to the same claim. Ordering and the
/// canonical `clean_string` form are distinct from that equality: they
/// are derived, not stored, since they are cheap to recompute and storing
/// them would duplicate the fields that already determine them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim {
    verb: String,
    resource: ClaimResource,
}

impl Claim {
    /// Parses a single claim string per the claim grammar.
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(caps) = GLOBAL_CLAIM.captures(input) {
            return Ok(Claim {
                verb: caps[1].to_owned(),
                resource: ClaimResource::Global,
            });
        }

        if let Some(caps) = SCOPED_CLAIM.captures(input) {
            let verb = caps[1].to_owned();
            let parts = split_resource(&caps[2]);
            return Ok(Claim {
                verb,
                resource: ClaimResource::Scoped(parts),
            });
        }

        Err(Error::InvalidClaim(input.to_owned()))
    }

    /// Shorthand used throughout the rest of the crate and by callers
    /// that prefer the source API's naming (`Claim.for(s)`).
    pub fn for_string(input: &str) -> Result<Self> {
        Self::parse(input)
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn is_global(&self) -> bool {
        matches!(self.resource, ClaimResource::Global)
    }

    /// `None` for a global claim, `Some(parts)` otherwise.
    pub fn resource_parts(&self) -> Option<&[String]> {
        match &self.resource {
            ClaimResource::Global => None,
            ClaimResource::Scoped(parts) => Some(parts),
        }
    }

    fn resource_body(&self) -> Option<String> {
        self.resource.body()
    }

    /// The canonical textual form: `verb:*` if global, `verb:resource`
    /// otherwise. This is the claim's identity.
    pub fn clean_string(&self) -> String {
        match self.resource_body() {
            None => format!("{}:*", self.verb),
            Some(body) => format!("{}:{}", self.verb, body),
        }
    }

    pub fn as_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.clean_string())
    }

    pub fn to_json(&self) -> String {
        self.as_json().to_string()
    }

    fn same_verb(&self, query: &Query) -> bool {
        self.verb == query.verb
    }

    /// `query?(Q)`.
    pub fn query(&self, query: &Query) -> bool {
        if !self.same_verb(query) {
            return false;
        }
        if self.is_global() {
            return true;
        }
        match &query.resource {
            None => false,
            Some(query_parts) => ancestor_or_equal(self.resource_parts().unwrap(), query_parts),
        }
    }

    /// `exact?(Q)`.
    pub fn exact(&self, query: &Query) -> bool {
        if !self.same_verb(query) {
            return false;
        }
        match (self.is_global(), &query.resource) {
            (true, None) => true,
            (false, Some(query_parts)) => self.resource_parts().unwrap() == query_parts.as_slice(),
            _ => false,
        }
    }

    /// `direct_child(Q)`.
    pub fn direct_child(&self, query: &Query) -> Option<String> {
        if !self.same_verb(query) || self.is_global() {
            return None;
        }
        let parts = self.resource_parts().unwrap();
        match &query.resource {
            None => {
                if parts.len() == 1 {
                    Some(parts[0].clone())
                } else {
                    None
                }
            }
            Some(query_parts) => {
                if parts.len() == query_parts.len() + 1 && parts[..query_parts.len()] == query_parts[..] {
                    Some(parts[query_parts.len()].clone())
                } else {
                    None
                }
            }
        }
    }

    pub fn direct_child_bool(&self, query: &Query) -> bool {
        self.direct_child(query).is_some()
    }

    /// `direct_descendant(Q)`.
    pub fn direct_descendant(&self, query: &Query) -> Option<String> {
        if !self.same_verb(query) || self.is_global() {
            return None;
        }
        let parts = self.resource_parts().unwrap();
        match &query.resource {
            None => Some(parts[0].clone()),
            Some(query_parts) => {
                if parts.len() > query_parts.len() && parts[..query_parts.len()] == query_parts[..] {
                    Some(parts[query_parts.len()].clone())
                } else {
                    None
                }
            }
        }
    }

    pub fn direct_descendant_bool(&self, query: &Query) -> bool {
        self.direct_descendant(query).is_some()
    }
}

/// `ancestor_or_equal(p, r)` over non-empty paths.
fn ancestor_or_equal(p: &[String], r: &[String]) -> bool {
    p == r || (r.len() > p.len() && r[..p.len()] == *p)
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clean_string())
    }
}

impl Ord for Claim {
    fn cmp(&self, other: &Self) -> Ordering {
        self.clean_string().cmp(&other.clean_string())
    }
}

impl PartialOrd for Claim {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Claim {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.clean_string())
    }
}

impl std::str::FromStr for Claim {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(verb: &str, resource: Option<&str>) -> Query {
        Query::new(verb, resource).unwrap()
    }

    #[test]
    fn parses_global() {
        let c = Claim::parse("read:*").unwrap();
        assert!(c.is_global());
        assert_eq!(c.clean_string(), "read:*");
    }

    #[test]
    fn parses_scoped_and_normalises_trailing_wildcard() {
        let a = Claim::parse("read:a.b").unwrap();
        let b = Claim::parse("read:a.b.*").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.clean_string(), "read:a.b");
        assert_eq!(b.clean_string(), "read:a.b");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Claim::parse("").is_err());
        assert!(Claim::parse("noverbcolon").is_err());
        assert!(Claim::parse("read:a.*.b").is_err());
        assert!(Claim::parse("read:").is_err());
        assert!(Claim::parse("read:a..b").is_err());
    }

    #[test]
    fn scenario_direct_child_and_descendant() {
        let c = Claim::parse("read:some.stuff.nested").unwrap();
        assert_eq!(c.direct_descendant(&q("read", Some("what"))), None);
        assert_eq!(
            c.direct_descendant(&q("read", Some("some"))),
            Some("stuff".to_string())
        );
        assert_eq!(
            c.direct_descendant(&q("read", Some("some.stuff"))),
            Some("nested".to_string())
        );
        assert_eq!(
            c.direct_child(&q("read", Some("some.stuff"))),
            Some("nested".to_string())
        );
        assert_eq!(c.direct_child(&q("read", Some("some"))), None);
    }

    #[test]
    fn global_claim_matches_any_resource_but_never_direct() {
        let c = Claim::parse("read:*").unwrap();
        assert!(c.query(&q("read", Some("anything.here"))));
        assert!(c.query(&q("read", None)));
        assert!(!c.direct_child_bool(&q("read", Some("anything"))));
        assert!(!c.direct_descendant_bool(&q("read", None)));
    }
}
