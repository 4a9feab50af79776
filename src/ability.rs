//! `Ability` — composes a permitted and a prohibited [`ClaimSet`] and
//! derives [`KeySet`] views over sub-namespaces.

use crate::claim_set::ClaimSet;
use crate::error::{Error, Result};
use crate::key_set::KeySet;
use crate::query::Query;

/// A pair of claim sets after reduction: every permitted claim the
/// prohibited set already covers is dropped at construction time. The
/// reduction is asymmetric — prohibited is never reduced against
/// permitted: a denial must persist even if nothing currently grants it,
/// so a later `add` on the permitted set can't leak past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    permitted: ClaimSet,
    prohibited: ClaimSet,
}

impl Ability {
    pub fn new(permitted: ClaimSet, prohibited: ClaimSet) -> Self {
        let before = permitted.len();
        let permitted = permitted.reject(|claim| prohibited.query_claim(claim));
        log::debug!(
            "ability reduced permitted set from {} to {} claims against {} prohibitions",
            before,
            permitted.len(),
            prohibited.len()
        );
        Ability {
            permitted,
            prohibited,
        }
    }

    pub fn permitted(&self) -> &ClaimSet {
        &self.permitted
    }

    pub fn prohibited(&self) -> &ClaimSet {
        &self.prohibited
    }

    /// `can?(Q)`. A malformed query hash surfaces as
    /// [`Error::InvalidClaim`] at this boundary, converting the
    /// lower-level `InvalidArgument` from query parsing.
    pub fn can(&self, query: &Query) -> bool {
        self.permitted.query(query) && !self.prohibited.query(query)
    }

    /// Fallible variant accepting the raw `(verb, resource)` pair,
    /// matching the source's convention of surfacing parse failures as
    /// `InvalidClaim` at the `Ability` boundary.
    pub fn can_query(&self, verb: &str, resource: Option<&str>) -> Result<bool> {
        let query = Query::new(verb, resource)
            .map_err(|err| Error::InvalidClaim(format!("malformed query: {err}")))?;
        Ok(self.can(&query))
    }

    pub fn cannot(&self, query: &Query) -> bool {
        !self.can(query)
    }

    /// `explicitly_prohibited?(Q)`.
    pub fn explicitly_prohibited(&self, query: &Query) -> bool {
        self.prohibited.query(query)
    }

    /// `access_to_resources(Q)`. The asymmetry between
    /// `direct_descendants` on the positive side and `direct_child` on
    /// the negative side is deliberate: a grant anywhere under the
    /// namespace counts a key as allowed, but a denial only removes the
    /// single key directly beneath it, never the whole subtree.
    pub fn access_to_resources(&self, query: &Query) -> KeySet {
        let allowed = if self.permitted.query(query) {
            KeySet::all()
        } else {
            KeySet::some(self.permitted.direct_descendants(query))
        };

        let forbidden = if self.prohibited.query(query) {
            KeySet::all()
        } else {
            KeySet::some(self.prohibited.direct_children(query))
        };

        allowed.remove(forbidden)
    }

    fn resource_query(verb: &str, resource: &str) -> Result<Query> {
        Query::new(verb, Some(resource))
    }

    pub fn access_to_client_keys(&self, verb: &str) -> Result<KeySet> {
        Ok(self.access_to_resources(&Self::resource_query(verb, "clients")?))
    }

    pub fn access_to_business_group_keys(&self, verb: &str) -> Result<KeySet> {
        Ok(self.access_to_resources(&Self::resource_query(verb, "business-groups")?))
    }

    pub fn access_to_project_keys(&self, verb: &str, client: &str) -> Result<KeySet> {
        let resource = format!("clients.{client}.projects.project");
        Ok(self.access_to_resources(&Self::resource_query(verb, &resource)?))
    }

    pub fn access_to_team_keys(&self, verb: &str, client: &str) -> Result<KeySet> {
        let resource = format!("clients.{client}.teams.team");
        Ok(self.access_to_resources(&Self::resource_query(verb, &resource)?))
    }

    pub fn access_to_people_ids(&self, verb: &str, client: &str) -> Result<KeySet> {
        let resource = format!("clients.{client}.people");
        Ok(self.access_to_resources(&Self::resource_query(verb, &resource)?))
    }

    pub fn access_to_programme_keys(&self, verb: &str, client: &str) -> Result<KeySet> {
        let resource = format!("clients.{client}.programmes.programme");
        Ok(self.access_to_resources(&Self::resource_query(verb, &resource)?))
    }
}
