//! `Query` — the "query hash" surface: a single-entry
//! `{verb → resource}` mapping, normalised to `(verb, resource_parts)`.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::grammar::{split_resource, RESOURCE_PATH};

/// A normalised query: a verb plus an optional resource path, already
/// split on `.`. `resource: None` means "no particular resource" — the
/// query hash's resource was absent, empty, or `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub verb: String,
    pub resource: Option<Vec<String>>,
}

impl Query {
    /// Builds a `Query` from a verb and an optional resource string,
    /// recognising absent, empty, `*`, or a valid resource path optionally
    /// suffixed `.*`.
    pub fn new(verb: impl Into<String>, resource: Option<&str>) -> Result<Self> {
        let verb = verb.into();
        if verb.is_empty() {
            return Err(Error::InvalidArgument(
                "query verb must not be empty".to_string(),
            ));
        }

        let resource = parse_query_resource(resource)?;
        Ok(Query { verb, resource })
    }

    /// Convenience constructor for an "any resource" query (the one the
    /// `direct_child`/`direct_descendant` scenarios exercise with `None`).
    pub fn global(verb: impl Into<String>) -> Self {
        Query {
            verb: verb.into(),
            resource: None,
        }
    }
}

fn parse_query_resource(resource: Option<&str>) -> Result<Option<Vec<String>>> {
    match resource {
        None => Ok(None),
        Some("") | Some("*") => Ok(None),
        Some(s) => match RESOURCE_PATH.captures(s) {
            Some(caps) => Ok(Some(split_resource(&caps[1]))),
            None => Err(Error::InvalidArgument(format!(
                "invalid resource in query: {s}"
            ))),
        },
    }
}

impl TryFrom<&Value> for Query {
    type Error = Error;

    /// Parses the literal "query hash" shape: a single-entry JSON object
    /// `{verb: resource_or_null}`.
    fn try_from(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::InvalidArgument("query must be a single-entry object".to_string())
        })?;

        if object.len() != 1 {
            return Err(Error::InvalidArgument(
                "query must have exactly one entry".to_string(),
            ));
        }

        let (verb, resource_value) = object.iter().next().unwrap();
        let resource = match resource_value {
            Value::Null => None,
            Value::String(s) => Some(s.as_str()),
            _ => {
                return Err(Error::InvalidArgument(
                    "query resource must be a string or null".to_string(),
                ))
            }
        };

        Query::new(verb.clone(), resource)
    }
}

impl TryFrom<(&str, Option<&str>)> for Query {
    type Error = Error;

    fn try_from((verb, resource): (&str, Option<&str>)) -> Result<Self> {
        Query::new(verb, resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_absent_empty_and_star() {
        assert_eq!(Query::new("read", None).unwrap().resource, None);
        assert_eq!(Query::new("read", Some("")).unwrap().resource, None);
        assert_eq!(Query::new("read", Some("*")).unwrap().resource, None);
    }

    #[test]
    fn accepts_trailing_wildcard_resource() {
        let q = Query::new("read", Some("a.b.*")).unwrap();
        assert_eq!(q.resource, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn rejects_malformed_resource() {
        assert!(Query::new("read", Some("a..b")).is_err());
        assert!(Query::new("read", Some("a.*.b")).is_err());
    }

    #[test]
    fn parses_from_json_single_entry_object() {
        let q = Query::try_from(&json!({"read": "some.stuff"})).unwrap();
        assert_eq!(q.verb, "read");
        assert_eq!(q.resource, Some(vec!["some".to_string(), "stuff".to_string()]));
    }

    #[test]
    fn rejects_multi_entry_or_non_object() {
        assert!(Query::try_from(&json!({"read": "a", "write": "b"})).is_err());
        assert!(Query::try_from(&json!("not-an-object")).is_err());
        assert!(Query::try_from(&json!({})).is_err());
    }
}
